// src/lib.rs
// ────────────────────────────────────────────────────────────────────────────
// Public library entry point.  Re-export the gateway, the marshaling
// primitives and the drive enumerator for consumers and integration tests.

//! Typed wrappers around the Windows `DeviceIoControl` call family.
//!
//! One [`Device`] owns one opened device handle (by drive letter or by
//! physical-drive id) and marshals `#[repr(C)]` request/response values
//! across IOCTL calls.  Facility facades group the control codes:
//!
//! - [`facility::Disc`] — disk geometry, length, writability
//! - [`facility::Storage`] — device number, media presence and removal
//! - [`facility::Volume`] — disk extents, cluster membership
//! - [`facility::FileSystem`] — FSCTL calls (drive-letter handles only)
//!
//! All calls are synchronous and blocking; one attempt per call, no retry.
//! On non-Windows hosts every native entry point fails with
//! [`DeviceError::UnsupportedOnThisPlatform`] so the crate still builds and
//! its pure-logic tests run.

pub mod device;
pub mod drives;
pub mod error;
pub mod facility;
pub mod ioctl;

mod macros;
mod sys;

pub use device::{Device, DeviceHandle, DeviceIdentity};
pub use drives::{DriveKind, logical_drives};
pub use error::{DeviceError, Result};
pub use ioctl::{ControlCode, IoBuffer, IoOutput};
