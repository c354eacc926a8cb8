//! Facility facades: themed groups of control codes over one gateway.
//!
//! Each facade borrows the owning [`crate::Device`] and holds no state of
//! its own; every operation is a table-driven passthrough to
//! [`crate::Device::call`] with the facility's codes and `#[repr(C)]`
//! value types.

pub mod disc;
pub mod fs;
pub mod storage;
pub mod volume;

pub use disc::{Disc, DiskGeometry};
pub use fs::{FileSystem, NtfsVolumeData};
pub use storage::{Storage, StorageDeviceNumber};
pub use volume::{DiskExtent, Volume};
