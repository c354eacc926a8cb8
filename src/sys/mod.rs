//! Native system-call boundary.
//!
//! Everything that crosses into the operating system goes through this
//! module: one backend makes the real Win32 calls, the other fails every
//! device operation with `ErrorKind::Unsupported` so the crate builds and
//! its pure-logic tests run on any host.  Callers get `io::Result` values
//! carrying the platform's last-error code; classification into
//! `DeviceError` happens one layer up.

use std::ffi::c_void;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::*;

#[cfg(not(windows))]
mod stub;
#[cfg(not(windows))]
pub(crate) use stub::*;

/// Opaque native device handle, exclusively owned by one `DeviceHandle`.
pub(crate) type RawHandle = *mut c_void;

/// The value `CreateFileW` returns on failure, and what a closed handle
/// is swapped to so stale calls fail in the OS instead of touching a
/// dangling handle.
pub(crate) const INVALID_HANDLE: RawHandle = -1isize as RawHandle;
