//! Non-Windows backend: every device operation fails with
//! `ErrorKind::Unsupported`, drive enumeration reports nothing mounted.
//! Keeps the crate compiling and `cargo test` useful on other hosts.

use std::ffi::c_void;
use std::io;

use super::RawHandle;

fn unsupported() -> io::Error {
    io::Error::from(io::ErrorKind::Unsupported)
}

pub(crate) fn open_device(_path: &str) -> io::Result<RawHandle> {
    Err(unsupported())
}

pub(crate) fn close_handle(_raw: RawHandle) -> io::Result<()> {
    Err(unsupported())
}

pub(crate) fn device_io_control(
    _raw: RawHandle,
    _code: u32,
    _in_ptr: *const c_void,
    _in_len: u32,
    _out_ptr: *mut c_void,
    _out_len: u32,
) -> io::Result<u32> {
    Err(unsupported())
}

pub(crate) fn device_power_state(_raw: RawHandle) -> io::Result<bool> {
    Err(unsupported())
}

pub(crate) fn logical_drive_mask() -> u32 {
    0
}

pub(crate) fn drive_type(_root: &str) -> u32 {
    0 // DRIVE_UNKNOWN
}
