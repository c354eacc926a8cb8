//! Win32 backend.
//!
//! Thin `io::Result` wrappers over the handful of kernel32 entry points the
//! crate uses.  Each wrapper makes exactly one call and reports failure via
//! `io::Error::last_os_error()`; no retry, no interpretation.

use std::ffi::c_void;
use std::io;
use std::ptr;

use windows_sys::Win32::Foundation::{CloseHandle, GENERIC_READ, GENERIC_WRITE};
use windows_sys::Win32::Storage::FileSystem::{
    CreateFileW, FILE_ATTRIBUTE_NORMAL, FILE_SHARE_READ, FILE_SHARE_WRITE, GetDriveTypeW,
    GetLogicalDrives, OPEN_EXISTING,
};
use windows_sys::Win32::System::IO::DeviceIoControl;
use windows_sys::Win32::System::Power::GetDevicePowerState;

use super::{INVALID_HANDLE, RawHandle};

/// Build a null-terminated UTF-16 string for the Win32 API.
fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(Some(0)).collect()
}

/// Open a device for read/write, shared with other processes.
pub(crate) fn open_device(path: &str) -> io::Result<RawHandle> {
    let path = wide(path);
    let raw = unsafe {
        CreateFileW(
            path.as_ptr(),
            GENERIC_READ | GENERIC_WRITE,
            FILE_SHARE_READ | FILE_SHARE_WRITE,
            ptr::null(),
            OPEN_EXISTING,
            FILE_ATTRIBUTE_NORMAL,
            ptr::null_mut(),
        )
    };
    if raw == INVALID_HANDLE {
        return Err(io::Error::last_os_error());
    }
    Ok(raw)
}

pub(crate) fn close_handle(raw: RawHandle) -> io::Result<()> {
    if unsafe { CloseHandle(raw) } == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// One `DeviceIoControl` invocation.  Returns the number of bytes the
/// driver wrote into the output buffer.
///
/// # Safety contract (upheld by the gateway)
/// `in_ptr`/`in_len` and `out_ptr`/`out_len` must describe valid buffers
/// or be null/zero.
pub(crate) fn device_io_control(
    raw: RawHandle,
    code: u32,
    in_ptr: *const c_void,
    in_len: u32,
    out_ptr: *mut c_void,
    out_len: u32,
) -> io::Result<u32> {
    let mut bytes_returned = 0u32;
    let ok = unsafe {
        DeviceIoControl(
            raw,
            code,
            in_ptr,
            in_len,
            out_ptr,
            out_len,
            &mut bytes_returned,
            ptr::null_mut(),
        )
    };
    if ok == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(bytes_returned)
}

/// Query the device's power state (on/off).
pub(crate) fn device_power_state(raw: RawHandle) -> io::Result<bool> {
    let mut on = 0i32;
    if unsafe { GetDevicePowerState(raw, &mut on) } == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(on != 0)
}

/// Bitmask of mounted logical drives; bit 0 is `A:`.
pub(crate) fn logical_drive_mask() -> u32 {
    unsafe { GetLogicalDrives() }
}

/// Raw drive-type value for a root path such as `C:\`.  Failures come
/// back as `DRIVE_UNKNOWN` (0) from the OS itself.
pub(crate) fn drive_type(root: &str) -> u32 {
    let root = wide(root);
    unsafe { GetDriveTypeW(root.as_ptr()) }
}
