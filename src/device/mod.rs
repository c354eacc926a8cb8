//! The typed IOCTL gateway.
//!
//! One [`Device`] owns one opened handle and offers the generic operation:
//! copy a typed input into a native buffer, invoke `DeviceIoControl` once,
//! decode the native output buffer back into a typed result.  The facility
//! facades ([`crate::facility`]) are stateless wrappers that call back into
//! [`Device::call`] with their own code tables.
//!
//! Key responsibilities:
//! - Open a handle by drive letter or physical-drive id.
//! - Marshal `IoBuffer` values across the call (null pointer when absent).
//! - Surface native failures as `DeviceError::Os`, or as `None` through
//!   the non-raising shape.
//! - Release the handle exactly once on close, with drop as a safety net.

pub mod handle;
pub mod identity;

pub use handle::DeviceHandle;
pub use identity::DeviceIdentity;

use std::ffi::c_void;
use std::mem::MaybeUninit;
use std::ptr;

use log::Level;

use crate::error::{DeviceError, Result};
use crate::facility::{Disc, FileSystem, Storage, Volume};
use crate::ioctl::{ControlCode, IoBuffer, IoOutput};
use crate::ioctl_log;
use crate::sys;

/// An opened device plus the identity it was addressed by.
///
/// Synchronous and blocking throughout: every call is one direct trip into
/// the OS, there is no queue and no internal locking.  Callers needing
/// concurrent access serialize externally.
#[derive(Debug)]
pub struct Device {
    handle: DeviceHandle,
    identity: DeviceIdentity,
    path: String,
}

impl Device {
    /// Open by drive letter, e.g. `"C"` or `"c:"`.
    pub fn drive(name: &str) -> Result<Self> {
        Self::open(DeviceIdentity::from_drive_name(name)?)
    }

    /// Open by physical-drive id.  Legacy addressing: the filesystem
    /// facade is unavailable on handles opened this way.
    pub fn physical(id: u8) -> Result<Self> {
        Self::open(DeviceIdentity::PhysicalDrive(id))
    }

    /// Dual-form constructor mirroring the classic API: exactly one of
    /// the two must be supplied.
    pub fn new(physical_id: Option<u8>, drive_name: Option<&str>) -> Result<Self> {
        Self::open(DeviceIdentity::from_parts(physical_id, drive_name)?)
    }

    fn open(identity: DeviceIdentity) -> Result<Self> {
        let path = identity.device_path();
        let handle = DeviceHandle::open(&path)?;
        ioctl_log!(Level::Info, "gateway", "device ready: {}", path);
        Ok(Self { handle, identity, path })
    }

    /// The resolved NT device path, e.g. `\\.\C:`.
    pub fn name(&self) -> &str {
        &self.path
    }

    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// The physical-drive id, when the device was addressed that way.
    pub fn physical_id(&self) -> Option<u8> {
        self.identity.physical_id()
    }

    /// Whether the device reports itself powered on.
    pub fn is_on(&self) -> Result<bool> {
        sys::device_power_state(self.handle.raw())
            .map_err(|e| DeviceError::os("GetDevicePowerState", e))
    }

    /// Send `code` with an optional typed input and decode a typed output.
    ///
    /// The output buffer is sized to `O` and zero-initialized, so a short
    /// write leaves the tail zeroed; `bytes_returned` reports what the
    /// driver actually wrote and never exceeds `size_of::<O>()`.  A
    /// zero-sized input (or `None`) passes no input buffer at all.
    pub fn call<I, O>(&self, code: ControlCode, input: Option<&I>) -> Result<IoOutput<O>>
    where
        I: IoBuffer,
        O: IoBuffer,
    {
        let (in_ptr, in_len) = input_buffer(input);

        let out_len = size_of::<O>() as u32;
        // SAFETY: IoBuffer guarantees the all-zero pattern is a valid O.
        let mut out = MaybeUninit::<O>::zeroed();
        let out_ptr = if out_len == 0 {
            ptr::null_mut()
        } else {
            out.as_mut_ptr() as *mut c_void
        };

        let bytes = sys::device_io_control(self.handle.raw(), code.get(), in_ptr, in_len, out_ptr, out_len)
            .map_err(|e| {
                ioctl_log!(
                    Level::Debug,
                    "gateway",
                    "code 0x{:08X} on {} failed: {}",
                    code.get(),
                    self.path,
                    e
                );
                DeviceError::os("DeviceIoControl", e)
            })?;

        Ok(IoOutput {
            // SAFETY: zero-initialized above; driver writes only refine it.
            value: unsafe { out.assume_init() },
            // The kernel never reports more than the buffer it was given.
            bytes_returned: bytes.min(out_len),
        })
    }

    /// Non-raising shape of [`Device::call`] for capability checks:
    /// `None` means the call failed, with no partial output.
    pub fn try_call<I, O>(&self, code: ControlCode, input: Option<&I>) -> Option<IoOutput<O>>
    where
        I: IoBuffer,
        O: IoBuffer,
    {
        self.call(code, input).ok()
    }

    /// Disc control-code group.
    pub fn disc(&self) -> Disc<'_> {
        Disc::new(self)
    }

    /// Storage control-code group.
    pub fn storage(&self) -> Storage<'_> {
        Storage::new(self)
    }

    /// Volume control-code group.
    pub fn volume(&self) -> Volume<'_> {
        Volume::new(self)
    }

    /// Filesystem (FSCTL) group.  `None` when the device was opened by
    /// physical id: those control codes need a path-based handle.
    pub fn file_system(&self) -> Option<FileSystem<'_>> {
        self.identity.supports_fsctl().then(|| FileSystem::new(self))
    }

    /// Explicit, idempotent release of the native handle.  After a
    /// successful close every further call fails with an OS error.
    pub fn close(&mut self) -> Result<()> {
        self.handle.close()
    }

    /// Whether the handle has been released.
    pub fn is_closed(&self) -> bool {
        self.handle.is_closed()
    }
}

/// Input-side marshaling rule: an absent or zero-sized input passes no
/// buffer at all, matching what the native call expects for
/// parameterless control codes.
fn input_buffer<I: IoBuffer>(input: Option<&I>) -> (*const c_void, u32) {
    match input {
        Some(value) if size_of::<I>() > 0 => {
            (value as *const I as *const c_void, size_of::<I>() as u32)
        }
        _ => (ptr::null(), 0),
    }
}
