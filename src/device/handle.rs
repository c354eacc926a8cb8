//! RAII ownership of one native device handle.
//!
//! Release is explicit and idempotent: `close()` is the primary path and
//! may be called twice (the second call is a no-op).  `Drop` is only a
//! safety net — it closes a still-open handle and logs a leak warning,
//! because a failed `CloseHandle` can no longer be surfaced there.

use log::Level;

use crate::error::{DeviceError, Result};
use crate::ioctl_log;
use crate::sys::{self, INVALID_HANDLE, RawHandle};

/// Exclusively owned, opened device handle.
#[derive(Debug)]
pub struct DeviceHandle {
    raw: RawHandle,
    closed: bool,
}

// The handle is a plain kernel object reference; all calls through it are
// blocking and externally serialized per the crate's concurrency model.
unsafe impl Send for DeviceHandle {}

impl DeviceHandle {
    /// Open `path` (e.g. `\\.\C:`) for read/write, shared with other
    /// processes.
    pub fn open(path: &str) -> Result<Self> {
        let raw = sys::open_device(path).map_err(|e| DeviceError::os("CreateFileW", e))?;
        ioctl_log!(Level::Debug, "handle", "opened {}", path);
        Ok(Self { raw, closed: false })
    }

    /// The raw handle value for native calls.
    ///
    /// After `close()` this is `INVALID_HANDLE_VALUE`, so stale calls are
    /// rejected by the OS instead of reaching a recycled handle.
    pub(crate) fn raw(&self) -> RawHandle {
        self.raw
    }

    /// Explicit, idempotent release.  A second call does nothing; a
    /// failed `CloseHandle` surfaces as an OS error and leaves the handle
    /// eligible for another attempt.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        sys::close_handle(self.raw).map_err(|e| DeviceError::os("CloseHandle", e))?;
        self.raw = INVALID_HANDLE;
        self.closed = true;
        Ok(())
    }

    /// Whether the handle has been released.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// A handle that was already released.  Its raw value is
    /// `INVALID_HANDLE_VALUE`, so any native call through it is rejected
    /// by the backend instead of reaching a recycled handle.
    #[cfg(test)]
    pub(crate) fn already_closed() -> Self {
        Self { raw: INVALID_HANDLE, closed: true }
    }
}

impl Drop for DeviceHandle {
    fn drop(&mut self) {
        if !self.closed {
            ioctl_log!(Level::Warn, "handle", "device handle leaked, closing in drop");
            let _ = sys::close_handle(self.raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_close_is_a_no_op() {
        let mut h = DeviceHandle::already_closed();
        assert!(h.close().is_ok());
        assert!(h.close().is_ok());
        assert!(h.is_closed());
    }

    #[cfg(not(windows))]
    #[test]
    fn open_fails_off_windows() {
        let err = DeviceHandle::open(r"\\.\C:").unwrap_err();
        assert!(matches!(err, DeviceError::UnsupportedOnThisPlatform));
    }
}
