// src/error.rs

use std::io;
use thiserror::Error;

/// All the ways a device operation can go wrong
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Neither a physical-drive id nor a drive name was supplied.
    #[error("neither a physical drive id nor a drive name was supplied")]
    MissingIdentity,

    /// A drive-name string without a single ASCII letter in it.
    #[error("drive name '{0}' contains no drive letter")]
    InvalidDriveName(String),

    /// A native call failed; carries the platform's last-error code.
    #[error("{op} failed: {source}")]
    Os {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// Device operations were attempted on a non-Windows host.
    #[error("device control is not supported on this platform")]
    UnsupportedOnThisPlatform,
}

pub type Result<T> = std::result::Result<T, DeviceError>;

impl DeviceError {
    /// Wrap a native-call failure.
    ///
    /// Only the stub backend produces synthetic, code-less `Unsupported`
    /// errors.  Anything that actually crossed the OS carries a
    /// last-error code and stays `Os` — including codes the std maps to
    /// `ErrorKind::Unsupported`, such as a driver refusing a control
    /// code it does not implement.
    pub(crate) fn os(op: &'static str, source: io::Error) -> Self {
        if source.raw_os_error().is_none() && source.kind() == io::ErrorKind::Unsupported {
            DeviceError::UnsupportedOnThisPlatform
        } else {
            DeviceError::Os { op, source }
        }
    }

    /// The raw OS error code, when one is attached.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            DeviceError::Os { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_backend_errors_map_to_platform_variant() {
        // the stub's errors are kind-only, with no OS code attached
        let e = DeviceError::os("CreateFileW", io::Error::from(io::ErrorKind::Unsupported));
        assert!(matches!(e, DeviceError::UnsupportedOnThisPlatform));
    }

    #[test]
    fn driver_rejections_keep_their_last_error_code() {
        // ERROR_NOT_SUPPORTED (50) and EOPNOTSUPP (95) both land in
        // ErrorKind::Unsupported on their platform; a code that came
        // from the OS must never be swallowed.
        for code in [50, 95] {
            let e = DeviceError::os("DeviceIoControl", io::Error::from_raw_os_error(code));
            assert!(matches!(e, DeviceError::Os { .. }), "code {code}: {e:?}");
            assert_eq!(e.raw_os_error(), Some(code));
        }
    }

    #[test]
    fn other_kinds_stay_os_errors() {
        let e = DeviceError::os("DeviceIoControl", io::Error::from_raw_os_error(5));
        match &e {
            DeviceError::Os { op, source } => {
                assert_eq!(*op, "DeviceIoControl");
                assert_eq!(source.raw_os_error(), Some(5));
            }
            other => panic!("expected Os, got {other:?}"),
        }
        assert_eq!(e.raw_os_error(), Some(5));
    }

    #[test]
    fn display_names_the_failed_call() {
        let e = DeviceError::os("CloseHandle", io::Error::from_raw_os_error(6));
        assert!(e.to_string().starts_with("CloseHandle failed"));
    }

    #[test]
    fn missing_identity_has_no_os_code() {
        assert_eq!(DeviceError::MissingIdentity.raw_os_error(), None);
    }
}
