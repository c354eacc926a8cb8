// src/ioctl.rs

//! Control-code construction and the typed-buffer contract.
//!
//! A control code packs `(device_type, access, function, method)` into one
//! 32-bit identifier; the builder here mirrors the `CTL_CODE` macro from
//! `winioctl.h`.  Buffers crossing the call are plain `#[repr(C)]` values
//! marked with [`IoBuffer`]; the operating system interprets the bytes, so
//! the layout declaration is the caller's contract, not something the
//! gateway can validate.

/// IOCTL transfer methods
pub mod method {
    pub const BUFFERED: u32 = 0;
    pub const IN_DIRECT: u32 = 1;
    pub const OUT_DIRECT: u32 = 2;
    pub const NEITHER: u32 = 3;
}

/// IOCTL access modes
pub mod access {
    pub const ANY: u32 = 0;
    pub const READ: u32 = 1;
    pub const WRITE: u32 = 2;
    pub const READ_WRITE: u32 = 3;
}

/// Device types of the facility groups this crate wraps
pub mod device_type {
    pub const DISK: u32 = 0x0007;
    pub const FILE_SYSTEM: u32 = 0x0009;
    pub const MASS_STORAGE: u32 = 0x002d;
    pub const VOLUME: u32 = 0x0056;
}

/// A 32-bit IOCTL control code.
///
/// Opaque to the gateway: the operating system validates it, we only
/// build and carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCode(pub u32);

impl ControlCode {
    /// Pack a code from its components, `CTL_CODE` style.
    pub const fn new(device_type: u32, function: u32, method: u32, access: u32) -> Self {
        Self((device_type << 16) | (access << 14) | (function << 2) | method)
    }

    /// Shorthand for the common `METHOD_BUFFERED` case.
    pub const fn buffered(device_type: u32, function: u32, access: u32) -> Self {
        Self::new(device_type, function, method::BUFFERED, access)
    }

    /// Raw code value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Marker for values that may cross the IOCTL boundary.
///
/// # Safety
///
/// Implementors assert that the type is `#[repr(C)]` (or a primitive),
/// contains no padding-sensitive invariants, and that every byte pattern
/// the driver may write — including all zeroes — is a valid value.  The
/// byte layout must match the native structure the control code expects;
/// a mismatch produces garbage results, not a detected error.
pub unsafe trait IoBuffer: Copy + 'static {}

// `()` means "no buffer on this side of the call".
unsafe impl IoBuffer for () {}

unsafe impl IoBuffer for u8 {}
unsafe impl IoBuffer for u32 {}
unsafe impl IoBuffer for u64 {}
unsafe impl IoBuffer for i64 {}

/// Decoded result of one IOCTL call: the typed output value plus how many
/// bytes the driver actually wrote into the output buffer.
#[derive(Debug, Clone, Copy)]
pub struct IoOutput<T> {
    pub value: T,
    pub bytes_returned: u32,
}

impl<T> IoOutput<T> {
    /// True when the driver filled the whole declared output type.
    pub fn is_complete(&self) -> bool {
        self.bytes_returned as usize == std::mem::size_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctl_code_packs_like_winioctl_h() {
        // IOCTL_DISK_GET_DRIVE_GEOMETRY
        assert_eq!(
            ControlCode::buffered(device_type::DISK, 0x000, access::ANY).get(),
            0x0007_0000
        );
        // IOCTL_STORAGE_GET_DEVICE_NUMBER
        assert_eq!(
            ControlCode::buffered(device_type::MASS_STORAGE, 0x420, access::ANY).get(),
            0x002d_1080
        );
        // FSCTL_IS_VOLUME_MOUNTED
        assert_eq!(
            ControlCode::buffered(device_type::FILE_SYSTEM, 10, access::ANY).get(),
            0x0009_0028
        );
    }

    #[test]
    fn access_lands_in_bits_14_and_15() {
        let read = ControlCode::new(device_type::DISK, 0x017, method::BUFFERED, access::READ);
        assert_eq!(read.get() & 0xC000, 0x4000);
        let rw = ControlCode::new(device_type::DISK, 0x017, method::BUFFERED, access::READ_WRITE);
        assert_eq!(rw.get() & 0xC000, 0xC000);
    }

    #[test]
    fn method_lands_in_low_two_bits() {
        let c = ControlCode::new(device_type::FILE_SYSTEM, 32, method::NEITHER, access::ANY);
        assert_eq!(c.get() & 0x3, method::NEITHER);
    }

    #[test]
    fn io_output_completeness() {
        let full = IoOutput { value: 0u64, bytes_returned: 8 };
        assert!(full.is_complete());
        let short = IoOutput { value: 0u64, bytes_returned: 4 };
        assert!(!short.is_complete());
    }
}
