// src/facility/storage.rs

//! Storage control-code group: device addressing and removable media.

use crate::device::Device;
use crate::error::Result;
use crate::ioctl::{ControlCode, IoBuffer, access, device_type};

pub const IOCTL_STORAGE_CHECK_VERIFY: ControlCode =
    ControlCode::buffered(device_type::MASS_STORAGE, 0x200, access::READ);
pub const IOCTL_STORAGE_MEDIA_REMOVAL: ControlCode =
    ControlCode::buffered(device_type::MASS_STORAGE, 0x201, access::READ);
pub const IOCTL_STORAGE_EJECT_MEDIA: ControlCode =
    ControlCode::buffered(device_type::MASS_STORAGE, 0x202, access::READ);
pub const IOCTL_STORAGE_LOAD_MEDIA: ControlCode =
    ControlCode::buffered(device_type::MASS_STORAGE, 0x203, access::READ);
pub const IOCTL_STORAGE_GET_DEVICE_NUMBER: ControlCode =
    ControlCode::buffered(device_type::MASS_STORAGE, 0x420, access::ANY);

/// `STORAGE_DEVICE_NUMBER`: where this device sits in the storage stack.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageDeviceNumber {
    /// Raw `FILE_DEVICE_*` type of the underlying device.
    pub device_type: u32,
    pub device_number: u32,
    /// `u32::MAX` when the device is not partitionable.
    pub partition_number: u32,
}

unsafe impl IoBuffer for StorageDeviceNumber {}

/// `PREVENT_MEDIA_REMOVAL`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct PreventMediaRemoval {
    prevent: u8,
}

unsafe impl IoBuffer for PreventMediaRemoval {}

/// Storage IO commands
#[derive(Debug)]
pub struct Storage<'d> {
    device: &'d Device,
}

impl<'d> Storage<'d> {
    pub(crate) fn new(device: &'d Device) -> Self {
        Self { device }
    }

    /// The device/partition numbers the OS assigned to this device.
    pub fn device_number(&self) -> Result<StorageDeviceNumber> {
        Ok(self
            .device
            .call::<(), StorageDeviceNumber>(IOCTL_STORAGE_GET_DEVICE_NUMBER, None)?
            .value)
    }

    /// The call succeeds exactly when media is present.
    pub fn media_present(&self) -> bool {
        self.device
            .try_call::<(), ()>(IOCTL_STORAGE_CHECK_VERIFY, None)
            .is_some()
    }

    /// Lock (or unlock) the ejection mechanism of removable media.
    pub fn lock_media(&self, prevent: bool) -> Result<()> {
        let input = PreventMediaRemoval { prevent: prevent.into() };
        self.device
            .call::<PreventMediaRemoval, ()>(IOCTL_STORAGE_MEDIA_REMOVAL, Some(&input))?;
        Ok(())
    }

    /// Eject removable media.
    pub fn eject(&self) -> Result<()> {
        self.device.call::<(), ()>(IOCTL_STORAGE_EJECT_MEDIA, None)?;
        Ok(())
    }

    /// Load removable media.
    pub fn load(&self) -> Result<()> {
        self.device.call::<(), ()>(IOCTL_STORAGE_LOAD_MEDIA, None)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_winioctl_h() {
        assert_eq!(IOCTL_STORAGE_CHECK_VERIFY.get(), 0x002d_4800);
        assert_eq!(IOCTL_STORAGE_MEDIA_REMOVAL.get(), 0x002d_4804);
        assert_eq!(IOCTL_STORAGE_EJECT_MEDIA.get(), 0x002d_4808);
        assert_eq!(IOCTL_STORAGE_LOAD_MEDIA.get(), 0x002d_480c);
        assert_eq!(IOCTL_STORAGE_GET_DEVICE_NUMBER.get(), 0x002d_1080);
    }

    #[test]
    fn struct_layout_matches_native() {
        assert_eq!(std::mem::size_of::<StorageDeviceNumber>(), 12);
        assert_eq!(std::mem::size_of::<PreventMediaRemoval>(), 1);
    }
}
