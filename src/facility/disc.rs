// src/facility/disc.rs

//! Disk control-code group.

use crate::device::Device;
use crate::error::Result;
use crate::ioctl::{ControlCode, IoBuffer, access, device_type};

pub const IOCTL_DISK_GET_DRIVE_GEOMETRY: ControlCode =
    ControlCode::buffered(device_type::DISK, 0x000, access::ANY);
pub const IOCTL_DISK_IS_WRITABLE: ControlCode =
    ControlCode::buffered(device_type::DISK, 0x009, access::ANY);
pub const IOCTL_DISK_GET_LENGTH_INFO: ControlCode =
    ControlCode::buffered(device_type::DISK, 0x017, access::READ);

/// `DISK_GEOMETRY`: physical layout of the medium.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskGeometry {
    pub cylinders: i64,
    /// Raw `MEDIA_TYPE` value; 12 is `FixedMedia`, 11 `RemovableMedia`.
    pub media_type: u32,
    pub tracks_per_cylinder: u32,
    pub sectors_per_track: u32,
    pub bytes_per_sector: u32,
}

unsafe impl IoBuffer for DiskGeometry {}

impl DiskGeometry {
    /// Capacity implied by the geometry, in bytes.
    pub fn capacity(&self) -> u64 {
        self.cylinders as u64
            * u64::from(self.tracks_per_cylinder)
            * u64::from(self.sectors_per_track)
            * u64::from(self.bytes_per_sector)
    }
}

/// `GET_LENGTH_INFORMATION`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct LengthInformation {
    length: i64,
}

unsafe impl IoBuffer for LengthInformation {}

/// Disc IO commands
#[derive(Debug)]
pub struct Disc<'d> {
    device: &'d Device,
}

impl<'d> Disc<'d> {
    pub(crate) fn new(device: &'d Device) -> Self {
        Self { device }
    }

    /// Physical geometry of the medium.
    pub fn geometry(&self) -> Result<DiskGeometry> {
        Ok(self
            .device
            .call::<(), DiskGeometry>(IOCTL_DISK_GET_DRIVE_GEOMETRY, None)?
            .value)
    }

    /// Disk length in bytes (the partition's for a letter-opened device).
    pub fn length(&self) -> Result<u64> {
        let out = self
            .device
            .call::<(), LengthInformation>(IOCTL_DISK_GET_LENGTH_INFO, None)?;
        Ok(out.value.length as u64)
    }

    /// The call succeeds exactly when the medium is writable.
    pub fn is_writable(&self) -> bool {
        self.device
            .try_call::<(), ()>(IOCTL_DISK_IS_WRITABLE, None)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_winioctl_h() {
        assert_eq!(IOCTL_DISK_GET_DRIVE_GEOMETRY.get(), 0x0007_0000);
        assert_eq!(IOCTL_DISK_IS_WRITABLE.get(), 0x0007_0024);
        assert_eq!(IOCTL_DISK_GET_LENGTH_INFO.get(), 0x0007_405c);
    }

    #[test]
    fn struct_layout_matches_native() {
        assert_eq!(std::mem::size_of::<DiskGeometry>(), 24);
        assert_eq!(std::mem::size_of::<LengthInformation>(), 8);
    }

    #[test]
    fn geometry_capacity() {
        let g = DiskGeometry {
            cylinders: 1024,
            media_type: 12,
            tracks_per_cylinder: 255,
            sectors_per_track: 63,
            bytes_per_sector: 512,
        };
        assert_eq!(g.capacity(), 1024 * 255 * 63 * 512);
    }
}
