// src/facility/fs.rs

//! Filesystem (FSCTL) control-code group.
//!
//! Only reachable through [`crate::Device::file_system`], which returns
//! `None` for devices opened by physical id: these control codes need a
//! path-based handle.

use crate::device::Device;
use crate::error::Result;
use crate::ioctl::{ControlCode, IoBuffer, access, device_type, method};

pub const FSCTL_IS_VOLUME_MOUNTED: ControlCode =
    ControlCode::buffered(device_type::FILE_SYSTEM, 10, access::ANY);
pub const FSCTL_GET_NTFS_VOLUME_DATA: ControlCode =
    ControlCode::buffered(device_type::FILE_SYSTEM, 25, access::ANY);
pub const FSCTL_ALLOW_EXTENDED_DASD_IO: ControlCode =
    ControlCode::new(device_type::FILE_SYSTEM, 32, method::NEITHER, access::ANY);

/// `NTFS_VOLUME_DATA_BUFFER`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NtfsVolumeData {
    pub volume_serial_number: i64,
    pub number_sectors: i64,
    pub total_clusters: i64,
    pub free_clusters: i64,
    pub total_reserved: i64,
    pub bytes_per_sector: u32,
    pub bytes_per_cluster: u32,
    pub bytes_per_file_record_segment: u32,
    pub clusters_per_file_record_segment: u32,
    pub mft_valid_data_length: i64,
    pub mft_start_lcn: i64,
    pub mft2_start_lcn: i64,
    pub mft_zone_start: i64,
    pub mft_zone_end: i64,
}

unsafe impl IoBuffer for NtfsVolumeData {}

/// File system IO commands
#[derive(Debug)]
pub struct FileSystem<'d> {
    device: &'d Device,
}

impl<'d> FileSystem<'d> {
    pub(crate) fn new(device: &'d Device) -> Self {
        Self { device }
    }

    /// The call succeeds exactly when the volume is mounted.
    pub fn is_volume_mounted(&self) -> bool {
        self.device
            .try_call::<(), ()>(FSCTL_IS_VOLUME_MOUNTED, None)
            .is_some()
    }

    /// NTFS volume statistics; fails on non-NTFS volumes.
    pub fn ntfs_volume_data(&self) -> Result<NtfsVolumeData> {
        Ok(self
            .device
            .call::<(), NtfsVolumeData>(FSCTL_GET_NTFS_VOLUME_DATA, None)?
            .value)
    }

    /// Allow I/O past the end of the visible partition on this handle.
    pub fn allow_extended_io(&self) -> Result<()> {
        self.device.call::<(), ()>(FSCTL_ALLOW_EXTENDED_DASD_IO, None)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_winioctl_h() {
        assert_eq!(FSCTL_IS_VOLUME_MOUNTED.get(), 0x0009_0028);
        assert_eq!(FSCTL_GET_NTFS_VOLUME_DATA.get(), 0x0009_0064);
        assert_eq!(FSCTL_ALLOW_EXTENDED_DASD_IO.get(), 0x0009_0083);
    }

    #[test]
    fn struct_layout_matches_native() {
        assert_eq!(std::mem::size_of::<NtfsVolumeData>(), 96);
    }
}
