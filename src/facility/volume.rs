// src/facility/volume.rs

//! Volume control-code group.

use crate::device::Device;
use crate::error::Result;
use crate::ioctl::{ControlCode, IoBuffer, access, device_type};

pub const IOCTL_VOLUME_GET_VOLUME_DISK_EXTENTS: ControlCode =
    ControlCode::buffered(device_type::VOLUME, 0, access::ANY);
pub const IOCTL_VOLUME_IS_CLUSTERED: ControlCode =
    ControlCode::buffered(device_type::VOLUME, 12, access::ANY);

/// `DISK_EXTENT`: one physical-disk span backing a volume.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskExtent {
    pub disk_number: u32,
    pub starting_offset: i64,
    pub extent_length: i64,
}

/// `VOLUME_DISK_EXTENTS`, sized for the single-extent case.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct VolumeDiskExtents {
    count: u32,
    extents: [DiskExtent; 1],
}

unsafe impl IoBuffer for VolumeDiskExtents {}

/// Volume IO commands
#[derive(Debug)]
pub struct Volume<'d> {
    device: &'d Device,
}

impl<'d> Volume<'d> {
    pub(crate) fn new(device: &'d Device) -> Self {
        Self { device }
    }

    /// The physical-disk extent backing a simple volume.  Spanned
    /// volumes report `ERROR_MORE_DATA`, which surfaces as an OS error;
    /// resize the buffer contract before supporting those.
    pub fn first_extent(&self) -> Result<DiskExtent> {
        let out = self
            .device
            .call::<(), VolumeDiskExtents>(IOCTL_VOLUME_GET_VOLUME_DISK_EXTENTS, None)?;
        Ok(out.value.extents[0])
    }

    /// The call succeeds exactly when the volume is part of a
    /// cluster.
    pub fn is_clustered(&self) -> bool {
        self.device
            .try_call::<(), ()>(IOCTL_VOLUME_IS_CLUSTERED, None)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_winioctl_h() {
        assert_eq!(IOCTL_VOLUME_GET_VOLUME_DISK_EXTENTS.get(), 0x0056_0000);
        assert_eq!(IOCTL_VOLUME_IS_CLUSTERED.get(), 0x0056_0030);
    }

    #[test]
    fn struct_layout_matches_native() {
        // DISK_EXTENT carries 4 bytes of alignment padding after the u32.
        assert_eq!(std::mem::size_of::<DiskExtent>(), 24);
        assert_eq!(std::mem::size_of::<VolumeDiskExtents>(), 32);
    }
}
