//! Device identity: how the instance was addressed at construction.
//!
//! Exactly one of the two forms is set per instance and it never changes.
//! The drive-letter form scans the caller's string for its first ASCII
//! letter, so `"C"`, `"c:"` and `"C:\"` all name the same device.

use crate::error::{DeviceError, Result};

/// Path templates for the NT device namespace.
pub(crate) mod paths {
    /// `\\.\X:` — logical drive by letter.
    pub(crate) fn drive_letter(letter: char) -> String {
        format!(r"\\.\{letter}:")
    }

    /// `\\.\PhysicalDriveN` — physical device by numeric id.
    pub(crate) fn physical_drive(id: u8) -> String {
        format!(r"\\.\PhysicalDrive{id}")
    }
}

/// How a [`crate::Device`] was addressed; immutable for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceIdentity {
    /// Logical drive, addressed by letter (stored uppercased).
    DriveLetter(char),
    /// Physical drive, addressed by numeric id.  Legacy path: FSCTL
    /// calls are unavailable on handles opened this way.
    PhysicalDrive(u8),
}

impl DeviceIdentity {
    /// Resolve from the original dual-constructor shape.  The id wins
    /// when both are present; neither present is an invalid argument.
    pub fn from_parts(physical_id: Option<u8>, drive_name: Option<&str>) -> Result<Self> {
        match (physical_id, drive_name) {
            (Some(id), _) => Ok(DeviceIdentity::PhysicalDrive(id)),
            (None, Some(name)) => Self::from_drive_name(name),
            (None, None) => Err(DeviceError::MissingIdentity),
        }
    }

    /// First ASCII letter in `name` selects the drive.
    pub fn from_drive_name(name: &str) -> Result<Self> {
        name.chars()
            .find(|c| c.is_ascii_alphabetic())
            .map(|c| DeviceIdentity::DriveLetter(c.to_ascii_uppercase()))
            .ok_or_else(|| DeviceError::InvalidDriveName(name.to_owned()))
    }

    /// The NT device path this identity opens.
    pub fn device_path(&self) -> String {
        match *self {
            DeviceIdentity::DriveLetter(letter) => paths::drive_letter(letter),
            DeviceIdentity::PhysicalDrive(id) => paths::physical_drive(id),
        }
    }

    /// The numeric id, when addressed that way.
    pub fn physical_id(&self) -> Option<u8> {
        match *self {
            DeviceIdentity::PhysicalDrive(id) => Some(id),
            DeviceIdentity::DriveLetter(_) => None,
        }
    }

    /// FSCTL control codes need a path-based (drive-letter) handle.
    pub fn supports_fsctl(&self) -> bool {
        matches!(self, DeviceIdentity::DriveLetter(_))
    }
}
