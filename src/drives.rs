// src/drives.rs

//! Logical-drive enumeration.
//!
//! Decodes the mounted-drive bitmask and classifies each root with a
//! lightweight OS query.  The sequence is lazy, finite and carries no
//! ordering guarantee beyond the bitmask's; a per-drive classification
//! failure yields [`DriveKind::Unknown`] rather than aborting.

use crate::sys;

/// Classification of a logical drive, mirroring the `DRIVE_*` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveKind {
    Unknown,
    NoRootDir,
    Removable,
    Fixed,
    Network,
    CdRom,
    RamDisk,
}

impl From<u32> for DriveKind {
    fn from(raw: u32) -> Self {
        match raw {
            1 => DriveKind::NoRootDir,
            2 => DriveKind::Removable,
            3 => DriveKind::Fixed,
            4 => DriveKind::Network,
            5 => DriveKind::CdRom,
            6 => DriveKind::RamDisk,
            _ => DriveKind::Unknown,
        }
    }
}

/// Drive letters set in a `GetLogicalDrives` bitmask; bit 0 is `A`.
pub(crate) fn letters_from_mask(mask: u32) -> impl Iterator<Item = char> {
    (0..26u8)
        .filter(move |bit| mask & (1 << bit) != 0)
        .map(|bit| (b'A' + bit) as char)
}

/// All currently mounted logical drives as `("X:\", kind)` pairs.
///
/// The classification query runs per drive as the iterator advances.
pub fn logical_drives() -> impl Iterator<Item = (String, DriveKind)> {
    let mask = sys::logical_drive_mask();
    letters_from_mask(mask).map(|letter| {
        let root = format!("{letter}:\\");
        let kind = DriveKind::from(sys::drive_type(&root));
        (root, kind)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_decodes_to_letters() {
        // bits 2 and 3 set: C and D
        let letters: Vec<char> = letters_from_mask(0b1100).collect();
        assert_eq!(letters, vec!['C', 'D']);
    }

    #[test]
    fn empty_mask_yields_nothing() {
        assert_eq!(letters_from_mask(0).count(), 0);
    }

    #[test]
    fn full_mask_is_the_whole_alphabet() {
        let letters: Vec<char> = letters_from_mask(u32::MAX).collect();
        assert_eq!(letters.len(), 26);
        assert_eq!(letters.first(), Some(&'A'));
        assert_eq!(letters.last(), Some(&'Z'));
    }

    #[test]
    fn raw_drive_types_map_to_kinds() {
        assert_eq!(DriveKind::from(0), DriveKind::Unknown);
        assert_eq!(DriveKind::from(2), DriveKind::Removable);
        assert_eq!(DriveKind::from(3), DriveKind::Fixed);
        assert_eq!(DriveKind::from(5), DriveKind::CdRom);
        assert_eq!(DriveKind::from(6), DriveKind::RamDisk);
        // out-of-range classifies as Unknown instead of failing
        assert_eq!(DriveKind::from(99), DriveKind::Unknown);
    }

    #[cfg(windows)]
    #[test]
    fn every_mounted_drive_is_classified() {
        for (root, kind) in logical_drives() {
            assert!(root.ends_with(":\\"), "bad root {root:?}");
            // kind is always a named variant, Unknown at worst
            let _ = kind;
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn enumeration_is_empty_off_windows() {
        assert_eq!(logical_drives().count(), 0);
    }
}
