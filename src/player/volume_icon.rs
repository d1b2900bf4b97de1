// SPDX-License-Identifier: MPL-2.0
//! Volume indicator selection.

use crate::domain::video::Volume;

/// Icon shown on the mute toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeIcon {
    /// Above two thirds.
    Loud,
    /// Between one and two thirds.
    Medium,
    /// Audible but below one third.
    Low,
    /// Silent.
    Muted,
}

impl VolumeIcon {
    /// Picks the icon for `volume`. Exactly one icon holds for every level.
    #[must_use]
    pub fn for_volume(volume: Volume) -> Self {
        let level = volume.value();
        if level > 0.66 {
            Self::Loud
        } else if level > 0.33 {
            Self::Medium
        } else if level > 0.0 {
            Self::Low
        } else {
            Self::Muted
        }
    }
}

impl Default for VolumeIcon {
    fn default() -> Self {
        Self::for_volume(Volume::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_partition_the_range() {
        assert_eq!(VolumeIcon::for_volume(Volume::new(1.0)), VolumeIcon::Loud);
        assert_eq!(VolumeIcon::for_volume(Volume::new(0.67)), VolumeIcon::Loud);
        assert_eq!(VolumeIcon::for_volume(Volume::new(0.66)), VolumeIcon::Medium);
        assert_eq!(VolumeIcon::for_volume(Volume::new(0.34)), VolumeIcon::Medium);
        assert_eq!(VolumeIcon::for_volume(Volume::new(0.33)), VolumeIcon::Low);
        assert_eq!(VolumeIcon::for_volume(Volume::new(0.01)), VolumeIcon::Low);
        assert_eq!(VolumeIcon::for_volume(Volume::new(0.0)), VolumeIcon::Muted);
    }

    #[test]
    fn every_slider_position_has_an_icon() {
        for position in 0..=100 {
            let icon = VolumeIcon::for_volume(Volume::from_slider(f64::from(position)));
            if position == 0 {
                assert_eq!(icon, VolumeIcon::Muted);
            } else {
                assert_ne!(icon, VolumeIcon::Muted);
            }
        }
    }
}
