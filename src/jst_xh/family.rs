//! Connector families and the parameter builder.
//!
//! The XH series comes in three mounting styles that share the housing and
//! differ only in pin bend geometry and part numbering:
//!
//! - **Straight** (`BxxB-XH-A`): vertical through-hole, pins 2-16 and 20
//! - **Angled** (`SxxB-XH-A`): side entry, pins 2-16
//! - **Angled compact** (`SxxB-XH-A-1`): side entry with shorter pin bend, pins 3-15

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::jst_xh::constants::SeriesConstants;
use crate::jst_xh::naming;
use crate::jst_xh::params::Params;

/// Fixed per-family values that drive [`Family::make_params`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyDescriptor {
    /// Right-angle mount.
    pub angled: bool,

    /// Overall length of the bent pin leg (mm), zero for straight parts.
    pub pin_angle_length: f64,

    /// Part number prefix letter: `B` (top entry) or `S` (side entry).
    pub part_prefix: char,

    /// Part number suffix after `-XH-A`.
    pub part_suffix: &'static str,

    /// Orientation tag at the end of the file name.
    pub orientation: &'static str,

    /// Pin counts JST actually manufactures, ascending.
    pub pin_counts: &'static [u32],
}

const STRAIGHT: FamilyDescriptor = FamilyDescriptor {
    angled: false,
    pin_angle_length: 0.0,
    part_prefix: 'B',
    part_suffix: "",
    orientation: "Straight",
    pin_counts: &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 20],
};

const ANGLED: FamilyDescriptor = FamilyDescriptor {
    angled: true,
    pin_angle_length: 9.2,
    part_prefix: 'S',
    part_suffix: "",
    orientation: "Angled",
    pin_counts: &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
};

const ANGLED_COMPACT: FamilyDescriptor = FamilyDescriptor {
    angled: true,
    pin_angle_length: 7.6,
    part_prefix: 'S',
    part_suffix: "-1",
    orientation: "Angled_compact",
    pin_counts: &[3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
};

/// Connector family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// Vertical through-hole header.
    Straight,
    /// Side entry header.
    Angled,
    /// Side entry header with the short pin bend.
    AngledCompact,
}

impl Family {
    /// All families in catalog order.
    pub const ALL: [Self; 3] = [Self::Straight, Self::Angled, Self::AngledCompact];

    /// Returns the fixed descriptor of this family.
    #[must_use]
    pub const fn descriptor(self) -> &'static FamilyDescriptor {
        match self {
            Self::Straight => &STRAIGHT,
            Self::Angled => &ANGLED,
            Self::AngledCompact => &ANGLED_COMPACT,
        }
    }

    /// Returns the published catalog key for `num_pins`.
    #[must_use]
    pub fn model_name(self, num_pins: u32) -> String {
        naming::model_name(self.descriptor(), num_pins)
    }

    /// Builds the parameter record of one variant.
    ///
    /// Body length and file name are derived from `num_pins` and
    /// `constants`; the pin bend values come from the family descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPinCount`] if `num_pins` is zero.
    pub fn make_params(
        self,
        num_pins: u32,
        name: &str,
        constants: &SeriesConstants,
    ) -> CatalogResult<Params> {
        if num_pins == 0 {
            return Err(CatalogError::InvalidPinCount {
                model: name.to_string(),
                num_pins,
            });
        }
        Ok(self.build(num_pins, name, constants))
    }

    /// Builds a record without validating the pin count.
    pub(crate) fn build(self, num_pins: u32, name: &str, constants: &SeriesConstants) -> Params {
        let descriptor = self.descriptor();
        let pin_angle_distance = if descriptor.angled {
            descriptor.pin_angle_length - constants.body_height
        } else {
            0.0
        };

        Params {
            file_name: naming::file_name(descriptor, num_pins, constants.pitch),
            angled: descriptor.angled,
            num_pins,
            model_name: name.to_string(),
            pin_angle_distance,
            pin_angle_length: descriptor.pin_angle_length,
            body_width: constants.body_width,
            body_height: constants.body_height,
            body_length: constants.body_length(num_pins),
            zdistance: constants.zdistance(),
        }
    }

    /// Accepts the display name as well as a few common spellings.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "straight" | "vertical" => Some(Self::Straight),
            "angled" | "right-angle" => Some(Self::Angled),
            "angled-compact" | "compact" => Some(Self::AngledCompact),
            _ => None,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight => write!(f, "straight"),
            Self::Angled => write!(f, "angled"),
            Self::AngledCompact => write!(f, "angled-compact"),
        }
    }
}

impl FromStr for Family {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| CatalogError::UnknownFamily {
            name: s.to_string(),
        })
    }
}

/// Builds a straight (`BxxB-XH-A`) record with the XH constants.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPinCount`] if `num_pins` is zero.
pub fn make_straight(num_pins: u32, name: &str) -> CatalogResult<Params> {
    Family::Straight.make_params(num_pins, name, &SeriesConstants::XH)
}

/// Builds an angled (`SxxB-XH-A`) record with the XH constants.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPinCount`] if `num_pins` is zero.
pub fn make_angled(num_pins: u32, name: &str) -> CatalogResult<Params> {
    Family::Angled.make_params(num_pins, name, &SeriesConstants::XH)
}

/// Builds an angled compact (`SxxB-XH-A-1`) record with the XH constants.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPinCount`] if `num_pins` is zero.
pub fn make_angled_short(num_pins: u32, name: &str) -> CatalogResult<Params> {
    Family::AngledCompact.make_params(num_pins, name, &SeriesConstants::XH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_has_no_pin_bend() {
        let p = make_straight(4, "B04B_XH_A").unwrap();
        assert!(!p.angled);
        assert!(p.pin_angle_distance.abs() < f64::EPSILON);
        assert!(p.pin_angle_length.abs() < f64::EPSILON);
    }

    #[test]
    fn angled_pin_bend() {
        let p = make_angled(6, "S06B_XH_A").unwrap();
        assert!(p.angled);
        assert!((p.pin_angle_distance - 2.2).abs() < 1e-9);
        assert!((p.pin_angle_length - 9.2).abs() < 1e-9);
    }

    #[test]
    fn angled_compact_pin_bend() {
        let p = make_angled_short(6, "S06B_XH_A_1").unwrap();
        assert!(p.angled);
        assert!((p.pin_angle_distance - 0.6).abs() < 1e-9);
        assert!((p.pin_angle_length - 7.6).abs() < 1e-9);
    }

    #[test]
    fn family_constants_shared() {
        for family in Family::ALL {
            let p = family.make_params(5, "X", &SeriesConstants::XH).unwrap();
            assert!((p.body_width - 5.75).abs() < f64::EPSILON);
            assert!((p.body_height - 7.0).abs() < f64::EPSILON);
            assert!((p.zdistance - 0.35).abs() < 1e-9);
            assert!((p.body_length - 14.9).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_pins_rejected() {
        let err = make_straight(0, "B00B_XH_A").unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidPinCount {
                model: "B00B_XH_A".to_string(),
                num_pins: 0,
            }
        );
    }

    #[test]
    fn injected_constants_are_used() {
        let constants = SeriesConstants {
            pitch: 2.0,
            ..SeriesConstants::XH
        };
        let p = Family::Straight.make_params(3, "custom", &constants).unwrap();
        assert!((p.body_length - 8.9).abs() < 1e-9);
        assert_eq!(p.file_name, "JST_XH_B03B-XH-A_03x2.00mm_Straight");
    }

    #[test]
    fn same_pins_same_derived_fields() {
        let a = make_angled(7, "first").unwrap();
        let b = make_angled(7, "second").unwrap();
        assert_eq!(a.file_name, b.file_name);
        assert!((a.body_length - b.body_length).abs() < f64::EPSILON);
    }

    #[test]
    fn family_parsing() {
        assert_eq!("straight".parse::<Family>(), Ok(Family::Straight));
        assert_eq!("ANGLED".parse::<Family>(), Ok(Family::Angled));
        assert_eq!("angled_compact".parse::<Family>(), Ok(Family::AngledCompact));
        assert!("sideways".parse::<Family>().is_err());
    }

    #[test]
    fn family_display_round_trips() {
        for family in Family::ALL {
            assert_eq!(family.to_string().parse::<Family>(), Ok(family));
        }
    }
}
