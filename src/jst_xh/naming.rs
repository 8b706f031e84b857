//! JST XH naming conventions.
//!
//! Two names are generated per variant:
//!
//! - **Model key**: the catalog key, derived from the JST part number with
//!   dashes replaced by underscores, e.g. `B05B_XH_A`, `S03B_XH_A_1`.
//! - **File name**: the base name of the exported VRML/STEP files, following
//!   the KiCad library convention
//!   `JST_XH_{PART}_{PINS}x{PITCH}mm_{ORIENTATION}`.
//!
//! Pin counts are always zero-padded to two digits and the pitch is printed
//! with two decimals.

use crate::jst_xh::family::FamilyDescriptor;

/// Generates the exported model file base name.
///
/// # Examples
///
/// ```
/// use jst_xh_models::jst_xh::{naming::file_name, Family};
///
/// let name = file_name(Family::Straight.descriptor(), 5, 2.5);
/// assert_eq!(name, "JST_XH_B05B-XH-A_05x2.50mm_Straight");
/// ```
#[must_use]
pub fn file_name(descriptor: &FamilyDescriptor, num_pins: u32, pitch: f64) -> String {
    format!(
        "JST_XH_{prefix}{num_pins:02}B-XH-A{suffix}_{num_pins:02}x{pitch:.2}mm_{orientation}",
        prefix = descriptor.part_prefix,
        suffix = descriptor.part_suffix,
        orientation = descriptor.orientation,
    )
}

/// Generates the catalog key for a variant.
#[must_use]
pub fn model_name(descriptor: &FamilyDescriptor, num_pins: u32) -> String {
    format!(
        "{prefix}{num_pins:02}B_XH_A{suffix}",
        prefix = descriptor.part_prefix,
        suffix = descriptor.part_suffix.replace('-', "_"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jst_xh::Family;

    #[test]
    fn straight_file_name() {
        let name = file_name(Family::Straight.descriptor(), 5, 2.5);
        assert_eq!(name, "JST_XH_B05B-XH-A_05x2.50mm_Straight");
    }

    #[test]
    fn angled_file_name() {
        let name = file_name(Family::Angled.descriptor(), 12, 2.5);
        assert_eq!(name, "JST_XH_S12B-XH-A_12x2.50mm_Angled");
    }

    #[test]
    fn angled_compact_file_name() {
        let name = file_name(Family::AngledCompact.descriptor(), 3, 2.5);
        assert_eq!(name, "JST_XH_S03B-XH-A-1_03x2.50mm_Angled_compact");
    }

    #[test]
    fn model_names() {
        assert_eq!(model_name(Family::Straight.descriptor(), 2), "B02B_XH_A");
        assert_eq!(model_name(Family::Angled.descriptor(), 16), "S16B_XH_A");
        assert_eq!(
            model_name(Family::AngledCompact.descriptor(), 9),
            "S09B_XH_A_1"
        );
    }
}
