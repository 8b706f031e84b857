//! Fixed mechanical constants of the JST XH series.
//!
//! All values in millimetres, taken from the JST XH datasheet drawings.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Contact pin geometry shared by every XH variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinGeometry {
    /// Pin cross-section width.
    pub width: f64,

    /// Pin length below the board surface.
    pub depth: f64,

    /// Pin length inside the housing.
    pub inner_length: f64,

    /// Height of the lower edge of the retention lock.
    pub lock_h1: f64,

    /// Height of the upper edge of the retention lock.
    pub lock_h2: f64,

    /// Retention lock protrusion.
    pub lock_d: f64,

    /// Fillet radius on the pin tip.
    pub fillet: f64,

    /// Inner bend radius of angled pins.
    pub bend_radius: f64,
}

impl PinGeometry {
    /// Pin geometry of the XH series.
    pub const XH: Self = Self {
        width: 0.64,
        depth: 3.4,
        inner_length: 6.5,
        lock_h1: 1.9,
        lock_h2: 2.5,
        lock_d: 0.3,
        fillet: 0.2,
        bend_radius: 0.05,
    };
}

impl Default for PinGeometry {
    fn default() -> Self {
        Self::XH
    }
}

/// Series-wide constants injected into the parameter builders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesConstants {
    /// Centre-to-centre pin spacing.
    pub pitch: f64,

    /// Housing overhang beyond the outer pins, on each end.
    pub body_end_margin: f64,

    /// Housing width.
    pub body_width: f64,

    /// Housing height.
    pub body_height: f64,

    /// Width including the latch ramp; the excess over `body_width` is the
    /// Z offset between the two body height levels.
    pub body_overall_width: f64,

    /// Lower-left housing corner relative to pin 1.
    pub body_corner: Point,

    /// Contact pin geometry.
    pub pin: PinGeometry,
}

impl SeriesConstants {
    /// Constants of the XH series (2.50 mm pitch).
    pub const XH: Self = Self {
        pitch: 2.5,
        body_end_margin: 2.45,
        body_width: 5.75,
        body_height: 7.0,
        body_overall_width: 6.1,
        body_corner: Point::new(-2.45, -2.35),
        pin: PinGeometry::XH,
    };

    /// Housing length for a row of `num_pins` pins.
    ///
    /// Grows linearly with the pin count at fixed end margins.
    #[must_use]
    pub fn body_length(&self, num_pins: u32) -> f64 {
        f64::from(num_pins.saturating_sub(1)).mul_add(self.pitch, 2.0 * self.body_end_margin)
    }

    /// Z offset between the two body height levels.
    #[must_use]
    pub fn zdistance(&self) -> f64 {
        self.body_overall_width - self.body_width
    }
}

impl Default for SeriesConstants {
    fn default() -> Self {
        Self::XH
    }
}
