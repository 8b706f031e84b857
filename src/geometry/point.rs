//! 2D points and the arithmetic used to build sketch outlines.

use std::f64::consts::FRAC_1_SQRT_2;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point reflected across the Y axis.
    #[must_use]
    pub fn mirrored_x(self) -> Self {
        Self::new(-self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Returns the component-wise sum of two points.
#[must_use]
pub fn add(p1: Point, p2: Point) -> Point {
    p1 + p2
}

/// Returns the component-wise difference `p1 - p2`.
#[must_use]
pub fn sub(p1: Point, p2: Point) -> Point {
    p1 - p2
}

/// Computes an intermediate point on a rounded corner between `start` and `end`.
///
/// The corner is approximated rather than traced as a true circular arc: the
/// X offset of the corner vector is scaled by `1 - 1/√2` and the Y offset by
/// `1/√2`. Generated model geometry depends on these exact ratios.
///
/// # Examples
///
/// ```
/// use jst_xh_models::geometry::{third_arc_point, Point};
///
/// let start = Point::new(0.0, 0.0);
/// let mid = third_arc_point(start, Point::new(1.0, 1.0));
/// assert!((mid.x - (1.0 - 1.0 / 2f64.sqrt())).abs() < 1e-12);
/// assert!((mid.y - 1.0 / 2f64.sqrt()).abs() < 1e-12);
/// ```
#[must_use]
pub fn third_arc_point(start: Point, end: Point) -> Point {
    let d = end - start;
    Point::new(d.x * (1.0 - FRAC_1_SQRT_2), d.y * FRAC_1_SQRT_2) + start
}
