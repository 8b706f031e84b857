//! Point chains for pin bend and body outlines.
//!
//! A chain is grown by appending offsets relative to its last point, which is
//! how the pin bend profiles are described: a seed point followed by a series
//! of steps along the outline.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::point::Point;
use crate::geometry::sketch::{self, Sketch};

/// An ordered sequence of connected points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    points: Vec<Point>,
}

impl Chain {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a chain seeded with a single starting point.
    #[must_use]
    pub fn starting_at(seed: Point) -> Self {
        Self { points: vec![seed] }
    }

    /// Creates a chain from absolute points.
    #[must_use]
    pub const fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Appends `last + offset` and returns the new point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyChain`] if the chain has no seed point.
    pub fn append_relative(&mut self, offset: Point) -> Result<Point, GeometryError> {
        let last = self.last().ok_or(GeometryError::EmptyChain)?;
        let next = last + offset;
        self.points.push(next);
        Ok(next)
    }

    /// Appends an absolute point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns a new chain with every X coordinate negated.
    #[must_use]
    pub fn mirror_x(&self) -> Self {
        self.points.iter().map(|p| p.mirrored_x()).collect()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the chain has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the chain and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Draws this chain onto `sketch`, see [`sketch::to_polyline`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyChain`] if the chain is empty.
    pub fn to_polyline<S: Sketch + ?Sized>(self, sketch: &mut S) -> Result<(), GeometryError> {
        sketch::to_polyline(self.points, sketch)
    }
}

impl FromIterator<Point> for Chain {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Chain {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// Appends `last(chain) + offset` to `chain`.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyChain`] if `chain` is empty.
pub fn append_relative(chain: &mut Chain, offset: Point) -> Result<Point, GeometryError> {
    chain.append_relative(offset)
}

/// Returns `chain` reflected across the Y axis.
#[must_use]
pub fn mirror_x(chain: &Chain) -> Chain {
    chain.mirror_x()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_relative_accumulates() {
        let mut chain = Chain::starting_at(Point::new(-0.32, 0.0));
        chain.append_relative(Point::new(0.0, 3.4)).unwrap();
        let last = chain.append_relative(Point::new(0.64, 0.0)).unwrap();

        assert_eq!(chain.len(), 3);
        assert!((last.x - 0.32).abs() < 1e-12);
        assert!((last.y - 3.4).abs() < 1e-12);
        assert_eq!(chain.last(), Some(last));
    }

    #[test]
    fn append_relative_on_empty_chain_fails() {
        let mut chain = Chain::new();
        let result = append_relative(&mut chain, Point::new(1.0, 1.0));
        assert!(matches!(result, Err(GeometryError::EmptyChain)));
        assert!(chain.is_empty());
    }

    #[test]
    fn mirror_is_involution() {
        let chain = Chain::from_points(vec![
            Point::new(0.32, 0.0),
            Point::new(0.32, 6.5),
            Point::new(-1.2, 6.5),
            Point::new(0.0, -2.35),
        ]);
        assert_eq!(mirror_x(&mirror_x(&chain)), chain);
    }

    #[test]
    fn mirror_preserves_order() {
        let chain: Chain = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
            .into_iter()
            .collect();
        let mirrored = chain.mirror_x();
        assert_eq!(
            mirrored.points(),
            &[Point::new(-1.0, 2.0), Point::new(-3.0, 4.0)]
        );
    }

    #[test]
    fn mirror_of_empty_chain_is_empty() {
        assert!(Chain::new().mirror_x().is_empty());
    }
}
