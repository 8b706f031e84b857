//! The 2D sketch interface of the external modeling engine.
//!
//! This crate never builds solids itself. Outlines are handed to whatever
//! engine implements [`Sketch`]; the engine extrudes, fillets and exports.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::point::Point;

/// Cursor-based 2D sketch operations consumed from the modeling engine.
pub trait Sketch {
    /// Moves the sketch cursor to `point` without drawing.
    fn move_to(&mut self, point: Point);

    /// Draws a connected polyline through `points`.
    fn polyline(&mut self, points: &[Point]);
}

/// Issues `points` to `sketch` as a polyline.
///
/// The LAST point is taken as the start: the cursor is moved there, then the
/// remaining points are drawn front-to-back. Existing model geometry was
/// generated with this ordering.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyChain`] if `points` is empty.
///
/// # Examples
///
/// ```
/// use jst_xh_models::geometry::{to_polyline, Point, RecordingSketch, SketchCommand};
///
/// let mut sketch = RecordingSketch::new();
/// let points = vec![Point::new(1.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 0.0)];
/// to_polyline(points, &mut sketch).unwrap();
///
/// assert_eq!(sketch.cursor(), Some(Point::new(0.0, 0.0)));
/// assert_eq!(sketch.commands().len(), 2);
/// ```
pub fn to_polyline<S: Sketch + ?Sized>(
    mut points: Vec<Point>,
    sketch: &mut S,
) -> Result<(), GeometryError> {
    let start = points.pop().ok_or(GeometryError::EmptyChain)?;
    sketch.move_to(start);
    sketch.polyline(&points);
    Ok(())
}

/// A command issued to a [`Sketch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SketchCommand {
    /// Cursor move.
    MoveTo {
        /// Target point.
        point: Point,
    },
    /// Connected polyline.
    Polyline {
        /// Points in drawing order.
        points: Vec<Point>,
    },
}

/// A [`Sketch`] that records every command it receives.
///
/// Useful for inspecting outlines before handing them to a real engine, or
/// for serialising them for replay.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingSketch {
    commands: Vec<SketchCommand>,
}

impl RecordingSketch {
    /// Creates an empty recording.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Returns the recorded commands in order.
    #[must_use]
    pub fn commands(&self) -> &[SketchCommand] {
        &self.commands
    }

    /// Returns the target of the most recent cursor move.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            SketchCommand::MoveTo { point } => Some(*point),
            SketchCommand::Polyline { .. } => None,
        })
    }

    /// Replays the recorded commands onto another sketch.
    pub fn replay<S: Sketch + ?Sized>(&self, target: &mut S) {
        for cmd in &self.commands {
            match cmd {
                SketchCommand::MoveTo { point } => target.move_to(*point),
                SketchCommand::Polyline { points } => target.polyline(points),
            }
        }
    }
}

impl Sketch for RecordingSketch {
    fn move_to(&mut self, point: Point) {
        self.commands.push(SketchCommand::MoveTo { point });
    }

    fn polyline(&mut self, points: &[Point]) {
        self.commands.push(SketchCommand::Polyline {
            points: points.to_vec(),
        });
    }
}
