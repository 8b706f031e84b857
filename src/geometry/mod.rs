//! 2D point arithmetic and outline helpers.
//!
//! Pin bend profiles and body cross-sections are described as chains of
//! points, mirrored where the part is symmetric, and then drawn onto the
//! modeling engine's sketch plane through the [`Sketch`] trait.
//!
//! # Example
//!
//! ```
//! use jst_xh_models::geometry::{Chain, Point, RecordingSketch};
//!
//! let mut half = Chain::starting_at(Point::new(0.0, 0.0));
//! half.append_relative(Point::new(0.32, 0.0)).unwrap();
//! half.append_relative(Point::new(0.0, 3.4)).unwrap();
//!
//! let other_half = half.mirror_x();
//!
//! let mut sketch = RecordingSketch::new();
//! half.to_polyline(&mut sketch).unwrap();
//! other_half.to_polyline(&mut sketch).unwrap();
//! assert_eq!(sketch.commands().len(), 4);
//! ```

pub mod chain;
pub mod point;
pub mod sketch;

pub use chain::{append_relative, mirror_x, Chain};
pub use point::{add, sub, third_arc_point, Point};
pub use sketch::{to_polyline, RecordingSketch, Sketch, SketchCommand};
