//! Per-variant model parameters.

use serde::{Deserialize, Serialize};

/// Dimensions of one connector variant, consumed by the model generator.
///
/// All lengths in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Base name of the exported VRML/STEP files.
    pub file_name: String,

    /// Right-angle mount.
    pub angled: bool,

    /// Number of pins in the row.
    pub num_pins: u32,

    /// Catalog key.
    pub model_name: String,

    /// Distance from the housing to the pin bend (0 for straight parts).
    pub pin_angle_distance: f64,

    /// Length of the bent pin leg (0 for straight parts).
    pub pin_angle_length: f64,

    /// Housing width.
    pub body_width: f64,

    /// Housing height.
    pub body_height: f64,

    /// Housing length along the pin row.
    pub body_length: f64,

    /// Z offset between the two body height levels.
    pub zdistance: f64,
}
