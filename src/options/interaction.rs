use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::parameters::RotationMode;
use crate::error::RigError;
use crate::interaction::NavigationBehavior;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Gesture sensitivities and the behaviors an orbital rig starts with.
pub struct InteractionOptions {
    /// Distance is multiplied by `zoom_factor^-n` for a scroll of `n` units.
    #[schemars(title = "Zoom Factor", range(min = 1.0001, max = 1.5), extend("step" = 0.005))]
    pub zoom_factor: f64,
    /// Scroll units per pixel of vertical drag when drag-zooming.
    #[schemars(title = "Drag Zoom Sensitivity", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub drag_zoom_sensitivity: f64,
    /// Pan multiplier; 1 keeps the point under the cursor fixed.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub pan_speed: f64,
    /// Arcball angle multiplier.
    #[schemars(title = "Arcball Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub arcball_speed: f64,
    /// Turntable rotation in degrees per pixel dragged.
    #[schemars(title = "Turntable Speed", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub turntable_speed: f64,
    /// Stop pitch at the poles of the up axis.
    #[schemars(title = "Clamp Pitch")]
    pub clamp_pitch: bool,
    /// Rotation mode an orbital rig starts in.
    #[schemars(title = "Rotation Mode")]
    pub rotation_mode: RotationMode,
    /// Behaviors an orbital rig registers on creation.
    #[schemars(skip)]
    pub behaviors: Vec<NavigationBehavior>,
}

impl InteractionOptions {
    /// Reject sensitivities that would stall or blow up a gesture.
    ///
    /// `zoom_factor` must exceed 1 so scrolling actually zooms; every
    /// speed must be positive and finite.
    pub fn validate(&self) -> Result<(), RigError> {
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 1.0) {
            return Err(RigError::invalid("zoom factor", self.zoom_factor));
        }
        super::positive("drag zoom sensitivity", self.drag_zoom_sensitivity)?;
        super::positive("pan speed", self.pan_speed)?;
        super::positive("arcball speed", self.arcball_speed)?;
        super::positive("turntable speed", self.turntable_speed)
    }
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            zoom_factor: 1.01,
            drag_zoom_sensitivity: 1.0,
            pan_speed: 1.0,
            arcball_speed: 1.0,
            turntable_speed: 0.25,
            clamp_pitch: true,
            rotation_mode: RotationMode::default(),
            behaviors: vec![
                NavigationBehavior::DRAG_ROTATE,
                NavigationBehavior::SCROLL_ZOOM,
            ],
        }
    }
}
