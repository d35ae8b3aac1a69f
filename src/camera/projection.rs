use glam::DMat4;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Near clip plane as a fraction of the working distance.
pub const NEAR_FACTOR: f64 = 0.05;
/// Far clip plane as a multiple of the working distance.
pub const FAR_FACTOR: f64 = 10.0;

/// Near and far clip distances along the viewing axis.
///
/// Always satisfies `0 < near < far < ∞`; [`ClipPlanes::new`] and
/// [`ClipPlanes::for_distance`] are the only constructors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClipPlanesData")]
pub struct ClipPlanes {
    near: f64,
    far: f64,
}

impl ClipPlanes {
    /// Validate and build.
    pub fn new(near: f64, far: f64) -> Result<Self, RigError> {
        if !(near.is_finite() && near > 0.0) {
            return Err(RigError::invalid("near clip", near));
        }
        if !(far.is_finite() && far > near) {
            return Err(RigError::invalid("far clip", far));
        }
        Ok(Self { near, far })
    }

    /// Planes at `near_factor·d` and `far_factor·d`.
    ///
    /// A fixed ratio keeps depth precision usable across the zoom range but
    /// does not adapt to the depth complexity of a particular scene.
    pub fn for_distance(
        distance: f64,
        near_factor: f64,
        far_factor: f64,
    ) -> Result<Self, RigError> {
        Self::new(near_factor * distance, far_factor * distance)
    }

    /// Near plane distance.
    #[must_use]
    pub const fn near(&self) -> f64 {
        self.near
    }

    /// Far plane distance.
    #[must_use]
    pub const fn far(&self) -> f64 {
        self.far
    }
}

impl Default for ClipPlanes {
    fn default() -> Self {
        let d = crate::camera::parameters::DEFAULT_DISTANCE;
        Self {
            near: NEAR_FACTOR * d,
            far: FAR_FACTOR * d,
        }
    }
}

/// Unvalidated mirror used for deserialization.
#[derive(Deserialize)]
struct ClipPlanesData {
    near: f64,
    far: f64,
}

impl TryFrom<ClipPlanesData> for ClipPlanes {
    type Error = RigError;

    fn try_from(data: ClipPlanesData) -> Result<Self, Self::Error> {
        Self::new(data.near, data.far)
    }
}

/// The kind of camera a rig drives.
///
/// Projection and bounds-fit math is only defined for perspective cameras.
/// For an orthographic camera the projection stage of the scene-to-raster
/// transform is the identity and `fit` does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Perspective camera; the field of view lives in the camera parameters.
    Perspective(ClipPlanes),
    /// Orthographic camera of the given view height.
    Orthographic {
        /// View volume height in scene units.
        height: f64,
    },
}

impl Projection {
    /// Projection matrix from camera space into clip space, or `None` when
    /// the projection kind is unsupported.
    ///
    /// Camera space is +X right, +Y down, +Z forward. Depth maps to `[0, 1]`.
    #[must_use]
    pub fn matrix(&self, field_of_view: f64, aspect: f64) -> Option<DMat4> {
        match self {
            // The camera looks down +Z, which is glam's "lh" layout; with +Y
            // down the frame is still right-handed.
            Self::Perspective(clip) => Some(DMat4::perspective_lh(
                field_of_view,
                aspect,
                clip.near,
                clip.far,
            )),
            Self::Orthographic { .. } => None,
        }
    }

    /// Clip planes of a perspective projection.
    #[must_use]
    pub const fn clip_planes(&self) -> Option<ClipPlanes> {
        match self {
            Self::Perspective(clip) => Some(*clip),
            Self::Orthographic { .. } => None,
        }
    }

    /// Check the projection's own invariants: valid clip planes, or a
    /// positive finite orthographic height.
    pub fn validate(&self) -> Result<(), RigError> {
        match self {
            // Valid by construction.
            Self::Perspective(_) => Ok(()),
            Self::Orthographic { height } => {
                if height.is_finite() && *height > 0.0 {
                    Ok(())
                } else {
                    Err(RigError::invalid("orthographic height", *height))
                }
            }
        }
    }

    /// True for perspective projections.
    #[must_use]
    pub const fn is_perspective(&self) -> bool {
        matches!(self, Self::Perspective(_))
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::Perspective(ClipPlanes::default())
    }
}
