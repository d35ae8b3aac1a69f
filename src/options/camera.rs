use std::time::Duration;

use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::fit::FitSettings;
use crate::camera::parameters::{CameraParameters, Rotation};
use crate::camera::projection::{ClipPlanes, Projection};
use crate::error::RigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera state and bounds-fit tuning.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub fovy: f64,
    /// Starting distance from the orbit origin.
    #[schemars(title = "Distance", range(min = 0.001))]
    pub distance: f64,
    /// Near clip plane as a fraction of the working distance.
    #[schemars(skip)]
    pub near_factor: f64,
    /// Far clip plane as a multiple of the working distance.
    #[schemars(skip)]
    pub far_factor: f64,
    /// Extra room left around fitted bounds.
    #[schemars(title = "Fit Margin", range(min = 1.0, max = 3.0), extend("step" = 0.05))]
    pub fit_margin: f64,
    /// Length of animated fits in milliseconds; 0 fits immediately.
    #[schemars(title = "Fit Duration (ms)", range(max = 5000))]
    pub fit_duration_ms: u64,
}

impl CameraOptions {
    /// Parameters for a fresh rig: origin at zero, configured distance and
    /// field of view, `rotation` as given.
    pub fn parameters(&self, rotation: Rotation) -> Result<CameraParameters, RigError> {
        CameraParameters::new(DVec3::ZERO, self.distance, self.fovy.to_radians(), rotation)
    }

    /// Perspective projection with clip planes for the starting distance.
    pub fn projection(&self) -> Result<Projection, RigError> {
        ClipPlanes::for_distance(self.distance, self.near_factor, self.far_factor)
            .map(Projection::Perspective)
    }

    /// Reject values no rig can start from or fit with.
    pub fn validate(&self) -> Result<(), RigError> {
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return Err(RigError::invalid("fovy", self.fovy));
        }
        super::positive("distance", self.distance)?;
        super::positive("near factor", self.near_factor)?;
        super::positive("far factor", self.far_factor)?;
        if self.far_factor <= self.near_factor {
            return Err(RigError::invalid("far factor", self.far_factor));
        }
        super::positive("fit margin", self.fit_margin)
    }

    /// Fit tuning derived from these options.
    #[must_use]
    pub const fn fit_settings(&self) -> FitSettings {
        FitSettings {
            margin: self.fit_margin,
            near_factor: self.near_factor,
            far_factor: self.far_factor,
        }
    }

    /// Configured fit animation length.
    #[must_use]
    pub const fn fit_duration(&self) -> Duration {
        Duration::from_millis(self.fit_duration_ms)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        let fit = FitSettings::default();
        Self {
            fovy: 45.0,
            distance: crate::camera::parameters::DEFAULT_DISTANCE,
            near_factor: fit.near_factor,
            far_factor: fit.far_factor,
            fit_margin: fit.margin,
            fit_duration_ms: 0,
        }
    }
}
