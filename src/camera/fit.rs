//! Bounds-fit solver.
//!
//! Frames a bounding volume: the origin moves to the volume's center and
//! the distance becomes the one at which a sphere of the volume's "radius"
//! (half its largest extent) fills the vertical field of view, plus a
//! margin. Clip planes are derived from the unmargined distance.
//!
//! Animated fits only produce the start and end frames; the tweening itself
//! belongs to an [`AnimationScheduler`] supplied by the host application.

use std::time::Duration;

use glam::DVec3;

use super::projection::{ClipPlanes, FAR_FACTOR, NEAR_FACTOR};
use crate::error::RigError;
use crate::math::Bounds3;

/// Default margin applied to the fitted distance.
pub const FIT_MARGIN: f64 = 1.1;

/// Origin and distance at one end of a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitFrame {
    /// Orbit origin.
    pub origin: DVec3,
    /// Distance from origin.
    pub distance: f64,
}

/// Current and target frames of an animated fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransition {
    /// Frame when the fit was requested.
    pub from: FitFrame,
    /// Terminal keyframe.
    pub to: FitFrame,
    /// Requested animation length.
    pub duration: Duration,
}

/// What `fit` did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitOutcome {
    /// The frame was written immediately.
    Applied(FitFrame),
    /// Clip planes were written; origin and distance are left for an
    /// animation scheduler to drive towards `to`.
    Animate(FitTransition),
    /// The camera is not perspective; nothing changed.
    Unsupported,
}

/// Everything a fit writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSolution {
    /// Target origin and margined distance.
    pub frame: FitFrame,
    /// Clip planes for the unmargined distance.
    pub clip: ClipPlanes,
}

/// Tuning for [`solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSettings {
    /// Multiplier on the fitted distance.
    pub margin: f64,
    /// Near clip as a fraction of the fitted distance.
    pub near_factor: f64,
    /// Far clip as a multiple of the fitted distance.
    pub far_factor: f64,
}

impl Default for FitSettings {
    fn default() -> Self {
        Self {
            margin: FIT_MARGIN,
            near_factor: NEAR_FACTOR,
            far_factor: FAR_FACTOR,
        }
    }
}

/// Compute the frame and clip planes that fit `bounds` into a vertical
/// field of view of `field_of_view` radians.
///
/// Rejects bounds with no extent (a single point) or non-finite corners,
/// since they would need a zero or undefined distance, and settings that
/// produce a non-positive distance or invalid clip planes.
pub fn solve(
    bounds: &Bounds3,
    field_of_view: f64,
    settings: &FitSettings,
) -> Result<FitSolution, RigError> {
    let radius = bounds.radius();
    if !(radius.is_finite() && radius > 0.0) {
        return Err(RigError::invalid("bounds radius", radius));
    }
    let d = radius / (field_of_view / 2.0).tan();
    let distance = settings.margin * d;
    if !(distance.is_finite() && distance > 0.0) {
        return Err(RigError::invalid("fit distance", distance));
    }
    Ok(FitSolution {
        frame: FitFrame {
            origin: bounds.center(),
            distance,
        },
        clip: ClipPlanes::for_distance(d, settings.near_factor, settings.far_factor)?,
    })
}

/// Something that can tween a rig from one frame to another over time by
/// issuing ordinary `set_origin` / `set_distance` writes.
///
/// Cancelling is the scheduler's business: it simply stops writing.
pub trait AnimationScheduler {
    /// Start (or replace) an animation towards `transition.to`.
    fn animate(&self, transition: FitTransition);
}
