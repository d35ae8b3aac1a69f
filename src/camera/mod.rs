//! Camera state and the matrices derived from it.
//!
//! Provides the validated parameter store, the projection kinds, the pure
//! transform pipeline, the bounds-fit solver and change notification.

/// Bounds-fit solver and animation hand-off types.
pub mod fit;
/// Change listeners run after each committed write.
pub mod observer;
/// Validated camera parameters and rotation modes.
pub mod parameters;
/// Perspective/orthographic projection and clip planes.
pub mod projection;
/// Rotation-only, view and scene-to-raster matrices.
pub mod transform;
/// Single-precision GPU uniform of the derived matrices.
pub mod uniform;

pub use fit::{AnimationScheduler, FitFrame, FitOutcome, FitTransition};
pub use observer::{ChangeListener, SubscriptionId};
pub use parameters::{
    CameraParameters, ParameterChange, Rotation, RotationMode, MAX_DISTANCE,
    MIN_DISTANCE,
};
pub use projection::{ClipPlanes, Projection};
pub use transform::Transforms;
pub use uniform::RigUniform;
