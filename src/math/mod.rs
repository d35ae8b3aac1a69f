//! Vector and rotation math.
//!
//! Pure functions over immutable value types: axis-angle and turntable
//! rotations, the conversions between them, and axis-aligned bounds.

/// Axis-aligned bounding volumes.
pub mod bounds;
/// Axis-angle and turntable rotations and their conversions.
pub mod rotation;

pub use bounds::Bounds3;
pub use rotation::{
    axis_angle_from_turntable, closest_turntable_from_axis_angle, AxisAngle,
    Turntable, FORWARD_AXIS, RIGHT_AXIS, UP_AXIS,
};
