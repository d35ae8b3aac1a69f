//! Axis-angle and turntable rotation representations.
//!
//! A turntable rotation is a yaw about the world up axis ([`UP_AXIS`])
//! followed by a pitch about the resulting local right axis
//! ([`RIGHT_AXIS`]), i.e. `Rz(yaw) * Rx(pitch)`. Converting a turntable to
//! axis-angle is exact. The reverse is a projection: the rotation is split
//! into Z-X-Z Euler angles `Rz(yaw) * Rx(pitch) * Rz(twist)` and the twist
//! (roll about the viewing axis) is dropped, which leaves the viewing
//! direction untouched.
//!
//! All angles are radians.

use std::f64::consts::PI;

use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// World axis the turntable yaws around.
pub const UP_AXIS: DVec3 = DVec3::Z;
/// Camera-local axis the turntable pitches around.
pub const RIGHT_AXIS: DVec3 = DVec3::X;
/// Camera-local viewing direction.
pub const FORWARD_AXIS: DVec3 = DVec3::Z;

/// Below this `sin(pitch)` the view is treated as looking straight along
/// the up axis, where yaw and twist are indistinguishable.
const POLE_EPSILON: f64 = 1e-12;

/// Rotation by `angle` radians about a unit `axis`.
///
/// Values built by the crate are canonical: `angle` in `[0, π]`, and the
/// identity is `(+X, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    axis: DVec3,
    angle: f64,
}

impl AxisAngle {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        axis: DVec3::X,
        angle: 0.0,
    };

    /// Build a rotation from an arbitrary (non-zero) axis, normalizing it.
    ///
    /// Rejects zero-length and non-finite axes and non-finite angles.
    pub fn new(axis: DVec3, angle: f64) -> Result<Self, RigError> {
        if !angle.is_finite() {
            return Err(RigError::invalid("rotation angle", angle));
        }
        let length = axis.length();
        if !length.is_finite() || length <= f64::EPSILON {
            return Err(RigError::invalid("rotation axis", length));
        }
        Ok(Self {
            axis: axis / length,
            angle,
        })
    }

    /// Canonical axis-angle for a quaternion (angle folded into `[0, π]`).
    #[must_use]
    pub fn from_quat(rotation: DQuat) -> Self {
        let rotation = rotation.normalize();
        let rotation = if rotation.w < 0.0 { -rotation } else { rotation };
        let (axis, angle) = rotation.to_axis_angle();
        Self { axis, angle }
    }

    /// Unit rotation axis.
    #[must_use]
    pub const fn axis(&self) -> DVec3 {
        self.axis
    }

    /// Rotation angle in radians.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Equivalent unit quaternion.
    #[must_use]
    pub fn to_quat(&self) -> DQuat {
        DQuat::from_axis_angle(self.axis, self.angle)
    }

    /// Rotate a vector.
    #[must_use]
    pub fn rotate(&self, v: DVec3) -> DVec3 {
        self.to_quat() * v
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Two-angle rotation: `yaw` about [`UP_AXIS`], then `pitch` about the
/// rotated [`RIGHT_AXIS`].
///
/// Angles are not wrapped; any real value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Turntable {
    /// Rotation about the world up axis, radians.
    pub yaw: f64,
    /// Rotation about the local right axis, radians.
    pub pitch: f64,
}

impl Turntable {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
    };

    /// Build from yaw and pitch in radians.
    #[must_use]
    pub const fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    /// Build from yaw and pitch in degrees.
    #[must_use]
    pub fn from_degrees(yaw: f64, pitch: f64) -> Self {
        Self::new(yaw.to_radians(), pitch.to_radians())
    }

    /// Equivalent unit quaternion, `Rz(yaw) * Rx(pitch)`.
    #[must_use]
    pub fn to_quat(&self) -> DQuat {
        DQuat::from_axis_angle(UP_AXIS, self.yaw)
            * DQuat::from_axis_angle(RIGHT_AXIS, self.pitch)
    }

    /// World-space viewing direction of a camera with this orientation.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        self.to_quat() * FORWARD_AXIS
    }
}

/// Exact axis-angle equivalent of a turntable rotation.
///
/// `yaw == pitch == 0` yields [`AxisAngle::IDENTITY`].
#[must_use]
pub fn axis_angle_from_turntable(turntable: Turntable) -> AxisAngle {
    AxisAngle::from_quat(turntable.to_quat())
}

/// Closest turntable rotation to an arbitrary rotation.
///
/// The viewing direction is preserved exactly; any roll about it is
/// discarded. Yaw comes back in `[-π, π]` and pitch in `[-π, π]`; for
/// inputs that were themselves built from a turntable within those ranges
/// the original angles are recovered.
#[must_use]
pub fn closest_turntable_from_axis_angle(rotation: AxisAngle) -> Turntable {
    closest_turntable_from_quat(rotation.to_quat())
}

pub(crate) fn closest_turntable_from_quat(rotation: DQuat) -> Turntable {
    // R = Rz(a) Rx(b) Rz(c):
    //   column 2 = ( sin a sin b, -cos a sin b, cos b)
    //   row 2    = ( sin b sin c,  sin b cos c, cos b)
    let m = DMat3::from_quat(rotation.normalize());
    let (r00, r10, r20) = (m.x_axis.x, m.x_axis.y, m.x_axis.z);
    let r21 = m.y_axis.z;
    let (r02, r12, r22) = (m.z_axis.x, m.z_axis.y, m.z_axis.z);

    let sin_pitch = r20.hypot(r21);
    if sin_pitch <= POLE_EPSILON {
        // Looking along the up axis: only yaw + twist (or yaw - twist) is
        // observable, so all of it goes to yaw.
        let pitch = if r22 >= 0.0 { 0.0 } else { PI };
        return Turntable::new(r10.atan2(r00), pitch);
    }

    let branch = |sign: f64| {
        let pitch = (sign * sin_pitch).atan2(r22);
        let yaw = (sign * r02).atan2(-sign * r12);
        let twist = (sign * r20).atan2(sign * r21);
        (Turntable::new(yaw, pitch), twist.abs())
    };
    let (positive, positive_twist) = branch(1.0);
    let (negative, negative_twist) = branch(-1.0);
    if negative_twist < positive_twist {
        negative
    } else {
        positive
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_vec_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < TOL, "{a:?} != {b:?}");
    }

    fn sample_turntables() -> Vec<Turntable> {
        let mut out = Vec::new();
        for yaw in [-3.0, -2.1, -0.7, 0.0, 0.4, 1.3, 2.9] {
            for pitch in [-2.8, -1.2, -0.3, 0.25, 0.9, FRAC_PI_2, 2.4, 3.1] {
                out.push(Turntable::new(yaw, pitch));
            }
        }
        out
    }

    #[test]
    fn identity_turntable_is_identity_axis_angle() {
        let aa = axis_angle_from_turntable(Turntable::IDENTITY);
        assert_eq!(aa.angle(), 0.0);
        assert_eq!(aa.axis(), DVec3::X);
    }

    #[test]
    fn zero_axis_is_rejected() {
        assert!(matches!(
            AxisAngle::new(DVec3::ZERO, 1.0),
            Err(RigError::InvalidParameter {
                name: "rotation axis",
                ..
            })
        ));
        assert!(AxisAngle::new(DVec3::new(f64::NAN, 0.0, 1.0), 1.0).is_err());
        assert!(AxisAngle::new(DVec3::Y, f64::INFINITY).is_err());
    }

    #[test]
    fn axis_is_normalized() {
        let aa = AxisAngle::new(DVec3::new(0.0, 3.0, 4.0), 0.5).unwrap();
        assert_vec_close(aa.axis(), DVec3::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn from_quat_folds_angle_into_half_turn() {
        let q = DQuat::from_axis_angle(DVec3::Y, 1.5 * PI);
        let aa = AxisAngle::from_quat(q);
        assert!((aa.angle() - 0.5 * PI).abs() < TOL);
        assert_vec_close(aa.axis(), -DVec3::Y);
    }

    #[test]
    fn pure_yaw_maps_to_up_axis() {
        let aa = axis_angle_from_turntable(Turntable::new(0.8, 0.0));
        assert_vec_close(aa.axis(), UP_AXIS);
        assert!((aa.angle() - 0.8).abs() < TOL);
    }

    #[test]
    fn turntable_round_trip_is_exact() {
        for t in sample_turntables() {
            let back =
                closest_turntable_from_axis_angle(axis_angle_from_turntable(t));
            assert!((back.yaw - t.yaw).abs() < TOL, "{t:?} -> {back:?}");
            assert!((back.pitch - t.pitch).abs() < TOL, "{t:?} -> {back:?}");
        }
    }

    #[test]
    fn closest_fit_preserves_viewing_direction() {
        let axes = [
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(-0.3, 0.1, 0.9),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.7, -0.7, 0.1),
            DVec3::Z,
        ];
        for axis in axes {
            for angle in [0.1, 0.9, 2.0, 3.0] {
                let r = AxisAngle::new(axis, angle).unwrap();
                let t = closest_turntable_from_axis_angle(r);
                let refit = axis_angle_from_turntable(t);
                assert_vec_close(
                    refit.rotate(FORWARD_AXIS),
                    r.rotate(FORWARD_AXIS),
                );
            }
        }
    }

    #[test]
    fn closest_fit_drops_twist() {
        let base = Turntable::new(0.6, 1.1);
        let twisted = base.to_quat() * DQuat::from_axis_angle(FORWARD_AXIS, 0.4);
        let t = closest_turntable_from_quat(twisted);
        assert!((t.yaw - base.yaw).abs() < TOL);
        assert!((t.pitch - base.pitch).abs() < TOL);
    }

    #[test]
    fn pole_folds_twist_into_yaw() {
        let r = AxisAngle::new(UP_AXIS, 1.2).unwrap();
        let t = closest_turntable_from_axis_angle(r);
        assert!((t.yaw - 1.2).abs() < TOL);
        assert_eq!(t.pitch, 0.0);

        let flipped = Turntable::new(0.5, PI);
        let t = closest_turntable_from_axis_angle(axis_angle_from_turntable(
            flipped,
        ));
        assert!((t.pitch - PI).abs() < 1e-6);
        assert_vec_close(t.forward(), flipped.forward());
    }

    #[test]
    fn forward_follows_yaw_then_pitch() {
        let t = Turntable::new(FRAC_PI_2, FRAC_PI_2);
        // Rx(90°) tips +Z onto -Y, Rz(90°) then carries -Y onto +X.
        assert_vec_close(t.forward(), DVec3::X);
    }
}
