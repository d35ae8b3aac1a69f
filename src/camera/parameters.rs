//! Mutable camera state with invariants enforced on write.
//!
//! Every setter validates its input and rejects out-of-domain values with
//! [`RigError::InvalidParameter`]; nothing is clamped. Interaction handlers
//! clamp their own results to [`MIN_DISTANCE`, `MAX_DISTANCE`] before
//! writing, so a write
//! coming from a gesture never fails.

use std::f64::consts::PI;

use glam::{DQuat, DVec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;
use crate::math::rotation::closest_turntable_from_quat;
use crate::math::{axis_angle_from_turntable, AxisAngle, Turntable};

/// Distance from origin a new rig starts at.
pub const DEFAULT_DISTANCE: f64 = 10.0;
/// Smallest distance interaction handlers will produce.
pub const MIN_DISTANCE: f64 = 1e-6;
/// Largest distance interaction handlers will produce.
pub const MAX_DISTANCE: f64 = 1e12;

/// Which rotation representation is authoritative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RotationMode {
    /// Free three-axis orientation stored as axis-angle.
    Arcball,
    /// Yaw/pitch orientation constrained to the up axis.
    #[default]
    Turntable,
}

/// The authoritative rotation; the other representation is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// Axis-angle is authoritative.
    Arcball(AxisAngle),
    /// Turntable angles are authoritative.
    Turntable(Turntable),
}

impl Rotation {
    /// Identity rotation in the given mode.
    #[must_use]
    pub const fn identity(mode: RotationMode) -> Self {
        match mode {
            RotationMode::Arcball => Self::Arcball(AxisAngle::IDENTITY),
            RotationMode::Turntable => Self::Turntable(Turntable::IDENTITY),
        }
    }

    /// Mode this rotation is stored in.
    #[must_use]
    pub const fn mode(&self) -> RotationMode {
        match self {
            Self::Arcball(_) => RotationMode::Arcball,
            Self::Turntable(_) => RotationMode::Turntable,
        }
    }

    /// Unit quaternion for the rotation.
    #[must_use]
    pub fn to_quat(&self) -> DQuat {
        match self {
            Self::Arcball(aa) => aa.to_quat(),
            Self::Turntable(t) => t.to_quat(),
        }
    }

    /// Axis-angle view (exact).
    #[must_use]
    pub fn as_axis_angle(&self) -> AxisAngle {
        match self {
            Self::Arcball(aa) => *aa,
            Self::Turntable(t) => axis_angle_from_turntable(*t),
        }
    }

    /// Turntable view (closest fit when the axis-angle carries twist).
    #[must_use]
    pub fn as_turntable(&self) -> Turntable {
        match self {
            Self::Arcball(aa) => closest_turntable_from_quat(aa.to_quat()),
            Self::Turntable(t) => *t,
        }
    }

    /// The same orientation stored in `mode`.
    #[must_use]
    pub fn converted(&self, mode: RotationMode) -> Self {
        match mode {
            RotationMode::Arcball => Self::Arcball(self.as_axis_angle()),
            RotationMode::Turntable => Self::Turntable(self.as_turntable()),
        }
    }
}

/// Which parameter a write touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterChange {
    /// Orbit origin.
    Origin,
    /// Distance from origin.
    Distance,
    /// Vertical field of view.
    FieldOfView,
    /// Rotation value.
    Rotation,
    /// Rotation representation switched.
    RotationMode,
    /// Projection kind or clip planes.
    Projection,
    /// Host attached, detached or resized.
    Viewport,
}

/// Camera state: orbit origin, distance, vertical field of view, rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParametersData")]
pub struct CameraParameters {
    origin: DVec3,
    distance: f64,
    field_of_view: f64,
    rotation: Rotation,
}

impl CameraParameters {
    /// Validate and build.
    pub fn new(
        origin: DVec3,
        distance: f64,
        field_of_view: f64,
        rotation: Rotation,
    ) -> Result<Self, RigError> {
        Ok(Self {
            origin: check_origin(origin)?,
            distance: check_distance(distance)?,
            field_of_view: check_field_of_view(field_of_view)?,
            rotation: check_rotation(rotation)?,
        })
    }

    /// Point the camera orbits around and looks at.
    #[must_use]
    pub const fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Distance from the camera to the origin, always > 0.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Vertical field of view in radians, in `(0, π)`.
    #[must_use]
    pub const fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// Authoritative rotation.
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Active rotation mode.
    #[must_use]
    pub const fn rotation_mode(&self) -> RotationMode {
        self.rotation.mode()
    }

    /// Set the orbit origin. Rejects non-finite components.
    pub fn set_origin(&mut self, origin: DVec3) -> Result<(), RigError> {
        self.origin = check_origin(origin)?;
        Ok(())
    }

    /// Set the distance. Rejects zero, negative and non-finite values.
    pub fn set_distance(&mut self, distance: f64) -> Result<(), RigError> {
        self.distance = check_distance(distance)?;
        Ok(())
    }

    /// Set the vertical field of view. Rejects values outside `(0, π)`.
    pub fn set_field_of_view(&mut self, fov: f64) -> Result<(), RigError> {
        self.field_of_view = check_field_of_view(fov)?;
        Ok(())
    }

    /// Write an axis-angle rotation into the active representation.
    ///
    /// In turntable mode the closest turntable is stored.
    pub fn set_axis_angle(&mut self, rotation: AxisAngle) -> Result<(), RigError> {
        let rotation = check_rotation(Rotation::Arcball(rotation))?;
        self.rotation = rotation.converted(self.rotation_mode());
        Ok(())
    }

    /// Write a turntable rotation into the active representation.
    ///
    /// In arcball mode the exact axis-angle equivalent is stored.
    pub fn set_turntable(&mut self, rotation: Turntable) -> Result<(), RigError> {
        let rotation = check_rotation(Rotation::Turntable(rotation))?;
        self.rotation = rotation.converted(self.rotation_mode());
        Ok(())
    }

    /// Switch the authoritative representation, converting the current
    /// orientation once. Returns `false` if `mode` was already active.
    pub fn set_rotation_mode(&mut self, mode: RotationMode) -> bool {
        if self.rotation_mode() == mode {
            return false;
        }
        self.rotation = self.rotation.converted(mode);
        true
    }
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            distance: DEFAULT_DISTANCE,
            field_of_view: 45f64.to_radians(),
            rotation: Rotation::identity(RotationMode::default()),
        }
    }
}

/// Unvalidated mirror used for deserialization.
#[derive(Deserialize)]
struct ParametersData {
    origin: DVec3,
    distance: f64,
    field_of_view: f64,
    rotation: Rotation,
}

impl TryFrom<ParametersData> for CameraParameters {
    type Error = RigError;

    fn try_from(data: ParametersData) -> Result<Self, Self::Error> {
        Self::new(data.origin, data.distance, data.field_of_view, data.rotation)
    }
}

fn check_origin(origin: DVec3) -> Result<DVec3, RigError> {
    if origin.is_finite() {
        Ok(origin)
    } else {
        Err(RigError::invalid("origin", origin.max_element()))
    }
}

fn check_distance(distance: f64) -> Result<f64, RigError> {
    if distance.is_finite() && distance > 0.0 {
        Ok(distance)
    } else {
        Err(RigError::invalid("distance", distance))
    }
}

fn check_field_of_view(fov: f64) -> Result<f64, RigError> {
    if fov > 0.0 && fov < PI {
        Ok(fov)
    } else {
        Err(RigError::invalid("field of view", fov))
    }
}

fn check_rotation(rotation: Rotation) -> Result<Rotation, RigError> {
    match rotation {
        // Re-validate: deserialized axis-angles bypass `AxisAngle::new`.
        Rotation::Arcball(aa) => {
            AxisAngle::new(aa.axis(), aa.angle()).map(Rotation::Arcball)
        }
        Rotation::Turntable(t) => {
            if !t.yaw.is_finite() {
                Err(RigError::invalid("yaw", t.yaw))
            } else if !t.pitch.is_finite() {
                Err(RigError::invalid("pitch", t.pitch))
            } else {
                Ok(rotation)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn non_positive_distance_is_rejected() {
        let mut params = CameraParameters::default();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                params.set_distance(bad),
                Err(RigError::InvalidParameter {
                    name: "distance",
                    ..
                })
            ));
        }
        assert_eq!(params.distance(), DEFAULT_DISTANCE);
        params.set_distance(2.5).unwrap();
        assert_eq!(params.distance(), 2.5);
    }

    #[test]
    fn field_of_view_domain() {
        let mut params = CameraParameters::default();
        assert!(params.set_field_of_view(0.0).is_err());
        assert!(params.set_field_of_view(PI).is_err());
        assert!(params.set_field_of_view(-0.3).is_err());
        params.set_field_of_view(1.0).unwrap();
        assert_eq!(params.field_of_view(), 1.0);
    }

    #[test]
    fn non_finite_origin_is_rejected() {
        let mut params = CameraParameters::default();
        assert!(params.set_origin(DVec3::new(0.0, f64::NAN, 0.0)).is_err());
        assert_eq!(params.origin(), DVec3::ZERO);
    }

    #[test]
    fn mode_switch_round_trip_preserves_twist_free_rotation() {
        let turntable = Turntable::new(0.7, 1.2);
        let original = axis_angle_from_turntable(turntable);
        let mut params = CameraParameters::new(
            DVec3::ZERO,
            5.0,
            1.0,
            Rotation::Arcball(original),
        )
        .unwrap();

        assert!(params.set_rotation_mode(RotationMode::Turntable));
        assert!(params.set_rotation_mode(RotationMode::Arcball));
        let back = params.rotation().as_axis_angle();
        assert!((back.axis() - original.axis()).length() < TOL);
        assert!((back.angle() - original.angle()).abs() < TOL);
    }

    #[test]
    fn switching_to_same_mode_is_noop() {
        let mut params = CameraParameters::default();
        assert!(!params.set_rotation_mode(RotationMode::Turntable));
    }

    #[test]
    fn setting_axis_angle_in_turntable_mode_stores_closest_fit() {
        let mut params = CameraParameters::default();
        let aa = axis_angle_from_turntable(Turntable::new(-0.4, 0.8));
        params.set_axis_angle(aa).unwrap();
        let Rotation::Turntable(t) = params.rotation() else {
            panic!("mode changed");
        };
        assert!((t.yaw + 0.4).abs() < TOL);
        assert!((t.pitch - 0.8).abs() < TOL);
    }

    #[test]
    fn non_finite_turntable_is_rejected() {
        let mut params = CameraParameters::default();
        assert!(params.set_turntable(Turntable::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{
            "origin": [0.0, 0.0, 0.0],
            "distance": -3.0,
            "field_of_view": 1.0,
            "rotation": { "turntable": { "yaw": 0.0, "pitch": 0.0 } }
        }"#;
        assert!(serde_json::from_str::<CameraParameters>(json).is_err());

        let params = CameraParameters::default();
        let text = serde_json::to_string(&params).unwrap();
        let parsed: CameraParameters = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, params);
    }
}
