use crate::camera::parameters::RotationMode;
use crate::error::RigError;
use crate::host::SharedHost;
use crate::input::{GestureEvent, MouseButton};
use crate::interaction::{Interaction, ParameterUpdate};
use crate::math::AxisAngle;
use crate::options::RigOptions;

use super::core::RigCore;
use super::fixed::FixedBindings;
use super::sealed::RigInternals;
use super::CameraRig;

const BUTTONS: &[(MouseButton, Interaction)] = &[
    (MouseButton::Left, Interaction::DragArcball),
    (MouseButton::Right, Interaction::DragPan),
    (MouseButton::Middle, Interaction::DragZoom),
];

/// Rig with free three-axis rotation.
///
/// Left drag rotates on the arcball, right drag pans, middle drag zooms
/// and scrolling zooms.
#[derive(Debug)]
pub struct ArcballRig {
    core: RigCore,
    bindings: FixedBindings,
}

impl ArcballRig {
    /// Build a detached rig at the identity rotation.
    pub fn new(options: RigOptions) -> Result<Self, RigError> {
        Ok(Self {
            core: RigCore::new(options, RotationMode::Arcball)?,
            bindings: FixedBindings::new(BUTTONS),
        })
    }

    /// Current rotation.
    #[must_use]
    pub fn rotation(&self) -> AxisAngle {
        self.core.parameters().rotation().as_axis_angle()
    }

    /// Set the rotation.
    pub fn set_rotation(&mut self, rotation: AxisAngle) -> Result<(), RigError> {
        self.core.set_axis_angle(rotation)
    }
}

impl CameraRig for ArcballRig {
    fn core(&self) -> &RigCore {
        &self.core
    }
}

impl RigInternals for ArcballRig {
    fn core_mut(&mut self) -> &mut RigCore {
        &mut self.core
    }

    fn attach_interactions(&self, host: &SharedHost) {
        self.bindings.attach(host);
    }

    fn detach_interactions(&self, host: &SharedHost) {
        self.bindings.detach(host);
    }

    fn interpret(&mut self, gesture: &GestureEvent) -> Option<ParameterUpdate> {
        self.bindings.interpret(&self.core, gesture)
    }
}
