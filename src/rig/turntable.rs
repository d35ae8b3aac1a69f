use crate::camera::parameters::RotationMode;
use crate::error::RigError;
use crate::host::SharedHost;
use crate::input::{GestureEvent, MouseButton};
use crate::interaction::{Interaction, ParameterUpdate};
use crate::math::Turntable;
use crate::options::RigOptions;

use super::core::RigCore;
use super::fixed::FixedBindings;
use super::sealed::RigInternals;
use super::CameraRig;

const BUTTONS: &[(MouseButton, Interaction)] = &[
    (MouseButton::Left, Interaction::DragTurntable),
    (MouseButton::Right, Interaction::DragPan),
];

/// Rig with yaw/pitch rotation about the world up axis.
///
/// Left drag turns the table, right drag pans and scrolling zooms.
#[derive(Debug)]
pub struct TurntableRig {
    core: RigCore,
    bindings: FixedBindings,
}

impl TurntableRig {
    /// Build a detached rig looking along the up axis.
    pub fn new(options: RigOptions) -> Result<Self, RigError> {
        Ok(Self {
            core: RigCore::new(options, RotationMode::Turntable)?,
            bindings: FixedBindings::new(BUTTONS),
        })
    }

    /// Current yaw and pitch.
    #[must_use]
    pub fn turntable(&self) -> Turntable {
        self.core.parameters().rotation().as_turntable()
    }

    /// Set yaw and pitch.
    pub fn set_turntable(&mut self, turntable: Turntable) -> Result<(), RigError> {
        self.core.set_turntable(turntable)
    }
}

impl CameraRig for TurntableRig {
    fn core(&self) -> &RigCore {
        &self.core
    }
}

impl RigInternals for TurntableRig {
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

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use glam::DVec2;

    use super::*;
    use crate::host::HeadlessHost;

    #[test]
    fn left_drag_adds_yaw_and_pitch() {
        let mut rig = TurntableRig::new(RigOptions::default()).unwrap();
        rig.set_turntable(Turntable::from_degrees(0.0, 90.0)).unwrap();
        rig.attach(Rc::new(HeadlessHost::new(300.0, 200.0)));

        let start = DVec2::new(100.0, 100.0);
        let _ = rig
            .handle_gesture(&GestureEvent::DragStart {
                position: start,
                button: MouseButton::Left,
            })
            .unwrap();
        let _ = rig
            .handle_gesture(&GestureEvent::DragUpdate {
                position: start + DVec2::new(40.0, 20.0),
                delta: DVec2::new(40.0, 20.0),
            })
            .unwrap();

        // 0.25 degrees per pixel.
        let t = rig.turntable();
        assert!((t.yaw.to_degrees() - 10.0).abs() < 1e-9);
        assert!((t.pitch.to_degrees() - 95.0).abs() < 1e-9);
    }

    #[test]
    fn middle_drag_does_nothing() {
        let mut rig = TurntableRig::new(RigOptions::default()).unwrap();
        rig.attach(Rc::new(HeadlessHost::new(300.0, 200.0)));
        let _ = rig
            .handle_gesture(&GestureEvent::DragStart {
                position: DVec2::ZERO,
                button: MouseButton::Middle,
            })
            .unwrap();
        let changed = rig
            .handle_gesture(&GestureEvent::DragUpdate {
                position: DVec2::new(0.0, 30.0),
                delta: DVec2::new(0.0, 30.0),
            })
            .unwrap();
        assert!(!changed);
        assert_eq!(rig.parameters().distance(), 10.0);
    }

    #[test]
    fn scroll_zooms_when_detached() {
        let mut rig = TurntableRig::new(RigOptions::default()).unwrap();
        assert!(rig.handle_gesture(&GestureEvent::Scroll { delta: 5.0 }).unwrap());
        assert!(rig.parameters().distance() < 10.0);
    }
}
