use crate::camera::parameters::{Rotation, RotationMode};
use crate::error::RigError;
use crate::host::{BindingId, SharedHost};
use crate::input::GestureEvent;
use crate::interaction::{NavigationBehavior, NavigationRegistry, ParameterUpdate};
use crate::math::{AxisAngle, Turntable};
use crate::options::RigOptions;

use super::core::RigCore;
use super::sealed::RigInternals;
use super::CameraRig;

/// Rig driven by a table of navigation behaviors, with a rotation mode
/// that can change at runtime.
///
/// Any mouse button drives the drag behavior; the registry holds at most
/// one behavior per input kind.
#[derive(Debug)]
pub struct OrbitalRig {
    core: RigCore,
    registry: NavigationRegistry,
}

impl OrbitalRig {
    /// Build a detached rig with the behaviors and rotation mode listed in
    /// `options.interaction`.
    pub fn new(options: RigOptions) -> Result<Self, RigError> {
        let mode = options.interaction.rotation_mode;
        let behaviors = options.interaction.behaviors.clone();
        let mut rig = Self {
            core: RigCore::new(options, mode)?,
            registry: NavigationRegistry::new(),
        };
        for behavior in behaviors {
            let _ = rig.add_behavior(behavior)?;
        }
        Ok(rig)
    }

    /// Register a behavior, replacing the one bound to the same input.
    pub fn add_behavior(&mut self, behavior: NavigationBehavior) -> Result<BindingId, RigError> {
        let mode = self.rotation_mode();
        self.registry.add(behavior, mode, self.core.host())
    }

    /// Remove the behavior bound to the same input as `behavior`.
    pub fn remove_behavior(&mut self, behavior: NavigationBehavior) -> Option<NavigationBehavior> {
        self.registry.remove(behavior, self.core.host())
    }

    /// Remove every behavior.
    pub fn clear_behaviors(&mut self) {
        self.registry.clear(self.core.host());
    }

    /// Registered behaviors in insertion order.
    #[must_use]
    pub fn behaviors(&self) -> Vec<NavigationBehavior> {
        self.registry.behaviors().collect()
    }

    /// The behavior table.
    #[must_use]
    pub const fn registry(&self) -> &NavigationRegistry {
        &self.registry
    }

    /// Switch the rotation representation.
    ///
    /// The current orientation is converted once (closest turntable fit
    /// going to turntable, exact going to arcball) and any drag-rotate
    /// handler is swapped for the new mode's. Returns `false` if `mode`
    /// was already active.
    pub fn set_rotation_mode(&mut self, mode: RotationMode) -> bool {
        if !self.core.set_rotation_mode(mode) {
            return false;
        }
        let swapped = self.registry.set_rotation_mode(mode, self.core.host());
        log::debug!("{:?}: {swapped} rotate handler(s) swapped", self.core.id());
        true
    }

    /// Current rotation in the active representation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.core.parameters().rotation()
    }

    /// Write an axis-angle rotation (stored as its closest turntable in
    /// turntable mode).
    pub fn set_axis_angle(&mut self, rotation: AxisAngle) -> Result<(), RigError> {
        self.core.set_axis_angle(rotation)
    }

    /// Write a turntable rotation.
    pub fn set_turntable(&mut self, rotation: Turntable) -> Result<(), RigError> {
        self.core.set_turntable(rotation)
    }
}

impl CameraRig for OrbitalRig {
    fn core(&self) -> &RigCore {
        &self.core
    }
}

impl RigInternals for OrbitalRig {
    fn core_mut(&mut self) -> &mut RigCore {
        &mut self.core
    }

    fn attach_interactions(&self, host: &SharedHost) {
        self.registry.attach_all(host);
    }

    fn detach_interactions(&self, host: &SharedHost) {
        self.registry.detach_all(host);
    }

    fn interpret(&mut self, gesture: &GestureEvent) -> Option<ParameterUpdate> {
        let ctx = self.core.interaction_context();
        self.registry.dispatch(self.core.parameters(), gesture, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use glam::{DVec2, DVec3};

    use super::*;
    use crate::camera::fit::FitOutcome;
    use crate::host::HeadlessHost;
    use crate::interaction::{InputKind, Interaction, ResponseKind};
    use crate::math::{axis_angle_from_turntable, Bounds3};

    const TOL: f64 = 1e-9;

    fn attached(options: RigOptions) -> (OrbitalRig, Rc<HeadlessHost>, SharedHost) {
        let headless = Rc::new(HeadlessHost::new(640.0, 480.0));
        let shared: SharedHost = headless.clone();
        let mut rig = OrbitalRig::new(options).unwrap();
        rig.attach(Rc::clone(&shared));
        (rig, headless, shared)
    }

    fn drag_by(rig: &mut OrbitalRig, from: DVec2, delta: DVec2) -> bool {
        rig.handle_gesture(&GestureEvent::DragUpdate {
            position: from + delta,
            delta,
        })
        .unwrap()
    }

    #[test]
    fn default_behaviors_attach() {
        let (rig, host, _) = attached(RigOptions::default());
        assert_eq!(
            rig.behaviors(),
            vec![NavigationBehavior::DRAG_ROTATE, NavigationBehavior::SCROLL_ZOOM]
        );
        assert_eq!(host.interaction_count(), 2);
        assert_eq!(host.camera(), Some(rig.id()));
    }

    #[test]
    fn behaviors_added_before_attach_are_registered_on_attach() {
        let mut rig = OrbitalRig::new(RigOptions::default()).unwrap();
        let _ = rig.add_behavior(NavigationBehavior::DRAG_PAN).unwrap();
        let headless = Rc::new(HeadlessHost::new(100.0, 100.0));
        rig.attach(headless.clone());
        assert_eq!(headless.interactions_for(InputKind::Drag).len(), 1);
        assert_eq!(headless.interaction_count(), 2);
    }

    #[test]
    fn drag_pan_replaces_drag_rotate() {
        let (mut rig, host, _) = attached(RigOptions::default());
        let id = rig.add_behavior(NavigationBehavior::DRAG_PAN).unwrap();
        assert_eq!(host.interactions_for(InputKind::Drag), vec![id]);
        assert!(rig.behaviors().contains(&NavigationBehavior::DRAG_PAN));
        assert!(!rig.behaviors().contains(&NavigationBehavior::DRAG_ROTATE));

        assert!(drag_by(&mut rig, DVec2::new(320.0, 240.0), DVec2::new(12.0, 0.0)));
        assert_ne!(rig.parameters().origin(), DVec3::ZERO);
        assert_eq!(rig.rotation(), Rotation::Turntable(Turntable::IDENTITY));
    }

    #[test]
    fn unsupported_behavior_is_an_error() {
        let (mut rig, host, _) = attached(RigOptions::default());
        let err = rig
            .add_behavior(NavigationBehavior::new(InputKind::Scroll, ResponseKind::Pan))
            .unwrap_err();
        assert!(matches!(err, RigError::UnsupportedBehavior(_)));
        assert_eq!(host.interaction_count(), 2);
    }

    #[test]
    fn mode_round_trip_preserves_rotation() {
        let (mut rig, host, _) = attached(RigOptions::default());
        rig.set_turntable(Turntable::new(0.6, 1.3)).unwrap();
        let original = axis_angle_from_turntable(Turntable::new(0.6, 1.3));

        assert!(rig.set_rotation_mode(RotationMode::Arcball));
        let drag = host.interactions_for(InputKind::Drag);
        assert_eq!(drag.len(), 1);
        assert_eq!(
            rig.registry().binding_for(InputKind::Drag).map(|b| b.interaction()),
            Some(Interaction::DragArcball)
        );
        assert!(rig.set_rotation_mode(RotationMode::Turntable));
        assert!(rig.set_rotation_mode(RotationMode::Arcball));
        assert!(!rig.set_rotation_mode(RotationMode::Arcball));

        let back = rig.rotation().as_axis_angle();
        assert!((back.axis() - original.axis()).length() < TOL);
        assert!((back.angle() - original.angle()).abs() < TOL);
        assert_eq!(host.interaction_count(), 2);
    }

    #[test]
    fn mode_switch_keeps_view_matrix() {
        let (mut rig, _, _) = attached(RigOptions::default());
        rig.set_turntable(Turntable::new(-1.0, 0.4)).unwrap();
        let before = rig.transforms().view();
        assert!(rig.set_rotation_mode(RotationMode::Arcball));
        assert!(rig.transforms().view().abs_diff_eq(before, TOL));
    }

    #[test]
    fn arcball_drag_in_arcball_mode() {
        let mut options = RigOptions::default();
        options.interaction.rotation_mode = RotationMode::Arcball;
        let (mut rig, _, _) = attached(options);
        assert!(drag_by(&mut rig, DVec2::new(320.0, 240.0), DVec2::new(0.0, 30.0)));
        let Rotation::Arcball(aa) = rig.rotation() else {
            panic!("rotation mode changed");
        };
        assert!(aa.angle() > 0.0);
    }

    #[test]
    fn clear_detaches_everything() {
        let (mut rig, host, shared) = attached(RigOptions::default());
        rig.clear_behaviors();
        assert!(rig.behaviors().is_empty());
        assert_eq!(host.interaction_count(), 0);
        assert!(!drag_by(&mut rig, DVec2::ZERO, DVec2::ONE));
        rig.detach(&shared);
        assert_eq!(host.camera(), None);
    }

    #[test]
    fn resize_updates_raster_mapping() {
        let (mut rig, host, _) = attached(RigOptions::default());
        host.resize(crate::host::Viewport::new(200.0, 100.0));
        rig.viewport_changed();
        let center = rig.transforms().project(DVec3::ZERO);
        assert!((center.x - 100.0).abs() < 1e-6);
        assert!((center.y - 50.0).abs() < 1e-6);
    }

    #[test]
    fn fit_frames_bounds() {
        let (mut rig, _, _) = attached(RigOptions::default());
        let bounds = Bounds3::from_points([DVec3::new(4.0, 4.0, 4.0), DVec3::new(6.0, 8.0, 5.0)])
            .unwrap();
        let outcome = rig.fit(&bounds, Duration::ZERO).unwrap();
        assert!(matches!(outcome, FitOutcome::Applied(_)));
        assert!((rig.parameters().origin() - DVec3::new(5.0, 6.0, 4.5)).length() < TOL);
        let s2r = rig.transforms().project(bounds.center());
        assert!((s2r.truncate() - DVec2::new(320.0, 240.0)).length() < 1e-6);
    }

    #[test]
    fn huge_scroll_out_clamps_distance() {
        let (mut rig, _, _) = attached(RigOptions::default());
        assert!(rig.handle_gesture(&GestureEvent::Scroll { delta: -80_000.0 }).unwrap());
        assert_eq!(rig.parameters().distance(), crate::camera::MAX_DISTANCE);
        assert!(rig.transforms().view().is_finite());
        assert!(rig.handle_gesture(&GestureEvent::Scroll { delta: 5.0 }).unwrap());
        assert!(rig.parameters().distance() < crate::camera::MAX_DISTANCE);
    }

    #[test]
    fn out_of_range_options_fail_construction() {
        let mut options = RigOptions::default();
        options.interaction.zoom_factor = 0.0;
        assert!(matches!(
            OrbitalRig::new(options),
            Err(RigError::InvalidParameter { .. })
        ));
    }
}
