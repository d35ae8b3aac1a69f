//! State shared by every rig variant.
//!
//! `RigCore` owns the parameters, the projection, the derived matrices,
//! the host link and the change listeners. Every write goes through
//! one commit step: validate, store, recompute once, notify.

use std::rc::Rc;
use std::time::Duration;

use glam::DVec3;

use crate::camera::fit::{self, AnimationScheduler, FitFrame, FitOutcome, FitTransition};
use crate::camera::observer::{ChangeListener, Listeners, SubscriptionId};
use crate::camera::parameters::{CameraParameters, ParameterChange, Rotation, RotationMode};
use crate::camera::projection::Projection;
use crate::camera::transform::Transforms;
use crate::camera::uniform::RigUniform;
use crate::error::RigError;
use crate::host::{RigId, SharedHost, Viewport};
use crate::interaction::{InteractionContext, ParameterUpdate};
use crate::math::{AxisAngle, Bounds3, Turntable};
use crate::options::RigOptions;

/// True when both handles point at the same host object.
pub(crate) fn same_host(a: &SharedHost, b: &SharedHost) -> bool {
    Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
}

/// Parameters, derived matrices and host link of one rig.
pub struct RigCore {
    id: RigId,
    params: CameraParameters,
    projection: Projection,
    transforms: Transforms,
    host: Option<SharedHost>,
    listeners: Listeners,
    options: RigOptions,
}

impl RigCore {
    /// Build from options, starting at the identity rotation in `mode`.
    ///
    /// Options are validated first; see [`RigOptions::validate`].
    pub fn new(options: RigOptions, mode: RotationMode) -> Result<Self, RigError> {
        options.validate()?;
        let params = options.camera.parameters(Rotation::identity(mode))?;
        let projection = options.camera.projection()?;
        Ok(Self::with_state(params, projection, options))
    }

    /// Build from explicit state.
    #[must_use]
    pub fn with_state(
        params: CameraParameters,
        projection: Projection,
        options: RigOptions,
    ) -> Self {
        let transforms = Transforms::compute(&params, &projection, None);
        Self {
            id: RigId::next(),
            params,
            projection,
            transforms,
            host: None,
            listeners: Listeners::default(),
            options,
        }
    }

    /// Identity installed on the host while attached.
    #[must_use]
    pub const fn id(&self) -> RigId {
        self.id
    }

    /// Current parameters.
    #[must_use]
    pub const fn parameters(&self) -> &CameraParameters {
        &self.params
    }

    /// Current projection.
    #[must_use]
    pub const fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Matrices for the current parameters and viewport.
    #[must_use]
    pub const fn transforms(&self) -> &Transforms {
        &self.transforms
    }

    /// Options the rig was built with.
    #[must_use]
    pub const fn options(&self) -> &RigOptions {
        &self.options
    }

    /// Host the rig is attached to.
    #[must_use]
    pub const fn host(&self) -> Option<&SharedHost> {
        self.host.as_ref()
    }

    /// Host viewport, `None` while detached.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.host.as_ref().map(|host| host.viewport())
    }

    /// What gesture handlers need to know about the rig's surroundings.
    #[must_use]
    pub fn interaction_context(&self) -> InteractionContext<'_> {
        InteractionContext {
            viewport: self.viewport(),
            settings: &self.options.interaction,
        }
    }

    /// Single-precision copy of the matrices for a GPU uniform buffer.
    #[must_use]
    pub fn uniform(&self) -> RigUniform {
        let mut uniform = RigUniform::new();
        uniform.update(&self.params, &self.transforms, self.viewport());
        uniform
    }

    /// Recompute every matrix, then tell listeners what changed.
    pub(crate) fn commit(&mut self, change: ParameterChange) {
        self.transforms = Transforms::compute(&self.params, &self.projection, self.viewport());
        log::trace!("{change:?}: recomputed {:?}", self.id);
        self.listeners.notify(change, &self.params, &self.transforms);
    }

    /// Link to `host` and install this rig as its camera.
    ///
    /// # Panics
    ///
    /// If the rig is already attached.
    pub(crate) fn attach_host(&mut self, host: SharedHost) {
        assert!(self.host.is_none(), "{:?} is already attached to a host", self.id);
        host.set_camera(Some(self.id));
        self.host = Some(host);
        log::debug!("{:?} attached", self.id);
        self.commit(ParameterChange::Viewport);
    }

    /// Unlink from `host` and clear its camera.
    ///
    /// # Panics
    ///
    /// If the rig is not attached to `host`.
    pub(crate) fn detach_host(&mut self, host: &SharedHost) {
        let attached = self.host.as_ref().is_some_and(|h| same_host(h, host));
        assert!(attached, "{:?} is not attached to this host", self.id);
        host.set_camera(None);
        self.host = None;
        log::debug!("{:?} detached", self.id);
        self.commit(ParameterChange::Viewport);
    }

    /// Set the orbit origin.
    pub fn set_origin(&mut self, origin: DVec3) -> Result<(), RigError> {
        self.params.set_origin(origin)?;
        self.commit(ParameterChange::Origin);
        Ok(())
    }

    /// Set the distance from the origin.
    pub fn set_distance(&mut self, distance: f64) -> Result<(), RigError> {
        self.params.set_distance(distance)?;
        self.commit(ParameterChange::Distance);
        Ok(())
    }

    /// Set the vertical field of view in radians.
    pub fn set_field_of_view(&mut self, fov: f64) -> Result<(), RigError> {
        self.params.set_field_of_view(fov)?;
        self.commit(ParameterChange::FieldOfView);
        Ok(())
    }

    /// Write an axis-angle rotation into the active representation.
    pub fn set_axis_angle(&mut self, rotation: AxisAngle) -> Result<(), RigError> {
        self.params.set_axis_angle(rotation)?;
        self.commit(ParameterChange::Rotation);
        Ok(())
    }

    /// Write a turntable rotation into the active representation.
    pub fn set_turntable(&mut self, rotation: Turntable) -> Result<(), RigError> {
        self.params.set_turntable(rotation)?;
        self.commit(ParameterChange::Rotation);
        Ok(())
    }

    /// Convert the stored rotation to `mode`. Returns `false` if it
    /// already was.
    pub(crate) fn set_rotation_mode(&mut self, mode: RotationMode) -> bool {
        if !self.params.set_rotation_mode(mode) {
            return false;
        }
        log::debug!("{:?} rotation mode -> {mode:?}", self.id);
        self.commit(ParameterChange::RotationMode);
        true
    }

    /// Replace the projection.
    pub fn set_projection(&mut self, projection: Projection) -> Result<(), RigError> {
        projection.validate()?;
        if !projection.is_perspective() {
            log::warn!(
                "{:?}: orthographic projection is not supported, projection stage disabled",
                self.id
            );
        }
        self.projection = projection;
        self.commit(ParameterChange::Projection);
        Ok(())
    }

    /// Store a handler's result.
    pub fn apply(&mut self, update: ParameterUpdate) -> Result<(), RigError> {
        match update {
            ParameterUpdate::Origin(origin) => self.set_origin(origin),
            ParameterUpdate::Distance(distance) => self.set_distance(distance),
            ParameterUpdate::AxisAngle(rotation) => self.set_axis_angle(rotation),
            ParameterUpdate::Turntable(rotation) => self.set_turntable(rotation),
        }
    }

    /// Re-read the host viewport after the host resized.
    pub fn viewport_changed(&mut self) {
        self.commit(ParameterChange::Viewport);
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: ChangeListener) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Remove a change listener. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Frame `bounds` in view.
    ///
    /// Clip planes are always updated right away. With a zero `duration`
    /// origin and distance are written too and the outcome is
    /// [`FitOutcome::Applied`]; otherwise they are left untouched and the
    /// outcome carries the transition for an animation scheduler to play.
    /// Non-perspective cameras are left alone.
    ///
    /// The whole result is checked before anything is stored, so an error
    /// leaves the rig exactly as it was.
    pub fn fit(&mut self, bounds: &Bounds3, duration: Duration) -> Result<FitOutcome, RigError> {
        if !self.projection.is_perspective() {
            log::warn!("{:?}: fit needs a perspective camera", self.id);
            return Ok(FitOutcome::Unsupported);
        }
        let solution = fit::solve(
            bounds,
            self.params.field_of_view(),
            &self.options.camera.fit_settings(),
        )?;
        log::debug!(
            "{:?} fit {bounds:?} -> origin {}, distance {}",
            self.id,
            solution.frame.origin,
            solution.frame.distance
        );

        let from = FitFrame {
            origin: self.params.origin(),
            distance: self.params.distance(),
        };
        let mut target = self.params.clone();
        target.set_origin(solution.frame.origin)?;
        target.set_distance(solution.frame.distance)?;

        self.projection = Projection::Perspective(solution.clip);
        self.commit(ParameterChange::Projection);
        if duration.is_zero() {
            self.params = target;
            self.commit(ParameterChange::Origin);
            self.commit(ParameterChange::Distance);
            return Ok(FitOutcome::Applied(solution.frame));
        }
        Ok(FitOutcome::Animate(FitTransition {
            from,
            to: solution.frame,
            duration,
        }))
    }

    /// [`fit`](Self::fit) over the configured
    /// [`fit_duration`](crate::options::CameraOptions::fit_duration).
    pub fn fit_default(&mut self, bounds: &Bounds3) -> Result<FitOutcome, RigError> {
        let duration = self.options.camera.fit_duration();
        self.fit(bounds, duration)
    }

    /// [`fit`](Self::fit), handing an animated transition to `scheduler`.
    pub fn fit_with(
        &mut self,
        bounds: &Bounds3,
        duration: Duration,
        scheduler: &dyn AnimationScheduler,
    ) -> Result<FitOutcome, RigError> {
        let outcome = self.fit(bounds, duration)?;
        if let FitOutcome::Animate(transition) = outcome {
            scheduler.animate(transition);
        }
        Ok(outcome)
    }
}

impl std::fmt::Debug for RigCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RigCore")
            .field("id", &self.id)
            .field("params", &self.params)
            .field("projection", &self.projection)
            .field("attached", &self.host.is_some())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
