//! Camera rigs.
//!
//! A rig drives one perspective camera from pointer gestures. All variants
//! share a [`RigCore`] and differ only in how gestures pick a handler:
//!
//! - [`ArcballRig`]: fixed buttons, free rotation
//! - [`TurntableRig`]: fixed buttons, yaw/pitch rotation
//! - [`OrbitalRig`]: a [`NavigationRegistry`](crate::interaction::NavigationRegistry)
//!   of behaviors and a switchable rotation mode
//!
//! # Example
//!
//! ```ignore
//! let host: SharedHost = Rc::new(HeadlessHost::new(1280.0, 720.0));
//! let mut rig = OrbitalRig::new(RigOptions::default())?;
//! rig.attach(Rc::clone(&host));
//! rig.handle_gesture(&GestureEvent::Scroll { delta: 3.0 })?;
//! let s2r = rig.transforms().scene_to_raster();
//! ```

mod arcball;
mod core;
mod fixed;
mod orbital;
mod turntable;

use std::time::Duration;

use glam::DVec3;

pub use self::arcball::ArcballRig;
pub use self::core::RigCore;
pub use self::orbital::OrbitalRig;
pub use self::turntable::TurntableRig;
use crate::camera::fit::{AnimationScheduler, FitOutcome};
use crate::camera::observer::{ChangeListener, SubscriptionId};
use crate::camera::parameters::{CameraParameters, RotationMode};
use crate::camera::projection::Projection;
use crate::camera::transform::Transforms;
use crate::error::RigError;
use crate::host::{RigId, SharedHost};
use crate::input::GestureEvent;
use crate::math::Bounds3;

pub(crate) mod sealed {
    use super::RigCore;
    use crate::host::SharedHost;
    use crate::input::GestureEvent;
    use crate::interaction::ParameterUpdate;

    /// Plumbing each rig variant provides to [`CameraRig`](super::CameraRig).
    ///
    /// Not nameable outside the crate, so writes can only reach a rig
    /// through the validated public methods.
    #[allow(unreachable_pub)]
    pub trait RigInternals {
        /// Shared state, mutably.
        fn core_mut(&mut self) -> &mut RigCore;

        /// Register this rig's handlers with `host`.
        fn attach_interactions(&self, host: &SharedHost);

        /// Unregister this rig's handlers from `host`.
        fn detach_interactions(&self, host: &SharedHost);

        /// Pick the handler for `gesture` and compute its result, or
        /// `None` when the gesture has no effect.
        fn interpret(&mut self, gesture: &GestureEvent) -> Option<ParameterUpdate>;
    }
}

/// Common interface of the rig variants.
///
/// Implemented by [`ArcballRig`], [`TurntableRig`] and [`OrbitalRig`] only.
/// The shared state is read-only from outside the crate:
///
/// ```compile_fail
/// use orbitrig::options::RigOptions;
/// use orbitrig::{CameraRig, OrbitalRig};
///
/// let mut rig = OrbitalRig::new(RigOptions::default()).unwrap();
/// let _ = rig.core_mut();
/// ```
pub trait CameraRig: sealed::RigInternals {
    /// Shared state.
    fn core(&self) -> &RigCore;

    /// Attach to `host`: install as its camera, register handlers and
    /// recompute for its viewport.
    ///
    /// # Panics
    ///
    /// If the rig is already attached.
    fn attach(&mut self, host: SharedHost) {
        self.core_mut().attach_host(SharedHost::clone(&host));
        self.attach_interactions(&host);
    }

    /// Detach from `host`. Afterwards scene-to-raster ends in normalized
    /// device coordinates.
    ///
    /// # Panics
    ///
    /// If the rig is not attached to `host`.
    fn detach(&mut self, host: &SharedHost) {
        self.core_mut().detach_host(host);
        self.detach_interactions(host);
    }

    /// True while attached to a host.
    fn is_attached(&self) -> bool {
        self.core().host().is_some()
    }

    /// Feed one gesture. Returns whether a parameter changed.
    fn handle_gesture(&mut self, gesture: &GestureEvent) -> Result<bool, RigError> {
        match self.interpret(gesture) {
            Some(update) => {
                self.core_mut().apply(update)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Identity installed on the host.
    fn id(&self) -> RigId {
        self.core().id()
    }

    /// Current parameters.
    fn parameters(&self) -> &CameraParameters {
        self.core().parameters()
    }

    /// Current matrices.
    fn transforms(&self) -> &Transforms {
        self.core().transforms()
    }

    /// Current projection.
    fn projection(&self) -> &Projection {
        self.core().projection()
    }

    /// Active rotation representation.
    fn rotation_mode(&self) -> RotationMode {
        self.core().parameters().rotation_mode()
    }

    /// Set the orbit origin.
    fn set_origin(&mut self, origin: DVec3) -> Result<(), RigError> {
        self.core_mut().set_origin(origin)
    }

    /// Set the distance from the origin. Rejects non-positive values.
    fn set_distance(&mut self, distance: f64) -> Result<(), RigError> {
        self.core_mut().set_distance(distance)
    }

    /// Set the vertical field of view in radians.
    fn set_field_of_view(&mut self, fov: f64) -> Result<(), RigError> {
        self.core_mut().set_field_of_view(fov)
    }

    /// Replace the projection. Rejects orthographic heights that are not
    /// positive and finite.
    fn set_projection(&mut self, projection: Projection) -> Result<(), RigError> {
        self.core_mut().set_projection(projection)
    }

    /// Frame `bounds`. See [`RigCore::fit`].
    fn fit(&mut self, bounds: &Bounds3, duration: Duration) -> Result<FitOutcome, RigError> {
        self.core_mut().fit(bounds, duration)
    }

    /// Frame `bounds` over the configured fit duration. See
    /// [`RigCore::fit_default`].
    fn fit_default(&mut self, bounds: &Bounds3) -> Result<FitOutcome, RigError> {
        self.core_mut().fit_default(bounds)
    }

    /// Frame `bounds`, handing animated transitions to `scheduler`.
    fn fit_with(
        &mut self,
        bounds: &Bounds3,
        duration: Duration,
        scheduler: &dyn AnimationScheduler,
    ) -> Result<FitOutcome, RigError> {
        self.core_mut().fit_with(bounds, duration, scheduler)
    }

    /// Recompute after the host's viewport changed.
    fn viewport_changed(&mut self) {
        self.core_mut().viewport_changed();
    }

    /// Register a listener for committed writes.
    fn subscribe(&mut self, listener: ChangeListener) -> SubscriptionId {
        self.core_mut().subscribe(listener)
    }

    /// Remove a listener.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.core_mut().unsubscribe(id)
    }
}
