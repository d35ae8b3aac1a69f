//! The rendering surface a rig attaches to.
//!
//! The host owns the viewport and the gesture source. A rig reads the
//! viewport size for projection math, installs itself as the host's active
//! camera, and registers one interaction per bound input kind so the host
//! knows which gestures to forward to [`CameraRig::handle_gesture`].
//!
//! Hosts are shared as `Rc<dyn InteractionHost>` and take `&self`; a host
//! keeps its mutable state behind `Cell`/`RefCell`. Everything runs on one
//! thread.
//!
//! [`CameraRig::handle_gesture`]: crate::rig::CameraRig::handle_gesture

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::DVec2;

use crate::interaction::InputKind;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Identity of a camera rig, handed to the host as its active camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RigId(u64);

impl RigId {
    pub(crate) fn next() -> Self {
        Self(next_id())
    }
}

/// Identity of one interaction handler instance.
///
/// A fresh id is issued whenever a handler is created, including when the
/// rotate handler is swapped on a rotation-mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

impl BindingId {
    pub(crate) fn next() -> Self {
        Self(next_id())
    }
}

/// Pixel rectangle the scene is rasterized into.
///
/// `x`/`y` place a nested viewport inside its parent surface; raster
/// coordinates produced by the scene-to-raster transform and pointer
/// positions fed to the rig are both in parent-surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge within the parent surface.
    pub x: f64,
    /// Top edge within the parent surface.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// A top-level viewport of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// A viewport nested at `(x, y)` inside a parent surface.
    #[must_use]
    pub const fn with_offset(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width / height, or 1 for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        if self.is_empty() {
            1.0
        } else {
            self.width / self.height
        }
    }

    /// True when either dimension is not positive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Center in parent-surface pixels.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Surface a rig can attach to.
pub trait InteractionHost {
    /// Current viewport in pixels.
    fn viewport(&self) -> Viewport;

    /// Install (`Some`) or clear (`None`) the active camera.
    fn set_camera(&self, camera: Option<RigId>);

    /// Start forwarding gestures of `input` kind to the handler `binding`.
    fn attach_interaction(&self, binding: BindingId, input: InputKind);

    /// Stop forwarding gestures to `binding`.
    fn detach_interaction(&self, binding: BindingId, input: InputKind);

    /// Replace `old` with `new` for `input` in one step.
    ///
    /// Hosts that track handlers per input kind can override this to make
    /// the exchange a single state transition.
    fn swap_interaction(&self, input: InputKind, old: BindingId, new: BindingId) {
        self.detach_interaction(old, input);
        self.attach_interaction(new, input);
    }
}

/// Shared handle to a host.
pub type SharedHost = Rc<dyn InteractionHost>;

/// In-memory host with a fixed-size viewport and no real event source.
///
/// Useful for offscreen rendering and for driving a rig from scripted
/// gestures. Records which camera and interactions are installed.
#[derive(Debug)]
pub struct HeadlessHost {
    viewport: Cell<Viewport>,
    camera: Cell<Option<RigId>>,
    interactions: RefCell<Vec<(BindingId, InputKind)>>,
}

impl HeadlessHost {
    /// Create a host with a top-level viewport of the given size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_viewport(Viewport::new(width, height))
    }

    /// Create a host with an explicit viewport.
    #[must_use]
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport: Cell::new(viewport),
            camera: Cell::new(None),
            interactions: RefCell::new(Vec::new()),
        }
    }

    /// Change the viewport. Attached rigs pick it up on their next
    /// recompute (see [`CameraRig::viewport_changed`]).
    ///
    /// [`CameraRig::viewport_changed`]: crate::rig::CameraRig::viewport_changed
    pub fn resize(&self, viewport: Viewport) {
        self.viewport.set(viewport);
    }

    /// Currently installed camera.
    #[must_use]
    pub fn camera(&self) -> Option<RigId> {
        self.camera.get()
    }

    /// Handlers currently attached for `input`.
    #[must_use]
    pub fn interactions_for(&self, input: InputKind) -> Vec<BindingId> {
        self.interactions
            .borrow()
            .iter()
            .filter(|(_, kind)| *kind == input)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Total number of attached handlers.
    #[must_use]
    pub fn interaction_count(&self) -> usize {
        self.interactions.borrow().len()
    }
}

impl InteractionHost for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn set_camera(&self, camera: Option<RigId>) {
        self.camera.set(camera);
    }

    fn attach_interaction(&self, binding: BindingId, input: InputKind) {
        self.interactions.borrow_mut().push((binding, input));
    }

    fn detach_interaction(&self, binding: BindingId, _input: InputKind) {
        self.interactions.borrow_mut().retain(|(id, _)| *id != binding);
    }

    fn swap_interaction(&self, _input: InputKind, old: BindingId, new: BindingId) {
        for entry in self.interactions.borrow_mut().iter_mut() {
            if entry.0 == old {
                entry.0 = new;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_aspect_and_center() {
        let vp = Viewport::with_offset(10.0, 20.0, 800.0, 400.0);
        assert_eq!(vp.aspect(), 2.0);
        assert_eq!(vp.center(), DVec2::new(410.0, 220.0));
        assert!(!vp.is_empty());
        assert!(Viewport::new(0.0, 100.0).is_empty());
        assert_eq!(Viewport::new(0.0, 0.0).aspect(), 1.0);
    }

    #[test]
    fn headless_swap_keeps_count() {
        let host = HeadlessHost::new(100.0, 100.0);
        let a = BindingId::next();
        let b = BindingId::next();
        host.attach_interaction(a, InputKind::Drag);
        host.swap_interaction(InputKind::Drag, a, b);
        assert_eq!(host.interactions_for(InputKind::Drag), vec![b]);
        host.detach_interaction(b, InputKind::Drag);
        assert_eq!(host.interaction_count(), 0);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(RigId::next(), RigId::next());
        assert_ne!(BindingId::next(), BindingId::next());
    }
}
