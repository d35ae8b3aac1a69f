//! Navigation behavior registry.
//!
//! Maps each registered [`NavigationBehavior`] to the handler instance that
//! serves it. Keys match on input kind alone, so the registry never holds
//! more than one binding per input kind.

use super::behavior::{InputKind, NavigationBehavior, ResponseKind};
use super::handlers::{Interaction, InteractionContext, ParameterUpdate};
use crate::camera::parameters::{CameraParameters, RotationMode};
use crate::error::RigError;
use crate::host::{BindingId, SharedHost};
use crate::input::GestureEvent;

/// One registered behavior and its live handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    id: BindingId,
    behavior: NavigationBehavior,
    interaction: Interaction,
}

impl Binding {
    fn new(behavior: NavigationBehavior, interaction: Interaction) -> Self {
        Self {
            id: BindingId::next(),
            behavior,
            interaction,
        }
    }

    /// Handler identity as known to the host.
    #[must_use]
    pub const fn id(&self) -> BindingId {
        self.id
    }

    /// Registry key.
    #[must_use]
    pub const fn behavior(&self) -> NavigationBehavior {
        self.behavior
    }

    /// Handler serving the key.
    #[must_use]
    pub const fn interaction(&self) -> Interaction {
        self.interaction
    }
}

/// Behavior → handler table.
#[derive(Debug, Clone, Default)]
pub struct NavigationRegistry {
    bindings: Vec<Binding>,
}

impl NavigationRegistry {
    /// Empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Register `behavior`, replacing whatever was bound to its input kind.
    ///
    /// The new handler is built for `mode` and attached to `host` if one is
    /// given. Behaviors without a handler (scroll to pan, scroll to rotate)
    /// are rejected before anything is removed.
    pub fn add(
        &mut self,
        behavior: NavigationBehavior,
        mode: RotationMode,
        host: Option<&SharedHost>,
    ) -> Result<BindingId, RigError> {
        let interaction = Interaction::for_behavior(behavior, mode)
            .ok_or(RigError::UnsupportedBehavior(behavior))?;
        while let Some(replaced) = self.remove(behavior, host) {
            log::debug!("{replaced:?} replaced by {behavior:?}");
        }

        let binding = Binding::new(behavior, interaction);
        if let Some(host) = host {
            host.attach_interaction(binding.id, behavior.input);
        }
        log::debug!("added {behavior:?} as {interaction:?}");
        self.bindings.push(binding);
        Ok(binding.id)
    }

    /// Remove the first binding whose input matches `behavior`, detaching
    /// it from `host`. Returns the key that was removed.
    pub fn remove(
        &mut self,
        behavior: NavigationBehavior,
        host: Option<&SharedHost>,
    ) -> Option<NavigationBehavior> {
        let index = self
            .bindings
            .iter()
            .position(|b| b.behavior.input_conditions_match(&behavior))?;
        let binding = self.bindings.remove(index);
        if let Some(host) = host {
            host.detach_interaction(binding.id, binding.behavior.input);
        }
        log::debug!("removed {:?}", binding.behavior);
        Some(binding.behavior)
    }

    /// Detach and remove every binding.
    pub fn clear(&mut self, host: Option<&SharedHost>) {
        if let Some(host) = host {
            self.detach_all(host);
        }
        self.bindings.clear();
    }

    /// Registered keys in insertion order.
    pub fn behaviors(&self) -> impl Iterator<Item = NavigationBehavior> + '_ {
        self.bindings.iter().map(|b| b.behavior)
    }

    /// Binding serving `input`, if any.
    #[must_use]
    pub fn binding_for(&self, input: InputKind) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.behavior.input == input)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Attach every handler to `host`.
    pub fn attach_all(&self, host: &SharedHost) {
        for b in &self.bindings {
            host.attach_interaction(b.id, b.behavior.input);
        }
    }

    /// Detach every handler from `host`.
    pub fn detach_all(&self, host: &SharedHost) {
        for b in &self.bindings {
            host.detach_interaction(b.id, b.behavior.input);
        }
    }

    /// Rebuild every rotate handler for `mode`. Returns how many changed.
    ///
    /// Runs in two phases: the bindings that need a new handler are
    /// collected first, then each is replaced in place and swapped on the
    /// host in one call, so the host never sees a rotate input with zero or
    /// two handlers. The key set is untouched.
    pub fn set_rotation_mode(&mut self, mode: RotationMode, host: Option<&SharedHost>) -> usize {
        let stale: Vec<usize> = self
            .bindings
            .iter()
            .enumerate()
            .filter(|(_, b)| {
                b.behavior.response == ResponseKind::Rotate
                    && Interaction::for_behavior(b.behavior, mode) != Some(b.interaction)
            })
            .map(|(index, _)| index)
            .collect();

        for &index in &stale {
            let old = self.bindings[index];
            let Some(interaction) = Interaction::for_behavior(old.behavior, mode) else {
                continue;
            };
            let fresh = Binding::new(old.behavior, interaction);
            if let Some(host) = host {
                host.swap_interaction(old.behavior.input, old.id, fresh.id);
            }
            log::debug!(
                "swapped {:?} handler {:?} -> {:?}",
                old.behavior,
                old.interaction,
                interaction
            );
            self.bindings[index] = fresh;
        }
        stale.len()
    }

    /// Route a gesture to the handler bound to its input kind.
    #[must_use]
    pub fn dispatch(
        &self,
        params: &CameraParameters,
        gesture: &GestureEvent,
        ctx: &InteractionContext<'_>,
    ) -> Option<ParameterUpdate> {
        self.binding_for(gesture.input_kind())?
            .interaction
            .apply(params, gesture, ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::host::HeadlessHost;

    fn host() -> (Rc<HeadlessHost>, SharedHost) {
        let headless = Rc::new(HeadlessHost::new(640.0, 480.0));
        let shared: SharedHost = headless.clone();
        (headless, shared)
    }

    #[test]
    fn same_input_replaces_binding() {
        let (headless, shared) = host();
        let mut registry = NavigationRegistry::new();
        let _ = registry
            .add(NavigationBehavior::DRAG_ROTATE, RotationMode::Arcball, Some(&shared))
            .unwrap();
        let pan = registry
            .add(NavigationBehavior::DRAG_PAN, RotationMode::Arcball, Some(&shared))
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.behaviors().collect::<Vec<_>>(),
            vec![NavigationBehavior::DRAG_PAN]
        );
        assert_eq!(headless.interactions_for(InputKind::Drag), vec![pan]);
    }

    #[test]
    fn unsupported_scroll_behaviors_are_rejected() {
        let mut registry = NavigationRegistry::new();
        let _ = registry
            .add(NavigationBehavior::SCROLL_ZOOM, RotationMode::Arcball, None)
            .unwrap();
        for response in [ResponseKind::Pan, ResponseKind::Rotate] {
            let behavior = NavigationBehavior::new(InputKind::Scroll, response);
            assert!(matches!(
                registry.add(behavior, RotationMode::Arcball, None),
                Err(RigError::UnsupportedBehavior(b)) if b == behavior
            ));
        }
        // The existing scroll binding survives a rejected add.
        assert_eq!(
            registry.behaviors().collect::<Vec<_>>(),
            vec![NavigationBehavior::SCROLL_ZOOM]
        );
    }

    #[test]
    fn remove_matches_on_input() {
        let (headless, shared) = host();
        let mut registry = NavigationRegistry::new();
        let _ = registry
            .add(NavigationBehavior::DRAG_ZOOM, RotationMode::Turntable, Some(&shared))
            .unwrap();
        let _ = registry
            .add(NavigationBehavior::SCROLL_ZOOM, RotationMode::Turntable, Some(&shared))
            .unwrap();

        let removed = registry.remove(NavigationBehavior::DRAG_ROTATE, Some(&shared));
        assert_eq!(removed, Some(NavigationBehavior::DRAG_ZOOM));
        assert_eq!(registry.remove(NavigationBehavior::DRAG_ROTATE, Some(&shared)), None);
        assert_eq!(headless.interaction_count(), 1);

        registry.clear(Some(&shared));
        assert!(registry.is_empty());
        assert_eq!(headless.interaction_count(), 0);
    }

    #[test]
    fn mode_switch_swaps_rotate_handler_in_place() {
        let (headless, shared) = host();
        let mut registry = NavigationRegistry::new();
        let old = registry
            .add(NavigationBehavior::DRAG_ROTATE, RotationMode::Turntable, Some(&shared))
            .unwrap();
        let _ = registry
            .add(NavigationBehavior::SCROLL_ZOOM, RotationMode::Turntable, Some(&shared))
            .unwrap();

        assert_eq!(registry.set_rotation_mode(RotationMode::Arcball, Some(&shared)), 1);
        let binding = *registry.binding_for(InputKind::Drag).unwrap();
        assert_eq!(binding.interaction(), Interaction::DragArcball);
        assert_ne!(binding.id(), old);
        assert_eq!(headless.interactions_for(InputKind::Drag), vec![binding.id()]);
        assert_eq!(headless.interaction_count(), 2);

        // Already arcball: nothing to swap.
        assert_eq!(registry.set_rotation_mode(RotationMode::Arcball, Some(&shared)), 0);
    }

    #[test]
    fn dispatch_uses_bound_handler() {
        let mut registry = NavigationRegistry::new();
        let _ = registry
            .add(NavigationBehavior::SCROLL_ZOOM, RotationMode::Turntable, None)
            .unwrap();
        let settings = crate::options::InteractionOptions::default();
        let ctx = InteractionContext {
            viewport: None,
            settings: &settings,
        };
        let params = CameraParameters::default();
        let update = registry.dispatch(&params, &GestureEvent::Scroll { delta: 1.0 }, &ctx);
        assert!(matches!(update, Some(ParameterUpdate::Distance(d)) if d < params.distance()));

        let drag = GestureEvent::DragUpdate {
            position: glam::DVec2::ONE,
            delta: glam::DVec2::ONE,
        };
        assert_eq!(registry.dispatch(&params, &drag, &ctx), None);
    }
}
