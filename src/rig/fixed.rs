//! Fixed button-to-handler tables used by the arcball and turntable rigs.

use crate::host::{BindingId, SharedHost};
use crate::input::{GestureEvent, MouseButton};
use crate::interaction::{InputKind, Interaction, ParameterUpdate};

use super::core::RigCore;

/// One drag handler per button plus scroll-zoom.
///
/// The host sees a single drag binding and a single scroll binding; the
/// button that started a drag picks the handler until the drag ends.
#[derive(Debug)]
pub(crate) struct FixedBindings {
    drag: BindingId,
    scroll: BindingId,
    buttons: &'static [(MouseButton, Interaction)],
    active: Option<Interaction>,
}

impl FixedBindings {
    pub(crate) fn new(buttons: &'static [(MouseButton, Interaction)]) -> Self {
        Self {
            drag: BindingId::next(),
            scroll: BindingId::next(),
            buttons,
            active: None,
        }
    }

    pub(crate) fn attach(&self, host: &SharedHost) {
        host.attach_interaction(self.drag, InputKind::Drag);
        host.attach_interaction(self.scroll, InputKind::Scroll);
    }

    pub(crate) fn detach(&self, host: &SharedHost) {
        host.detach_interaction(self.drag, InputKind::Drag);
        host.detach_interaction(self.scroll, InputKind::Scroll);
    }

    pub(crate) fn handler_for(&self, button: MouseButton) -> Option<Interaction> {
        self.buttons
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, interaction)| *interaction)
    }

    pub(crate) fn interpret(
        &mut self,
        core: &RigCore,
        gesture: &GestureEvent,
    ) -> Option<ParameterUpdate> {
        let interaction = match *gesture {
            GestureEvent::DragStart { button, .. } => {
                self.active = self.handler_for(button);
                return None;
            }
            GestureEvent::DragEnd { .. } => {
                self.active = None;
                return None;
            }
            GestureEvent::DragUpdate { .. } => self.active?,
            GestureEvent::Scroll { .. } => Interaction::ScrollZoom,
        };
        interaction.apply(core.parameters(), gesture, &core.interaction_context())
    }
}
