//! Converts raw pointer events into rig gestures.
//!
//! The `GestureTracker` owns all transient pointer state (cursor position,
//! which button started the current drag, the shift modifier). It is the
//! only thing that sits between raw window events and
//! [`CameraRig::handle_gesture`](crate::rig::CameraRig::handle_gesture).

use glam::DVec2;

use super::event::{GestureEvent, MouseButton, PointerEvent};

/// Button held for the current drag: the physical one, and the one reported
/// to the rig (shift + left reports as right, i.e. pan on the fixed rigs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveDrag {
    physical: MouseButton,
    reported: MouseButton,
}

/// Turns [`PointerEvent`]s into [`GestureEvent`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(gesture) = tracker.handle_event(event) {
///     rig.handle_gesture(&gesture)?;
/// }
/// ```
#[derive(Debug, Default)]
pub struct GestureTracker {
    /// Last known cursor position in surface pixels.
    position: DVec2,
    /// Drag in progress, if any.
    drag: Option<ActiveDrag>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
}

impl GestureTracker {
    /// Create a tracker with no drag in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position in surface pixels.
    #[must_use]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// End any drag without waiting for the button release, e.g. when the
    /// window loses focus mid-drag.
    pub fn release(&mut self) -> Option<GestureEvent> {
        self.drag
            .take()
            .map(|drag| GestureEvent::DragEnd {
                button: drag.reported,
            })
    }

    /// Process a raw pointer event and return zero or one gestures.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<GestureEvent> {
        match event {
            PointerEvent::Moved { x, y } => self.handle_moved(DVec2::new(x, y)),
            PointerEvent::Button { button, pressed } => {
                self.handle_button(button, pressed)
            }
            PointerEvent::Scroll { delta } => Some(GestureEvent::Scroll { delta }),
            PointerEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    fn handle_moved(&mut self, position: DVec2) -> Option<GestureEvent> {
        let delta = position - self.position;
        self.position = position;
        if self.drag.is_none() || delta == DVec2::ZERO {
            return None;
        }
        Some(GestureEvent::DragUpdate { position, delta })
    }

    fn handle_button(&mut self, button: MouseButton, pressed: bool) -> Option<GestureEvent> {
        if pressed {
            // Chorded presses during a drag are ignored.
            if self.drag.is_some() {
                return None;
            }
            let reported = if self.shift_pressed && button == MouseButton::Left {
                MouseButton::Right
            } else {
                button
            };
            self.drag = Some(ActiveDrag {
                physical: button,
                reported,
            });
            return Some(GestureEvent::DragStart {
                position: self.position,
                button: reported,
            });
        }

        match self.drag {
            Some(drag) if drag.physical == button => self.release(),
            _ => None,
        }
    }
}
