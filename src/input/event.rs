use glam::DVec2;

use crate::interaction::InputKind;

/// Platform-agnostic pointer events.
///
/// These are fed into a [`GestureTracker`](super::GestureTracker) which
/// turns them into [`GestureEvent`]s for a rig.
///
/// # Example
///
/// ```ignore
/// if let Some(gesture) = tracker.handle_event(PointerEvent::Moved { x: 100.0, y: 200.0 }) {
///     rig.handle_gesture(&gesture)?;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Cursor moved to absolute surface position.
    Moved {
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels.
        y: f64,
    },
    /// Mouse button pressed or released.
    Button {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in wheel units.
        delta: f64,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Gesture delivered to a rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A drag began.
    DragStart {
        /// Pointer position in surface pixels.
        position: DVec2,
        /// Button that started the drag.
        button: MouseButton,
    },
    /// The pointer moved during a drag.
    DragUpdate {
        /// Current pointer position in surface pixels.
        position: DVec2,
        /// Movement since the previous drag event, in pixels.
        delta: DVec2,
    },
    /// The drag ended.
    DragEnd {
        /// Button that was released.
        button: MouseButton,
    },
    /// Scroll (positive = zoom in).
    Scroll {
        /// Scroll amount in wheel units.
        delta: f64,
    },
}

impl GestureEvent {
    /// The input kind that routes this gesture.
    #[must_use]
    pub const fn input_kind(&self) -> InputKind {
        match self {
            Self::DragStart { .. } | Self::DragUpdate { .. } | Self::DragEnd { .. } => {
                InputKind::Drag
            }
            Self::Scroll { .. } => InputKind::Scroll,
        }
    }
}
