use serde::{Deserialize, Serialize};

/// Kind of gesture a behavior responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Pointer drag.
    Drag,
    /// Scroll wheel or trackpad scroll.
    Scroll,
}

/// What a gesture does to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Move the orbit origin.
    Pan,
    /// Change the distance from the origin.
    Zoom,
    /// Change the orientation.
    Rotate,
}

/// Binding of an input kind to a response kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationBehavior {
    /// Triggering gesture.
    pub input: InputKind,
    /// Effect on the camera.
    pub response: ResponseKind,
}

impl NavigationBehavior {
    /// Pair an input with a response.
    #[must_use]
    pub const fn new(input: InputKind, response: ResponseKind) -> Self {
        Self { input, response }
    }

    /// Whether `other` is triggered by the same input conditions.
    ///
    /// The response is deliberately not compared: a registry holds at most
    /// one behavior per input kind, and adding a behavior replaces whatever
    /// was bound to its input.
    #[must_use]
    pub fn input_conditions_match(&self, other: &Self) -> bool {
        self.input == other.input
    }

    /// Drag to rotate.
    pub const DRAG_ROTATE: Self = Self::new(InputKind::Drag, ResponseKind::Rotate);
    /// Drag to pan.
    pub const DRAG_PAN: Self = Self::new(InputKind::Drag, ResponseKind::Pan);
    /// Drag to zoom.
    pub const DRAG_ZOOM: Self = Self::new(InputKind::Drag, ResponseKind::Zoom);
    /// Scroll to zoom.
    pub const SCROLL_ZOOM: Self = Self::new(InputKind::Scroll, ResponseKind::Zoom);
}
