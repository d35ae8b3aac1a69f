//! Input handling: pointer event types and the tracker that converts raw
//! window events into rig gestures.

/// Platform-agnostic pointer and gesture events.
pub mod event;
/// Converts raw pointer events into gestures.
pub mod tracker;

pub use event::{GestureEvent, MouseButton, PointerEvent};
pub use tracker::GestureTracker;
