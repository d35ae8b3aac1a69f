//! Interaction engine: gesture handlers and the behavior registry that
//! selects between them.

/// Input and response kinds a behavior pairs up.
pub mod behavior;
/// Pure gesture handlers and the parameter updates they produce.
pub mod handlers;
/// Behavior table that owns host bindings and dispatches gestures.
pub mod registry;

pub use behavior::{InputKind, NavigationBehavior, ResponseKind};
pub use handlers::{Interaction, InteractionContext, ParameterUpdate};
pub use registry::{Binding, NavigationRegistry};
