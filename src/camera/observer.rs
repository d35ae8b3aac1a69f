//! Change listeners.
//!
//! Listeners run after a write has been validated, stored and the matrices
//! recomputed. They only ever see shared references, so a listener cannot
//! write back into the rig and start another recompute pass.

use super::parameters::{CameraParameters, ParameterChange};
use super::transform::Transforms;

/// Callback invoked after every committed parameter write.
pub type ChangeListener =
    Box<dyn FnMut(ParameterChange, &CameraParameters, &Transforms)>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered set of listeners.
#[derive(Default)]
pub(crate) struct Listeners {
    next: u64,
    entries: Vec<(SubscriptionId, ChangeListener)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: ChangeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(
        &mut self,
        change: ParameterChange,
        params: &CameraParameters,
        transforms: &Transforms,
    ) {
        for (_, listener) in &mut self.entries {
            listener(change, params, transforms);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
