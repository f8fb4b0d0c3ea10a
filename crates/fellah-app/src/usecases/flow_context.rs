use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// Shared flow context: the current state plus the dispatch lock.
///
/// Both orchestrators use one of these to serialize their transitions.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: taken only by `dispatch`, for the whole
///   transition + action execution + emission sequence.
/// - `state`: taken for both reads (`get_state`) and writes.
pub struct FlowContext<S: Clone> {
    state: Mutex<S>,
    dispatch_lock: Mutex<()>,
}

impl<S: Clone> FlowContext<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: Mutex::new(initial),
            dispatch_lock: Mutex::new(()),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Snapshot of the current state. Does NOT take the dispatch lock.
    pub async fn get_state(&self) -> S {
        self.state.lock().await.clone()
    }

    /// Serializes dispatch calls; the guard must be held until the
    /// transition's side effects are committed.
    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    pub async fn set_state(&self, state: S) {
        *self.state.lock().await = state;
    }
}
