//! Shared-state seam for the async flows.
//!
//! Loading and transfers mutate state across an `.await`. In the app the
//! state lives in a Leptos signal, in tests in an `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

/// Mutable state reachable from an async task.
///
/// Returns `None` when the state is gone (e.g. a disposed signal) or already
/// borrowed.
pub trait StateCell<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}
