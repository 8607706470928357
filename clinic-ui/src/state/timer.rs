//! Component-owned timeouts
//!
//! A [`TimerSlot`] holds at most one pending timeout. Scheduling a new one
//! cancels the old one, and the pending timeout is cancelled when the owning
//! component unmounts.

use gloo_timers::callback::Timeout;
use leptos::*;

#[derive(Clone, Copy)]
pub struct TimerSlot(StoredValue<Option<Timeout>>);

impl TimerSlot {
    /// Create a slot tied to the current component
    pub fn new() -> Self {
        let slot = store_value(None::<Timeout>);
        on_cleanup(move || {
            slot.try_update_value(|pending| {
                pending.take();
            });
        });
        Self(slot)
    }

    /// Run `f` after `ms`, replacing anything already pending
    pub fn schedule(&self, ms: u32, f: impl FnOnce() + 'static) {
        self.0.try_update_value(|pending| {
            *pending = Some(Timeout::new(ms, f));
        });
    }

    pub fn cancel(&self) {
        self.0.try_update_value(|pending| {
            pending.take();
        });
    }

    pub fn is_pending(&self) -> bool {
        self.0.try_with_value(|pending| pending.is_some()).unwrap_or(false)
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}
