//! Global Application State
//!
//! Services and toast messages shared by all components through Leptos
//! context.

use gloo_timers::callback::Timeout;
use leptos::*;
use std::rc::Rc;

use crate::notifications::NotificationHelper;
use crate::platform::WebPlatform;
use crate::store::{browser_store, EntryStore};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Entry persistence
    pub store: Rc<dyn EntryStore>,
    /// Browser capabilities
    pub platform: Rc<WebPlatform>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    error_timer: StoredValue<TimerSlot<Timeout>>,
    success_timer: StoredValue<TimerSlot<Timeout>>,
}

/// Holds the one pending clear timer of a toast. Arming a new timer drops
/// the previous one, and dropping a `Timeout` cancels it.
pub struct TimerSlot<H> {
    pending: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> TimerSlot<H> {
    pub fn arm(&mut self, timer: H) {
        self.pending = Some(timer);
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        store: browser_store(),
        platform: Rc::new(WebPlatform),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        error_timer: store_value(TimerSlot::default()),
        success_timer: store_value(TimerSlot::default()),
    };

    provide_context(state);
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    pub fn notifications(&self) -> NotificationHelper<WebPlatform> {
        NotificationHelper::new(Rc::clone(&self.platform))
    }

    /// Show a success message (auto-clears after timeout, counted from the
    /// latest message)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        let timer = Timeout::new(3000, move || {
            success_signal.set(None);
        });
        self.success_timer.update_value(|slot| slot.arm(timer));
    }

    /// Show an error message (auto-clears after timeout, counted from the
    /// latest message)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        let timer = Timeout::new(5000, move || {
            error_signal.set(None);
        });
        self.error_timer.update_value(|slot| slot.arm(timer));
    }
}
