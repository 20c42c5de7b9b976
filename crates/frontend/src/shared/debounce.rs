//! Commit-on-quiet helper for editable fields.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Collapses a burst of triggers into a single callback.
///
/// Each `schedule` cancels the previously pending timeout, so only the last
/// scheduled closure runs once the quiet period elapses. The closure carries
/// whatever value it was scheduled with, which makes "last value typed wins"
/// hold by construction. A pending timeout outlives the scheduling view, so
/// a commit is not lost when the owning row re-renders.
#[derive(Clone, Copy)]
pub struct Debouncer {
    timeout_id: StoredValue<Option<i32>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            timeout_id: StoredValue::new(None),
        }
    }

    /// Schedule `callback` to run after `delay_ms` of inactivity, replacing
    /// any still-pending schedule.
    pub fn schedule(&self, delay_ms: i32, callback: impl FnOnce() + 'static) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };

        if let Some(previous) = self.timeout_id.get_value() {
            window.clear_timeout_with_handle(previous);
        }

        let closure = Closure::once(callback);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            delay_ms,
        ) {
            Ok(id) => {
                // The browser owns the callback from here on.
                closure.forget();
                self.timeout_id.set_value(Some(id));
            }
            Err(e) => {
                log::error!("setTimeout failed: {:?}", e);
            }
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
