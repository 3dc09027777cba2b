//! Toast lifecycle.

use std::time::Instant;

use tracing::debug;

use super::App;
use crate::bindings::Binding;
use crate::view_state::{ToastKind, ToastState};

impl App {
    /// Show a toast, replacing whatever is on screen.
    pub fn show_toast(&self, message: &str, kind: ToastKind) {
        let toast = self.id(Binding::Toast);
        self.document.set_text(toast, message);
        self.document
            .set_class_name(toast, &format!("toast show {}", kind));
        debug!("Toast ({}): {}", kind, message);

        self.state().toast = Some(ToastState::new(message, kind, Instant::now()));
    }

    /// Hide the toast once it has been on screen for the configured
    /// duration. Returns whether it was hidden by this call.
    pub fn tick(&self, now: Instant) -> bool {
        let duration = self.config.toast_duration;
        let expired = {
            let mut state = self.state();
            let expired = state
                .toast
                .as_ref()
                .map_or(false, |toast| toast.is_expired(now, duration));
            if expired {
                state.toast = None;
            }
            expired
        };
        if expired {
            self.document.remove_class(self.id(Binding::Toast), "show");
        }
        expired
    }
}
