//! View state owned by the app.
//!
//! Everything the client remembers between events lives in [`ViewState`]:
//! the active page and admin tab, the load-once flags, the per-container
//! request tokens and the toast on screen. The document itself remains the
//! source of truth for rendered data.
//!
//! ## Components
//!
//! - [`Page`]: Top-level page sections
//! - [`AdminTab`] / [`AdminResource`]: Admin dashboard tabs and their tables
//! - [`Modal`]: Create-form overlays
//! - [`LoadFlags`]: Load-once flags for rarely-changing content
//! - [`RequestTokens`]: Guards against superseded responses
//! - [`ToastState`]: The transient notification

mod admin_tab;
mod load_flags;
mod modal;
mod page;
mod request_tokens;
mod toast;

pub use admin_tab::{AdminResource, AdminTab, UnknownTab};
pub use load_flags::LoadFlags;
pub use modal::{Modal, UnknownModal};
pub use page::{Page, UnknownPage};
pub use request_tokens::{RequestToken, RequestTokens};
pub use toast::{ToastKind, ToastState};

/// Ephemeral client state. Created at startup, never persisted.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub current: Page,
    pub active_tab: AdminTab,
    pub flags: LoadFlags,
    pub tokens: RequestTokens,
    pub toast: Option<ToastState>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let state = ViewState::new();
        assert_eq!(state.current, Page::Home);
        assert_eq!(state.active_tab, AdminTab::Dashboard);
        assert!(state.toast.is_none());
        assert!(!state.flags.tips_loaded());
    }
}
