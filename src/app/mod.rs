//! The client core.
//!
//! [`App`] owns the view state and reaches the outside world only through
//! injected seams: an [`HttpClient`] for the backend, a [`Document`] for the
//! page and a [`Dialog`] for confirmations. Its behaviour is split by concern:
//!
//! - `navigation` - page router and mobile drawer
//! - `pipeline` - loading placeholders, request tokens, table loads
//! - `public` - body-part page, health tips, contact form
//! - `dashboard` - admin tabs, stats, top-bar date
//! - `crud` - create and delete flows
//! - `modal` - create-form overlays and their dropdowns
//! - `session` - startup, login, logout
//! - `body_map` - hover and click on anatomical regions
//! - `notify` - toast lifecycle
//! - [`actions`] - typed UI actions and dispatch
//!
//! Every method takes `&self`; the view state sits behind a mutex that is
//! never held across an await, so concurrent handlers interleave only at
//! network calls.

pub mod actions;
mod body_map;
mod crud;
mod dashboard;
mod modal;
mod navigation;
mod notify;
mod pipeline;
mod public;
mod session;

pub use actions::{UiAction, UiActionError};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::ApiClient;
use crate::bindings::{Binding, Bindings};
use crate::config::ClientConfig;
use crate::error::ViewError;
use crate::traits::{Dialog, Document, HttpClient};
use crate::view_state::{Page, ToastState, ViewState};

pub struct App {
    config: ClientConfig,
    api: ApiClient,
    document: Arc<dyn Document>,
    dialog: Arc<dyn Dialog>,
    bindings: Bindings,
    state: Mutex<ViewState>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("api", &self.api)
            .field("state", &*self.state())
            .finish()
    }
}

impl App {
    /// Build the app, resolving view bindings against the document.
    pub fn new(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
        document: Arc<dyn Document>,
        dialog: Arc<dyn Dialog>,
    ) -> Result<Self, ViewError> {
        Self::with_overrides(config, http, document, dialog, &HashMap::new())
    }

    /// Like [`App::new`] for a document whose singleton ids differ from the
    /// standard shell.
    pub fn with_overrides(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
        document: Arc<dyn Document>,
        dialog: Arc<dyn Dialog>,
        overrides: &HashMap<Binding, String>,
    ) -> Result<Self, ViewError> {
        let bindings = Bindings::resolve_with(document.as_ref(), overrides)?;
        let api = ApiClient::new(http, config.base_url.clone());
        tracing::info!("Client core ready against {}", api.base_url());
        Ok(Self {
            config,
            api,
            document,
            dialog,
            bindings,
            state: Mutex::new(ViewState::new()),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn document(&self) -> &Arc<dyn Document> {
        &self.document
    }

    /// Snapshot of the view state.
    pub fn view_state(&self) -> ViewState {
        self.state().clone()
    }

    pub fn current_page(&self) -> Page {
        self.state().current
    }

    /// Element id a binding resolved to.
    pub fn bound_id(&self, binding: Binding) -> &str {
        self.id(binding)
    }

    /// The toast on screen, if any.
    pub fn toast(&self) -> Option<ToastState> {
        self.state().toast.clone()
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn id(&self, binding: Binding) -> &str {
        self.bindings.id(binding)
    }

    /// Current value of a form field, empty when absent.
    fn field_value(&self, id: &str) -> String {
        self.document.value(id).unwrap_or_default()
    }
}
