//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let fixture = TestApp::new(MockBackend::new().with_empty_admin().build());
//! fixture.app.navigate_to("admin").await;
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use medref::adapters::MemoryDocument;
use medref::app::App;
use medref::config::ClientConfig;

/// An app wired to the standard page shell and a mock backend.
pub struct TestApp {
    pub app: App,
    pub doc: Arc<MemoryDocument>,
    pub http: MockHttpClient,
    pub dialog: ScriptedDialog,
}

impl TestApp {
    pub fn new(http: MockHttpClient) -> Self {
        Self::with_dialog(http, ScriptedDialog::accepting())
    }

    pub fn with_dialog(http: MockHttpClient, dialog: ScriptedDialog) -> Self {
        let doc = Arc::new(MemoryDocument::app_shell());
        let app = App::new(
            ClientConfig::default().with_base_url(BASE),
            Arc::new(http.clone()),
            doc.clone(),
            Arc::new(dialog.clone()),
        )
        .expect("app shell should satisfy every binding");
        Self {
            app,
            doc,
            http,
            dialog,
        }
    }

    /// Number of requests with this method and path.
    #[allow(dead_code)]
    pub fn count(&self, method: &str, path: &str) -> usize {
        self.http.requests_to(method, &url(path)).len()
    }
}
