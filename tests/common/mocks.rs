//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from
//! `medref::adapters::mock` and adds a scripted backend builder.

pub use medref::adapters::mock::{MockHttpClient, MockResponse, ScriptedDialog};
pub use medref::traits::HttpError;

use std::time::Duration;

use serde_json::{json, Value};

/// Base URL every fixture app talks to.
pub const BASE: &str = "http://test.local";

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

/// Builder for a scripted backend.
pub struct MockBackend {
    client: MockHttpClient,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Envelope `{ success: true, data }` for a path.
    pub fn with_data(self, path: &str, data: Value) -> Self {
        self.client.set_response(
            &url(path),
            MockResponse::json(json!({ "success": true, "data": data })),
        );
        self
    }

    /// Arbitrary JSON body for a path.
    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.client.set_response(&url(path), MockResponse::json(body));
        self
    }

    /// `{ success: false, message }` for a path.
    pub fn with_failure(self, path: &str, message: &str) -> Self {
        self.with_json(path, json!({ "success": false, "message": message }))
    }

    #[allow(dead_code)]
    pub fn with_transport_error(self, path: &str) -> Self {
        self.client.set_response(
            &url(path),
            MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string())),
        );
        self
    }

    #[allow(dead_code)]
    pub fn with_delay(self, path: &str, delay: Duration) -> Self {
        self.client.set_delay(&url(path), delay);
        self
    }

    /// Empty admin tables and zeroed counters.
    pub fn with_empty_admin(self) -> Self {
        let mut backend = self.with_data(
            "/admin/stats",
            json!({ "illnesses": 0, "doctors": 0, "medicines": 0, "messages": 0 }),
        );
        for path in ["illnesses", "doctors", "medicines", "tips", "messages"] {
            backend = backend.with_data(&format!("/admin/{}", path), json!([]));
        }
        backend
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}
