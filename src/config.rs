//! Client configuration.
//!
//! Use the builder methods to customize, or [`ClientConfig::from_env`] to
//! read the `MEDREF_*` variables.
//!
//! ```ignore
//! use medref::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_base_url("http://127.0.0.1:5000")
//!     .with_toast_duration(Duration::from_millis(1500));
//! ```

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TOAST_MS: u64 = 3500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin the endpoint paths are appended to.
    pub base_url: String,
    /// How long a toast stays visible.
    pub toast_duration: Duration,
    /// Request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_MS),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Read `MEDREF_API_URL`, `MEDREF_TOAST_MS` and `MEDREF_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable numbers are
    /// logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("MEDREF_API_URL").filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(raw) = lookup("MEDREF_TOAST_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config = config.with_toast_duration(Duration::from_millis(ms)),
                Err(_) => tracing::warn!("Ignoring invalid MEDREF_TOAST_MS: {}", raw),
            }
        }

        if let Some(raw) = lookup("MEDREF_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config = config.with_request_timeout(Some(Duration::from_secs(secs)))
                }
                Ok(_) => {}
                Err(_) => tracing::warn!("Ignoring invalid MEDREF_TIMEOUT_SECS: {}", raw),
            }
        }

        config
    }
}
