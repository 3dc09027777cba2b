//! Trait abstractions for dependency injection and testability.
//!
//! The client core reaches the outside world only through these traits:
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, DELETE)
//! - [`Document`] - DOM lookups and mutations by element id
//! - [`Dialog`] - Interactive confirmation prompts

pub mod dialog;
pub mod document;
pub mod http;

pub use dialog::Dialog;
pub use document::Document;
pub use http::{Headers, HttpClient, HttpError, Response};
