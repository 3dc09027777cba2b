//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest, with a cookie store
//!   so the admin session survives between requests
//! - [`MemoryDocument`] - In-memory document for the headless runner
//! - [`ConsoleDialog`] - Confirmation prompts on the terminal
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::ScriptedDialog`] - Queued confirmation answers

pub mod console_dialog;
pub mod memory_document;
pub mod mock;
pub mod reqwest_http;

pub use console_dialog::ConsoleDialog;
pub use memory_document::{DocumentSnapshot, Element, MemoryDocument};
pub use mock::{MockHttpClient, MockResponse, ScriptedDialog};
pub use reqwest_http::ReqwestHttpClient;
