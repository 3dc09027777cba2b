//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network access or a user at the keyboard.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`ScriptedDialog`] - Confirmation prompts answered from a queue
//!
//! The in-memory document lives in [`crate::adapters::MemoryDocument`]; it is
//! a real implementation used by the headless runner as well.

pub mod dialog;
pub mod http;

pub use dialog::ScriptedDialog;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
