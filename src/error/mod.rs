//! Error handling for the client core.
//!
//! Two failure kinds reach the user:
//!
//! | Kind | Source | Shown as |
//! |------|--------|----------|
//! | Transport | network error, non-JSON body, bad status | generic placeholder or "Network error" toast |
//! | Application | `success=false` envelope | the server's message |
//!
//! Neither propagates past the handler that issued the request. The only
//! fatal error is [`ViewError`], raised at startup when the host document is
//! missing elements the core binds to.

mod category;
mod client;
mod result;
mod view;

pub use category::FailureKind;
pub use client::ClientError;
pub use result::ClientResult;
pub use view::ViewError;
