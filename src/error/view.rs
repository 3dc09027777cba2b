//! Startup errors of the view layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// The host document lacks elements the core binds to.
    #[error("Document is missing required elements: {}", .0.join(", "))]
    MissingElements(Vec<String>),
}
