//! Prelude module for convenient imports.
//!
//! ```ignore
//! use medref::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, UiAction, UiActionError};
pub use crate::config::ClientConfig;
pub use crate::error::{ClientError, ClientResult, FailureKind, ViewError};

// Seams
pub use crate::traits::{Dialog, Document, HttpClient};

// Model types
pub use crate::models::{
    ApiEnvelope, BodyPart, BodyPartDetail, ContactMessage, Doctor, HealthTip, Illness, Medicine,
    Severity, TipCategory,
};

// View state
pub use crate::view_state::{AdminResource, AdminTab, Modal, Page, ToastKind, ViewState};

// Rendering
pub use crate::render::{esc_html, Markup};
