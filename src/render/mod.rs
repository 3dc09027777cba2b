//! Pure record-to-fragment rendering.
//!
//! Every function here maps decoded records to a [`Markup`] fragment and
//! never touches the document. Text from the backend enters markup only
//! through [`esc_html`]; ids are integers and severity/category are enums,
//! so they are interpolated as-is.

pub mod admin_tables;
pub mod dates;
mod escape;
pub mod icons;
pub mod illness_page;
mod markup;
pub mod options;
pub mod placeholders;
pub mod tips;

pub use escape::{esc_html, esc_opt};
pub use markup::Markup;
