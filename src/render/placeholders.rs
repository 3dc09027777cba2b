//! Loading, error and empty-state placeholders.

use super::{esc_html, Markup};
use crate::view_state::AdminResource;

/// Spinner with a caption.
pub fn loading(caption: &str) -> Markup {
    Markup::raw(format!(
        r#"<div class="loading-state"><div class="loader"></div><p>{}</p></div>"#,
        esc_html(caption)
    ))
}

/// Notice in the loading-state frame, used by the public pages.
pub fn notice(icon: &str, message: &str) -> Markup {
    Markup::raw(format!(
        r#"<div class="loading-state"><div class="empty-icon">{}</div><p>{}</p></div>"#,
        icon,
        esc_html(message)
    ))
}

/// Failure placeholder of an admin table.
pub fn error_state(message: &str) -> Markup {
    Markup::raw(format!(
        r#"<div class="empty-state"><p>Error: {}</p></div>"#,
        esc_html(message)
    ))
}

/// Empty-state node with an icon.
pub fn empty(icon: &str, message: &str) -> Markup {
    Markup::raw(format!(
        r#"<div class="empty-state"><div class="empty-icon">{}</div><p>{}</p></div>"#,
        icon,
        esc_html(message)
    ))
}

/// Empty state of an admin table.
pub fn empty_table(resource: AdminResource) -> Markup {
    let (icon, message) = match resource {
        AdminResource::Illnesses => ("🦠", "No illnesses added yet."),
        AdminResource::Doctors => ("👨‍⚕️", "No doctors added yet."),
        AdminResource::Medicines => ("💊", "No medicines added yet."),
        AdminResource::Tips => ("💡", "No tips added yet."),
        AdminResource::Messages => ("💬", "No messages yet."),
    };
    empty(icon, message)
}
