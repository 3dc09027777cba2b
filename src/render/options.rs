//! Dropdown options for the create forms.

use super::{esc_html, Markup};
use crate::models::{BodyPart, IllnessOption};

fn option(value: &str, label: &str) -> Markup {
    Markup::raw(format!(
        r#"<option value="{}">{}</option>"#,
        esc_html(value),
        esc_html(label)
    ))
}

/// Body-part options. `with_general` prepends the "no body part" choice.
pub fn body_part_options(parts: &[BodyPart], with_general: bool) -> Markup {
    let mut html = Markup::new();
    if with_general {
        html.push(option("", "-- General / All --"));
    }
    html.extend(parts.iter().map(|p| option(&p.id.to_string(), &p.name)));
    html
}

pub fn illness_options(illnesses: &[IllnessOption]) -> Markup {
    illnesses
        .iter()
        .map(|i| option(&i.id.to_string(), &i.name))
        .collect()
}
