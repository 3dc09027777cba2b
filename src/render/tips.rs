//! Public health-tips page.

use super::icons::category_heading;
use super::placeholders;
use super::{esc_html, Markup};
use crate::models::{HealthTip, TipCategory};

pub fn tip_card(tip: &HealthTip) -> Markup {
    Markup::raw(format!(
        r#"<div class="tip-card"><div class="tip-icon">{}</div><div class="tip-title">{}</div><div class="tip-desc">{}</div></div>"#,
        esc_html(tip.icon_or_default()),
        esc_html(&tip.title),
        esc_html(&tip.description)
    ))
}

pub fn tips_section(category: &TipCategory, tips: &[HealthTip]) -> Markup {
    let (heading, subheading) = category_heading(category);
    let mut html = Markup::raw(format!(
        r#"<div class="tips-section"><div class="tips-section-header"><div class="tips-section-title">{}</div></div><div class="tips-section-sub" style="margin-bottom:16px;color:var(--text-muted);font-size:14px">{}</div><div class="tips-grid">"#,
        esc_html(heading),
        subheading
    ));
    html.extend(tips.iter().map(tip_card));
    html.push_raw("</div></div>");
    html
}

/// All sections, or a single empty state when there are none.
pub fn tips_content(groups: &[(TipCategory, Vec<HealthTip>)]) -> Markup {
    if groups.is_empty() {
        return placeholders::empty("💡", "No health tips available yet.");
    }
    groups
        .iter()
        .map(|(category, tips)| tips_section(category, tips))
        .collect()
}

/// Failure notice of the tips page.
pub fn tips_error(message: &str) -> Markup {
    Markup::raw(format!(
        r#"<div class="loading-state"><p>Could not load tips: {}</p></div>"#,
        esc_html(message)
    ))
}
