//! Admin listing tables.
//!
//! Action buttons carry `data-action` / `data-id` attributes; the host routes
//! clicks on them to `App::dispatch`.

use super::{esc_html, Markup};
use super::dates::message_date;
use crate::models::{ContactMessage, Doctor, HealthTip, IllnessRow, MedicineRow};

const CHIP_STYLE: &str =
    "background:var(--gray-100);padding:2px 8px;border-radius:4px;font-size:12px";

fn table(headers: &[&str], rows: Markup) -> Markup {
    let mut html = Markup::raw(r#"<table class="admin-table"><thead><tr>"#);
    for header in headers {
        html.push_raw(&format!("<th>{}</th>", header));
    }
    html.push_raw("</tr></thead><tbody>");
    html.push(rows);
    html.push_raw("</tbody></table>");
    html
}

fn delete_button(action: &str, id: i64) -> String {
    format!(
        r#"<button class="btn-danger" data-action="{}" data-id="{}">Delete</button>"#,
        action, id
    )
}

fn chip(text: &str) -> String {
    format!(r#"<span style="{}">{}</span>"#, CHIP_STYLE, esc_html(text))
}

fn status_dot(active: bool) -> &'static str {
    if active {
        r#"<span style="color:var(--success)">●</span>"#
    } else {
        r#"<span style="color:var(--danger)">●</span>"#
    }
}

pub fn illness_row(row: &IllnessRow) -> Markup {
    Markup::raw(format!(
        r#"<tr><td>#{}</td><td>{}</td><td><strong>{}</strong></td><td><span class="severity-badge {}">{}</span></td><td>{} {}</td><td>{}</td></tr>"#,
        row.id,
        chip(&row.body_part_name),
        esc_html(&row.name),
        row.severity.class(),
        row.severity.as_str(),
        status_dot(row.is_active),
        if row.is_active { "Active" } else { "Inactive" },
        delete_button("delete-illness", row.id)
    ))
}

pub fn illnesses_table(rows: &[IllnessRow]) -> Markup {
    table(
        &["ID", "Body Part", "Name", "Severity", "Status", "Actions"],
        rows.iter().map(illness_row).collect(),
    )
}

pub fn doctor_row(doctor: &Doctor) -> Markup {
    Markup::raw(format!(
        r#"<tr><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}y</td><td>{}</td></tr>"#,
        esc_html(&doctor.name),
        esc_html(&doctor.specialization),
        chip(doctor.body_part_name.as_deref().unwrap_or("General")),
        esc_html(doctor.hospital.as_deref().unwrap_or("—")),
        esc_html(doctor.phone.as_deref().unwrap_or("—")),
        doctor.experience_years.unwrap_or(0),
        delete_button("delete-doctor", doctor.id)
    ))
}

pub fn doctors_table(doctors: &[Doctor]) -> Markup {
    table(
        &["Name", "Specialization", "Body Part", "Hospital", "Phone", "Exp.", "Actions"],
        doctors.iter().map(doctor_row).collect(),
    )
}

pub fn medicine_row(row: &MedicineRow) -> Markup {
    let (background, color, label) = if row.is_otc {
        ("#e7f7ef", "#2d9970", "OTC")
    } else {
        ("#fff3e0", "#e65100", "Rx")
    };
    Markup::raw(format!(
        r#"<tr><td><strong>{}</strong></td><td>{}</td><td style="font-size:12px;color:var(--text-muted)">{}</td><td><span style="background:{};color:{};padding:2px 8px;border-radius:4px;font-size:12px">{}</span></td><td>{}</td></tr>"#,
        esc_html(&row.name),
        esc_html(&row.illness_name),
        esc_html(row.dosage.as_deref().unwrap_or("—")),
        background,
        color,
        label,
        delete_button("delete-medicine", row.id)
    ))
}

pub fn medicines_table(rows: &[MedicineRow]) -> Markup {
    table(
        &["Medicine", "Related Illness", "Dosage", "Type", "Actions"],
        rows.iter().map(medicine_row).collect(),
    )
}

pub fn tip_row(tip: &HealthTip) -> Markup {
    Markup::raw(format!(
        r#"<tr><td style="font-size:20px">{}</td><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
        esc_html(tip.icon_or_default()),
        esc_html(&tip.title),
        chip(&tip.category.key().replace('_', " ")),
        status_dot(tip.is_active),
        delete_button("delete-tip", tip.id)
    ))
}

pub fn tips_table(tips: &[HealthTip]) -> Markup {
    table(
        &["Icon", "Title", "Category", "Active", "Actions"],
        tips.iter().map(tip_row).collect(),
    )
}

pub fn message_row(message: &ContactMessage) -> Markup {
    let email = esc_html(&message.email);
    let status = if message.is_read {
        r#"<span style="color:var(--success);font-size:12px">✓ Read</span>"#.to_string()
    } else {
        format!(
            r#"<button data-action="mark-read" data-id="{}" style="background:var(--primary);color:white;border:none;padding:4px 10px;border-radius:4px;font-size:11px;cursor:pointer">Mark Read</button>"#,
            message.id
        )
    };
    Markup::raw(format!(
        r#"<tr><td><strong>{}</strong></td><td><a href="mailto:{}" style="color:var(--primary-light)">{}</a></td><td style="max-width:300px;overflow:hidden;text-overflow:ellipsis;white-space:nowrap">{}</td><td style="font-size:12px;color:var(--text-muted)">{}</td><td>{}</td></tr>"#,
        esc_html(&message.name),
        email,
        email,
        esc_html(&message.message),
        esc_html(&message_date(&message.created_at)),
        status
    ))
}

pub fn messages_table(messages: &[ContactMessage]) -> Markup {
    table(
        &["Name", "Email", "Message", "Date", "Status"],
        messages.iter().map(message_row).collect(),
    )
}
