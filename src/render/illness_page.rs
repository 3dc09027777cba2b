//! Body-part detail page.

use super::icons::{doctor_icon, illness_icon};
use super::{esc_html, Markup};
use crate::models::{BodyPart, Doctor, Illness, Medicine};

/// Hero labels of the detail page. Plain text, written with `set_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartHeader {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
}

pub fn part_header(part: &BodyPart) -> PartHeader {
    PartHeader {
        badge: format!("🔬 {}", part.name),
        title: format!("{} — Health Information", part.name),
        subtitle: format!(
            "Explore common conditions, symptoms, care tips, and specialists for {} health.",
            part.name
        ),
    }
}

const SEPARATOR: &str =
    r#"<hr style="border:none;border-top:2px dashed var(--gray-100);margin:8px 0">"#;

const MEDICINE_WARNING: &str = "⚠️ Educational information only. Always consult a doctor before taking any medication.";

/// Full content of the detail page.
pub fn illness_content(illnesses: &[Illness], doctors: &[Doctor]) -> Markup {
    let mut html = Markup::raw(r#"<div class="illness-grid">"#);

    if illnesses.is_empty() {
        html.push_raw(
            r#"<div class="ill-section"><p class="ill-desc">No illness data available for this body part yet. Please check back later.</p></div>"#,
        );
    } else {
        for (idx, illness) in illnesses.iter().enumerate() {
            html.push(illness_block(illness));
            if idx + 1 < illnesses.len() {
                html.push_raw(SEPARATOR);
            }
        }
    }

    if !doctors.is_empty() {
        html.push(specialists(doctors));
    }

    html.push_raw("</div>");
    html
}

fn section(icon: &str, title: &str, body: Markup) -> Markup {
    Markup::raw(format!(
        r#"<div class="ill-section"><div class="ill-section-header"><div class="ill-section-icon">{}</div><h3 class="ill-section-title">{}</h3></div>{}</div>"#,
        icon,
        esc_html(title),
        body
    ))
}

fn list(class: &str, items: &[String]) -> Markup {
    let mut html = Markup::raw(format!(r#"<ul class="{}">"#, class));
    for item in items {
        html.push_raw("<li>");
        html.push_text(item);
        html.push_raw("</li>");
    }
    html.push_raw("</ul>");
    html
}

/// Header, symptoms, care tips and medicines of one illness.
pub fn illness_block(illness: &Illness) -> Markup {
    let severity = illness.severity;
    let mut html = Markup::raw(format!(
        r#"<div class="ill-section"><div class="ill-section-header"><div class="ill-section-icon">{}</div><div><div class="ill-name">{}</div><span class="severity-badge {}">{} Severity</span></div></div><p class="ill-desc">{}</p></div>"#,
        illness_icon(&illness.name),
        esc_html(&illness.name),
        severity.class(),
        severity.label(),
        esc_html(&illness.description)
    ));

    if !illness.symptoms_list.is_empty() {
        html.push(section(
            "🔍",
            &format!("Symptoms — {}", illness.name),
            list("symptoms-list", &illness.symptoms_list),
        ));
    }

    if !illness.care_list.is_empty() {
        html.push(section(
            "💚",
            &format!("Care Tips — {}", illness.name),
            list("care-list", &illness.care_list),
        ));
    }

    if !illness.medicines.is_empty() {
        let mut body = Markup::raw(format!(r#"<div class="med-warning">{}</div>"#, MEDICINE_WARNING));
        body.push_raw(r#"<div class="medicine-cards" style="margin-top:16px">"#);
        body.extend(illness.medicines.iter().map(medicine_card));
        body.push_raw("</div>");
        html.push(section(
            "💊",
            &format!("Medicine Information — {}", illness.name),
            body,
        ));
    }

    html
}

pub fn medicine_card(medicine: &Medicine) -> Markup {
    let (badge_class, badge) = if medicine.is_otc {
        ("otc-yes", "✓ Over-the-Counter")
    } else {
        ("otc-no", "⚕ Prescription Required")
    };
    let mut html = Markup::raw(format!(
        r#"<div class="medicine-card"><div class="med-card-name">{}</div><span class="med-otc-badge {}">{}</span><div class="med-field">{}</div>"#,
        esc_html(&medicine.name),
        badge_class,
        badge,
        esc_html(&medicine.description)
    ));
    if let Some(dosage) = &medicine.dosage {
        html.push_raw(&format!(
            r#"<div class="med-field"><strong>Dosage:</strong> {}</div>"#,
            esc_html(dosage)
        ));
    }
    if let Some(side_effects) = &medicine.side_effects {
        html.push_raw(&format!(
            r#"<div class="med-field"><strong>Side Effects:</strong> {}</div>"#,
            esc_html(side_effects)
        ));
    }
    html.push_raw("</div>");
    html
}

fn specialists(doctors: &[Doctor]) -> Markup {
    let mut grid = Markup::raw(r#"<div class="doctors-grid">"#);
    grid.extend(doctors.iter().map(doctor_card));
    grid.push_raw("</div>");
    section("👨‍⚕️", "Recommended Specialists", grid)
}

pub fn doctor_card(doctor: &Doctor) -> Markup {
    let mut html = Markup::raw(format!(
        r#"<div class="doctor-card"><div class="doc-avatar">{}</div><div class="doc-name">{}</div><div class="doc-spec">{}</div>"#,
        doctor_icon(&doctor.specialization),
        esc_html(&doctor.name),
        esc_html(&doctor.specialization)
    ));
    if let Some(hospital) = &doctor.hospital {
        html.push_raw(&format!(
            r#"<div class="doc-hospital">🏥 {}</div>"#,
            esc_html(hospital)
        ));
    }
    html.push_raw(r#"<div class="doc-contacts">"#);
    if let Some(phone) = &doctor.phone {
        let phone = esc_html(phone);
        html.push_raw(&format!(
            r#"<div class="doc-contact-item">📞 <a href="tel:{}" style="color:var(--primary-light)">{}</a></div>"#,
            phone, phone
        ));
    }
    if let Some(email) = &doctor.email {
        let email = esc_html(email);
        html.push_raw(&format!(
            r#"<div class="doc-contact-item">📧 <a href="mailto:{}" style="color:var(--primary-light)">{}</a></div>"#,
            email, email
        ));
    }
    html.push_raw("</div>");
    if let Some(years) = doctor.experience_years.filter(|y| *y > 0) {
        html.push_raw(&format!(
            r#"<span class="doc-exp">{} years experience</span>"#,
            years
        ));
    }
    html.push_raw("</div>");
    html
}
