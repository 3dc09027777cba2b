//! Keyword icon lookup.

use crate::models::TipCategory;

const ILLNESS_ICONS: &[(&[&str], &str)] = &[
    (&["migrain", "headache"], "🤕"),
    (&["sinus"], "🤧"),
    (&["cancer", "tumor"], "🔴"),
    (&["heart", "cardiac"], "❤️"),
    (&["lung", "pneumon", "breath"], "🫁"),
    (&["stomach", "gastri", "ibs"], "🫃"),
    (&["knee", "arthrit"], "🦵"),
    (&["back", "spine", "disc"], "🦴"),
    (&["shoulder", "rotator"], "💪"),
    (&["foot", "feet", "plantar", "gout"], "🦶"),
    (&["neck", "cervical"], "🧍"),
    (&["carpal", "wrist", "elbow"], "🖐"),
    (&["varicose", "vein"], "🩸"),
    (&["frozen"], "🧊"),
];

const DOCTOR_ICONS: &[(&[&str], &str)] = &[
    (&["neuro", "brain"], "🧠"),
    (&["cardio", "heart"], "❤️"),
    (&["ortho", "bone"], "🦴"),
    (&["gastro", "digest"], "🫃"),
    (&["pulmo", "lung"], "🫁"),
    (&["sports"], "🏃"),
    (&["rheuma"], "💊"),
    (&["pod", "foot"], "🦶"),
    (&["vascul"], "🩸"),
    (&["spine", "back"], "🦴"),
];

fn lookup(table: &[(&[&str], &'static str)], text: &str, default: &'static str) -> &'static str {
    let lower = text.to_lowercase();
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or(default)
}

/// Icon for an illness name. First matching keyword wins.
pub fn illness_icon(name: &str) -> &'static str {
    lookup(ILLNESS_ICONS, name, "🏥")
}

/// Avatar for a doctor's specialization.
pub fn doctor_icon(specialization: &str) -> &'static str {
    lookup(DOCTOR_ICONS, specialization, "👨‍⚕️")
}

/// Heading and subheading of a tips section. Unknown categories use the raw
/// key and no subheading.
pub fn category_heading(category: &TipCategory) -> (&str, &'static str) {
    match category {
        TipCategory::HomeCare => ("🏠 Home Care Tips", "Daily habits for a healthier life"),
        TipCategory::MedicineSafety => ("💊 Medicine Safety Tips", "Stay safe with medications"),
        TipCategory::Nutrition => ("🥗 Nutrition Tips", "Fuel your body right"),
        TipCategory::Fitness => ("🏃 Fitness Tips", "Move more, feel better"),
        TipCategory::MentalHealth => ("🧠 Mental Health Tips", "Take care of your mind"),
        TipCategory::Other(key) => (key.as_str(), ""),
    }
}
