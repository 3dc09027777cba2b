//! Request bodies built from form field values.
//!
//! Each form has a fixed shape. `from_values` takes a field reader (usually
//! a closure over the document) so the shaping rules stay testable without a
//! document.

use serde::Serialize;

use crate::bindings::fields;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn from_values(value: impl Fn(&str) -> String) -> Self {
        Self {
            name: value(fields::CONTACT_NAME),
            email: value(fields::CONTACT_EMAIL),
            message: value(fields::CONTACT_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn from_values(value: impl Fn(&str) -> String) -> Self {
        Self::new(value(fields::LOGIN_EMAIL), value(fields::LOGIN_PASSWORD))
    }
}

/// Body of `POST /admin/illness`. Symptoms and care tips are `|`-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IllnessForm {
    pub body_part_id: String,
    pub name: String,
    pub description: String,
    pub symptoms: String,
    pub care_tips: String,
    pub severity: String,
}

impl IllnessForm {
    pub fn from_values(value: impl Fn(&str) -> String) -> Self {
        Self {
            body_part_id: value(fields::ILLNESS_BODY_PART),
            name: value(fields::ILLNESS_NAME),
            description: value(fields::ILLNESS_DESCRIPTION),
            symptoms: value(fields::ILLNESS_SYMPTOMS),
            care_tips: value(fields::ILLNESS_CARE),
            severity: value(fields::ILLNESS_SEVERITY),
        }
    }
}

/// Body of `POST /admin/doctor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctorForm {
    /// `null` for a general practitioner.
    pub body_part_id: Option<String>,
    pub name: String,
    pub specialization: String,
    pub hospital: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub experience_years: i64,
}

impl DoctorForm {
    pub fn from_values(value: impl Fn(&str) -> String) -> Self {
        let body_part = value(fields::DOCTOR_BODY_PART);
        Self {
            body_part_id: Some(body_part).filter(|v| !v.is_empty()),
            name: value(fields::DOCTOR_NAME),
            specialization: value(fields::DOCTOR_SPECIALIZATION),
            hospital: value(fields::DOCTOR_HOSPITAL),
            phone: value(fields::DOCTOR_PHONE),
            email: value(fields::DOCTOR_EMAIL),
            address: value(fields::DOCTOR_ADDRESS),
            experience_years: parse_leading_int(&value(fields::DOCTOR_EXPERIENCE)).unwrap_or(0),
        }
    }
}

/// Body of `POST /admin/medicine`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MedicineForm {
    pub illness_id: String,
    pub name: String,
    pub description: String,
    pub dosage: String,
    pub side_effects: String,
    /// `1` for over-the-counter, `0` for prescription; `null` if unset.
    pub is_otc: Option<i64>,
}

impl MedicineForm {
    pub fn from_values(value: impl Fn(&str) -> String) -> Self {
        Self {
            illness_id: value(fields::MEDICINE_ILLNESS),
            name: value(fields::MEDICINE_NAME),
            description: value(fields::MEDICINE_DESCRIPTION),
            dosage: value(fields::MEDICINE_DOSAGE),
            side_effects: value(fields::MEDICINE_SIDE_EFFECTS),
            is_otc: parse_leading_int(&value(fields::MEDICINE_OTC)),
        }
    }
}

/// Body of `POST /admin/tip`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TipForm {
    pub category: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl TipForm {
    pub fn from_values(value: impl Fn(&str) -> String) -> Self {
        let icon = value(fields::TIP_ICON);
        Self {
            category: value(fields::TIP_CATEGORY),
            title: value(fields::TIP_TITLE),
            description: value(fields::TIP_DESCRIPTION),
            icon: if icon.is_empty() { "💡".to_string() } else { icon },
        }
    }
}

/// Leading integer of a field value: `"12 years"` is 12, `"abc"` is `None`.
fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn reader(pairs: &[(&str, &str)]) -> impl Fn(&str) -> String {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |id: &str| map.get(id).cloned().unwrap_or_default()
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int(" 7 years"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("x1"), None);
    }

    #[test]
    fn test_doctor_general_and_experience() {
        let form = DoctorForm::from_values(reader(&[
            (fields::DOCTOR_NAME, "Dr. Okafor"),
            (fields::DOCTOR_EXPERIENCE, "abc"),
        ]));
        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(body["body_part_id"], json!(null));
        assert_eq!(body["experience_years"], json!(0));
        assert_eq!(body["name"], json!("Dr. Okafor"));
    }

    #[test]
    fn test_medicine_otc_is_integer() {
        let form = MedicineForm::from_values(reader(&[(fields::MEDICINE_OTC, "0")]));
        assert_eq!(serde_json::to_value(&form).unwrap()["is_otc"], json!(0));
    }

    #[test]
    fn test_tip_default_icon() {
        let form = TipForm::from_values(reader(&[(fields::TIP_TITLE, "Sleep")]));
        assert_eq!(form.icon, "💡");
    }

    #[test]
    fn test_illness_body_shape() {
        let form = IllnessForm::from_values(reader(&[
            (fields::ILLNESS_BODY_PART, "7"),
            (fields::ILLNESS_NAME, "Arthritis"),
            (fields::ILLNESS_SYMPTOMS, "pain|stiffness"),
            (fields::ILLNESS_SEVERITY, "moderate"),
        ]));
        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(
            body,
            json!({
                "body_part_id": "7",
                "name": "Arthritis",
                "description": "",
                "symptoms": "pain|stiffness",
                "care_tips": "",
                "severity": "moderate",
            })
        );
    }
}
