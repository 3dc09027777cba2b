//! Rows of the admin listings.

use serde::Deserialize;

use super::Severity;

/// Row of `GET /admin/illnesses`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IllnessRow {
    pub id: i64,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub body_part_name: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, deserialize_with = "super::deserialize_flag")]
    pub is_active: bool,
}

/// Row of `GET /admin/medicines`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedicineRow {
    pub id: i64,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub illness_name: String,
    #[serde(default, deserialize_with = "super::deserialize_optional_text")]
    pub dosage: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_flag")]
    pub is_otc: bool,
}

/// Entry of `GET /admin/illnesses-list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IllnessOption {
    pub id: i64,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub name: String,
}
