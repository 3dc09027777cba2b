use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Medicine;

/// Illness urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    /// Capitalized label, e.g. `Moderate`.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }

    /// Badge class, e.g. `severity-moderate`.
    pub fn class(&self) -> String {
        format!("severity-{}", self.as_str())
    }

    /// Parse a severity, falling back to [`Severity::Mild`].
    pub fn parse_lenient(value: &str) -> Severity {
        Severity::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Null, missing and unknown values all read as mild.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?
            .map(|s| Severity::parse_lenient(&s))
            .unwrap_or_default())
    }
}

/// An illness as shown on a body-part page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Illness {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub body_part_id: Option<i64>,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, deserialize_with = "super::deserialize_list")]
    pub symptoms_list: Vec<String>,
    #[serde(default, deserialize_with = "super::deserialize_list")]
    pub care_list: Vec<String>,
    #[serde(default, deserialize_with = "super::deserialize_list")]
    pub medicines: Vec<Medicine>,
}
