use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Health tip category. Unknown keys are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TipCategory {
    #[default]
    HomeCare,
    MedicineSafety,
    Nutrition,
    Fitness,
    MentalHealth,
    Other(String),
}

impl TipCategory {
    /// Known categories in display order.
    pub const KNOWN: [TipCategory; 5] = [
        TipCategory::HomeCare,
        TipCategory::MedicineSafety,
        TipCategory::Nutrition,
        TipCategory::Fitness,
        TipCategory::MentalHealth,
    ];

    pub fn from_key(key: &str) -> TipCategory {
        match key {
            "home_care" => TipCategory::HomeCare,
            "medicine_safety" => TipCategory::MedicineSafety,
            "nutrition" => TipCategory::Nutrition,
            "fitness" => TipCategory::Fitness,
            "mental_health" => TipCategory::MentalHealth,
            other => TipCategory::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            TipCategory::HomeCare => "home_care",
            TipCategory::MedicineSafety => "medicine_safety",
            TipCategory::Nutrition => "nutrition",
            TipCategory::Fitness => "fitness",
            TipCategory::MentalHealth => "mental_health",
            TipCategory::Other(key) => key,
        }
    }

    /// Position in display order; unknown categories sort last.
    pub fn rank(&self) -> usize {
        TipCategory::KNOWN
            .iter()
            .position(|known| known == self)
            .unwrap_or(TipCategory::KNOWN.len())
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for TipCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for TipCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?
            .map(|key| TipCategory::from_key(&key))
            .unwrap_or_default())
    }
}

/// A health tip.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthTip {
    pub id: i64,
    #[serde(default)]
    pub category: TipCategory,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "super::deserialize_optional_text")]
    pub icon: Option<String>,
    #[serde(default = "default_active", deserialize_with = "super::deserialize_flag")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl HealthTip {
    /// Icon, or the light bulb when none is set.
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or("💡")
    }
}

/// Tips grouped by category, in display order.
pub type TipGroups = Vec<(TipCategory, Vec<HealthTip>)>;

/// Order the category mapping of `GET /api/health-tips`: known categories
/// first in their fixed order, then unknown keys alphabetically. Empty groups
/// are dropped.
pub fn group_tips(grouped: BTreeMap<String, Vec<HealthTip>>) -> TipGroups {
    let mut groups: TipGroups = grouped
        .into_iter()
        .filter(|(_, tips)| !tips.is_empty())
        .map(|(key, tips)| (TipCategory::from_key(&key), tips))
        .collect();
    // Stable sort keeps the alphabetical order of unknown keys.
    groups.sort_by_key(|(category, _)| category.rank());
    groups
}
