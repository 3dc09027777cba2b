//! Transport records received from and sent to the backend.
//!
//! Records are tolerant: missing lists decode as empty, `null` text decodes
//! as absent, and flags accept booleans, `0`/`1` integers or their string
//! forms, since the backend returns raw database rows for admin listings.

mod admin;
mod body_part;
mod doctor;
mod envelope;
pub mod forms;
mod illness;
mod medicine;
mod message;
mod stats;
mod tip;

pub use admin::{IllnessOption, IllnessRow, MedicineRow};
pub use body_part::{BodyPart, BodyPartDetail};
pub use doctor::Doctor;
pub use envelope::ApiEnvelope;
pub use forms::{ContactForm, DoctorForm, IllnessForm, LoginForm, MedicineForm, TipForm};
pub use illness::{Illness, Severity};
pub use medicine::Medicine;
pub use message::ContactMessage;
pub use stats::AdminStats;
pub use tip::{group_tips, HealthTip, TipCategory, TipGroups};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize a flag as a bool, an integer or a numeric string.
pub(crate) fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean, integer or null")
        }

        fn visit_bool<E>(self, value: bool) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(value != 0)
        }

        fn visit_u64<E>(self, value: u64) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(value != 0)
        }

        fn visit_str<E>(self, value: &str) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(matches!(value.trim(), "1" | "true" | "True"))
        }

        fn visit_unit<E>(self) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(false)
        }

        fn visit_none<E>(self) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(false)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<bool, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(FlagVisitor)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

/// Helper to deserialize optional text, treating `null` and `""` as absent.
pub(crate) fn deserialize_optional_text<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.filter(|s| !s.is_empty()))
}

/// Helper to deserialize nullable strings as empty string.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize a nullable list as empty.
pub(crate) fn deserialize_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
