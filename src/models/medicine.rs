use serde::Deserialize;

/// Medicine information attached to an illness.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Medicine {
    /// Absent on the public body-part endpoint.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "super::deserialize_optional_text")]
    pub dosage: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_optional_text")]
    pub side_effects: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_flag")]
    pub is_otc: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_public_shape() {
        let med: Medicine = serde_json::from_value(json!({
            "name": "Ibuprofen",
            "description": "NSAID",
            "dosage": "",
            "side_effects": "Nausea",
            "is_otc": true,
        }))
        .unwrap();
        assert!(med.id.is_none());
        assert!(med.dosage.is_none());
        assert_eq!(med.side_effects.as_deref(), Some("Nausea"));
        assert!(med.is_otc);
    }
}
