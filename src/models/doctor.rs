use serde::Deserialize;

/// A specialist.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Doctor {
    pub id: i64,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub specialization: String,
    #[serde(default, deserialize_with = "super::deserialize_optional_text")]
    pub hospital: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::deserialize_optional_text")]
    pub address: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    /// `None` for general practitioners.
    #[serde(default)]
    pub body_part_id: Option<i64>,
    /// Joined name, present on admin listings.
    #[serde(default, deserialize_with = "super::deserialize_optional_text")]
    pub body_part_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_admin_row() {
        let doc: Doctor = serde_json::from_value(json!({
            "id": 3,
            "name": "Dr. Ade",
            "specialization": "Orthopedics",
            "hospital": null,
            "experience_years": 12,
            "body_part_id": null,
            "body_part_name": null,
            "is_active": 1,
        }))
        .unwrap();
        assert_eq!(doc.id, 3);
        assert!(doc.hospital.is_none());
        assert_eq!(doc.experience_years, Some(12));
        assert!(doc.body_part_id.is_none());
    }

    #[test]
    fn test_row_without_id_is_rejected() {
        let result = serde_json::from_value::<Doctor>(json!({ "name": "Dr. Ade" }));
        assert!(result.is_err());
    }
}
