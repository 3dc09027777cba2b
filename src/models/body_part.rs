use serde::{Deserialize, Serialize};

use super::{Doctor, Illness};

/// A clickable anatomical region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPart {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub slug: String,
}

/// Payload of `GET /api/body-part/{slug}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodyPartDetail {
    #[serde(default)]
    pub part: BodyPart,
    #[serde(default, deserialize_with = "super::deserialize_list")]
    pub illnesses: Vec<Illness>,
    #[serde(default, deserialize_with = "super::deserialize_list")]
    pub doctors: Vec<Doctor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_with_sparse_part() {
        let detail: BodyPartDetail = serde_json::from_value(json!({
            "part": { "name": "Knee" },
            "illnesses": [],
        }))
        .unwrap();
        assert_eq!(detail.part.name, "Knee");
        assert!(detail.part.slug.is_empty());
        assert!(detail.doctors.is_empty());
    }
}
