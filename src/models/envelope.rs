//! Response envelope shared by every endpoint.

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// `{ success, message?, data?, name?, id? }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default, deserialize_with = "super::deserialize_flag")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Admin display name, returned by login and session check.
    #[serde(default)]
    pub name: Option<String>,
    /// Id of a created record.
    #[serde(default)]
    pub id: Option<i64>,
}

impl<T> ApiEnvelope<T> {
    /// Check the success flag, turning `success=false` into
    /// [`ClientError::Api`] carrying the server message (or `fallback`).
    pub fn ensure_success(self, fallback: &str) -> ClientResult<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ClientError::Api {
                message: self
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            })
        }
    }

    /// Payload of a successful envelope. A missing payload decodes to the
    /// type's default, so an absent list reads as empty.
    pub fn into_data(self, fallback: &str) -> ClientResult<T>
    where
        T: Default,
    {
        Ok(self.ensure_success(fallback)?.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_with_data() {
        let env: ApiEnvelope<Vec<i64>> =
            serde_json::from_value(json!({ "success": true, "data": [1, 2] })).unwrap();
        assert_eq!(env.into_data("x").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_missing_data_is_default() {
        let env: ApiEnvelope<Vec<i64>> = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(env.into_data("x").unwrap().is_empty());
    }

    #[test]
    fn test_failure_carries_message() {
        let env: ApiEnvelope<Vec<i64>> =
            serde_json::from_value(json!({ "success": false, "message": "Unauthorized" })).unwrap();
        match env.into_data("fallback").unwrap_err() {
            ClientError::Api { message } => assert_eq!(message, "Unauthorized"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let env: ApiEnvelope<()> = serde_json::from_value(json!({ "success": false })).unwrap();
        match env.ensure_success("Invalid credentials").unwrap_err() {
            ClientError::Api { message } => assert_eq!(message, "Invalid credentials"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_login_fields() {
        let env: ApiEnvelope<()> =
            serde_json::from_value(json!({ "success": true, "name": "Dr. Admin", "id": 9 })).unwrap();
        assert_eq!(env.name.as_deref(), Some("Dr. Admin"));
        assert_eq!(env.id, Some(9));
    }
}
