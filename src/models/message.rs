use serde::Deserialize;

/// A message submitted through the contact form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub message: String,
    /// Raw timestamp as sent by the backend.
    #[serde(default, deserialize_with = "super::deserialize_nullable_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "super::deserialize_flag")]
    pub is_read: bool,
}
