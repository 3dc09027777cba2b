//! Backend API client.
//!
//! Thin JSON layer over an injected [`HttpClient`]. Every call decodes the
//! `{ success, message?, data? }` envelope; bodies are parsed as JSON even on
//! error statuses because the backend reports `401 Unauthorized` and `500`
//! failures through the same envelope.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, ClientResult};
use crate::models::ApiEnvelope;
use crate::traits::{Headers, HttpClient, Response};

/// Envelope whose payload is not inspected.
pub type Ack = ApiEnvelope<serde_json::Value>;

/// Endpoint paths.
pub mod paths {
    use crate::view_state::AdminResource;

    pub const HEALTH_TIPS: &str = "/api/health-tips";
    pub const CONTACT: &str = "/api/contact";
    pub const LOGIN: &str = "/admin/login";
    pub const LOGOUT: &str = "/admin/logout";
    pub const CHECK: &str = "/admin/check";
    pub const STATS: &str = "/admin/stats";
    pub const BODY_PARTS: &str = "/admin/body-parts";
    pub const ILLNESSES_LIST: &str = "/admin/illnesses-list";

    /// `GET /api/body-part/{slug}`, the slug encoded as one path segment.
    pub fn body_part(slug: &str) -> String {
        format!("/api/body-part/{}", urlencoding::encode(slug))
    }

    /// `GET /admin/{illnesses|doctors|medicines|tips|messages}`
    pub fn listing(resource: AdminResource) -> String {
        format!("/admin/{}", resource.plural())
    }

    /// `POST /admin/{illness|doctor|medicine|tip}`
    pub fn create(resource: AdminResource) -> String {
        format!("/admin/{}", resource.singular())
    }

    /// `DELETE /admin/{illness|doctor|medicine|tip}/{id}`
    pub fn item(resource: AdminResource, id: i64) -> String {
        format!("/admin/{}/{}", resource.singular(), id)
    }

    pub fn mark_read(id: i64) -> String {
        format!("/admin/message/{}/read", id)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiEnvelope<T>> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url, &Headers::new()).await?;
        decode(response)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<ApiEnvelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let body = serde_json::to_string(body).map_err(ClientError::Encode)?;
        tracing::debug!("POST {}", url);
        let response = self.http.post(&url, &body, &Headers::new()).await?;
        decode(response)
    }

    /// POST without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiEnvelope<T>> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.http.post(&url, "", &Headers::new()).await?;
        decode(response)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiEnvelope<T>> {
        let url = self.url(path);
        tracing::debug!("DELETE {}", url);
        let response = self.http.delete(&url, &Headers::new()).await?;
        decode(response)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<ApiEnvelope<T>> {
    match response.json::<ApiEnvelope<T>>() {
        Ok(envelope) => Ok(envelope),
        Err(_) if !response.is_success() => Err(ClientError::Status {
            status: response.status,
        }),
        Err(err) => Err(ClientError::Decode(err)),
    }
}
