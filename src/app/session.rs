//! Startup, login and logout.
//!
//! The session itself lives in a backend cookie. The client only mirrors it:
//! a signed-in admin sees the admin nav entry and their name in the sidebar.

use tracing::{info, warn};

use super::App;
use crate::api::{paths, Ack};
use crate::bindings::{fields, Binding};
use crate::models::LoginForm;
use crate::render::esc_html;
use crate::view_state::{AdminTab, ToastKind};

impl App {
    /// One-time startup: date, scroll reveal, session probe.
    pub async fn start(&self) {
        self.update_topbar_date();
        self.reveal_sections();
        self.check_session().await;
    }

    /// Ask the backend whether a session cookie is live. Returns whether the
    /// visitor is signed in; errors count as signed out.
    pub async fn check_session(&self) -> bool {
        let result = self.api.get::<serde_json::Value>(paths::CHECK).await;
        match result {
            Ok(envelope) if envelope.success => {
                let name = envelope.name.unwrap_or_default();
                info!("Session active for {:?}", name);
                self.show_admin_entry(&name);
                true
            }
            Ok(_) => false,
            Err(err) => {
                warn!("Session check failed ({}): {}", err.kind(), err);
                false
            }
        }
    }

    fn show_admin_entry(&self, name: &str) {
        self.document.set_inner_html(
            self.id(Binding::AdminUserInfo),
            &format!(
                "Logged in as<br><strong style=\"color:white\">{}</strong>",
                esc_html(name)
            ),
        );
        self.document
            .set_visible(self.id(Binding::AdminNavLink), true);
    }

    /// Read the login form and sign in.
    pub async fn submit_login(&self) -> bool {
        let form = LoginForm::from_values(|id| self.field_value(id));
        self.login(&form).await
    }

    /// Sign in. On success the admin dashboard opens on its overview tab;
    /// otherwise the error is shown under the form and the page stays put.
    pub async fn login(&self, form: &LoginForm) -> bool {
        let error = self.id(Binding::LoginError);
        self.document.set_visible(error, false);

        let message = match self.api.post::<_, serde_json::Value>(paths::LOGIN, form).await {
            Ok(envelope) if envelope.success => {
                let name = envelope.name.unwrap_or_default();
                info!("Signed in as {:?}", name);
                self.show_admin_entry(&name);
                self.navigate_to("admin").await;
                self.select_tab(AdminTab::Dashboard).await;
                return true;
            }
            Ok(envelope) => envelope
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Invalid credentials".to_string()),
            Err(err) => {
                warn!("Login request failed ({}): {}", err.kind(), err);
                format!("Connection error: {}", err.user_message())
            }
        };

        warn!("Login rejected: {}", message);
        self.document.set_text(error, &message);
        self.document.set_visible(error, true);
        false
    }

    /// Sign out. The local view is reset even when the request fails.
    pub async fn logout(&self) {
        let result = self.api.post_empty::<serde_json::Value>(paths::LOGOUT).await;
        if let Err(err) = result.and_then(|envelope: Ack| envelope.ensure_success("Logout failed"))
        {
            warn!("Logout request failed ({}): {}", err.kind(), err);
        }

        self.document
            .set_visible(self.id(Binding::AdminNavLink), false);
        self.navigate_to("home").await;
        self.show_toast("Logged out successfully", ToastKind::Info);
    }

    /// Flip a password field between hidden and plain text.
    pub fn toggle_password_visibility(&self, input_id: &str, button_id: &str) {
        let hidden = self.document.attr(input_id, "type").as_deref() == Some("password");
        if hidden {
            self.document.set_attr(input_id, "type", "text");
            self.document.set_text(button_id, "🙈");
        } else {
            self.document.set_attr(input_id, "type", "password");
            self.document.set_text(button_id, "👁");
        }
    }

    /// [`App::toggle_password_visibility`] on the login form.
    pub fn toggle_login_password(&self) {
        self.toggle_password_visibility(fields::LOGIN_PASSWORD, fields::LOGIN_PASSWORD_TOGGLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, ScriptedDialog};
    use crate::adapters::MemoryDocument;
    use crate::config::ClientConfig;
    use crate::traits::{Document, HttpError};
    use crate::view_state::Page;
    use serde_json::json;
    use std::sync::Arc;

    fn app(mock: &MockHttpClient, doc: &Arc<MemoryDocument>) -> App {
        App::new(
            ClientConfig::default().with_base_url("http://test.local"),
            Arc::new(mock.clone()),
            doc.clone(),
            Arc::new(ScriptedDialog::accepting()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_active_session_shows_admin_entry() {
        let mock = MockHttpClient::new();
        let doc = Arc::new(MemoryDocument::app_shell());
        mock.set_response(
            "http://test.local/admin/check",
            MockResponse::json(json!({ "success": true, "name": "<Ada>" })),
        );
        let app = app(&mock, &doc);

        app.start().await;

        assert!(doc.is_visible("admin-nav-link"));
        assert_eq!(
            doc.inner_html("admin-user-info").unwrap(),
            "Logged in as<br><strong style=\"color:white\">&lt;Ada&gt;</strong>"
        );
        assert!(!doc.text("topbar-date").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_session_keeps_admin_hidden() {
        let mock = MockHttpClient::new();
        let doc = Arc::new(MemoryDocument::app_shell());
        mock.set_response(
            "http://test.local/admin/check",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
        let app = app(&mock, &doc);

        assert!(!app.check_session().await);
        assert!(!doc.is_visible("admin-nav-link"));
    }

    #[tokio::test]
    async fn test_login_transport_error() {
        let mock = MockHttpClient::new();
        let doc = Arc::new(MemoryDocument::app_shell());
        mock.set_response(
            "http://test.local/admin/login",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
        let app = app(&mock, &doc);
        app.navigate_to("login").await;

        assert!(!app.login(&LoginForm::new("a@b.c", "pw")).await);

        assert!(doc.text("login-error").unwrap().starts_with("Connection error: "));
        assert!(doc.is_visible("login-error"));
        assert_eq!(app.current_page(), Page::Login);
    }

    #[tokio::test]
    async fn test_logout_resets_view() {
        let mock = MockHttpClient::new();
        let doc = Arc::new(MemoryDocument::app_shell());
        mock.set_response(
            "http://test.local/admin/logout",
            MockResponse::json(json!({ "success": true })),
        );
        let app = app(&mock, &doc);
        doc.set_visible("admin-nav-link", true);

        app.logout().await;

        assert!(!doc.is_visible("admin-nav-link"));
        assert_eq!(app.current_page(), Page::Home);
        let toast = app.toast().unwrap();
        assert_eq!(toast.message, "Logged out successfully");
        assert_eq!(toast.kind, ToastKind::Info);
    }

    #[test]
    fn test_password_toggle() {
        let mock = MockHttpClient::new();
        let doc = Arc::new(MemoryDocument::app_shell());
        let app = app(&mock, &doc);

        app.toggle_login_password();
        assert_eq!(doc.attr(fields::LOGIN_PASSWORD, "type").as_deref(), Some("text"));
        assert_eq!(doc.text(fields::LOGIN_PASSWORD_TOGGLE).unwrap(), "🙈");

        app.toggle_login_password();
        assert_eq!(doc.attr(fields::LOGIN_PASSWORD, "type").as_deref(), Some("password"));
        assert_eq!(doc.text(fields::LOGIN_PASSWORD_TOGGLE).unwrap(), "👁");
    }
}
