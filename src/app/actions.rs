//! Typed UI actions.
//!
//! Rendered fragments never carry inline handlers. Interactive elements
//! declare `data-action` (and `data-id` or another target attribute), and
//! the host forwards those strings to [`UiAction::parse`] and
//! [`App::dispatch`].

use thiserror::Error;
use tracing::debug;

use super::App;
use crate::view_state::{AdminResource, AdminTab, Modal, Page};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Navigate(Page),
    ToggleMenu,
    SelectTab(AdminTab),
    OpenModal(Modal),
    CloseModal(Modal),
    /// Click on an element; closes the overlay if the element is one.
    OverlayClicked(String),
    PartEntered(String),
    PartLeft(String),
    PartClicked(String),
    SubmitContact,
    SubmitLogin,
    Logout,
    TogglePassword,
    SubmitForm(Modal),
    Delete(AdminResource, i64),
    MarkRead(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiActionError {
    #[error("unknown action: {0}")]
    Unknown(String),

    #[error("action {0} needs a target")]
    MissingTarget(String),

    #[error("invalid target {target:?} for action {action}")]
    InvalidTarget { action: String, target: String },
}

impl UiAction {
    /// Parse a `data-action` name and its target.
    pub fn parse(action: &str, target: Option<&str>) -> Result<Self, UiActionError> {
        let required = || {
            target
                .filter(|t| !t.is_empty())
                .ok_or_else(|| UiActionError::MissingTarget(action.to_string()))
        };
        let invalid = |t: &str| UiActionError::InvalidTarget {
            action: action.to_string(),
            target: t.to_string(),
        };
        let id = |t: &str| t.trim().parse::<i64>().map_err(|_| invalid(t));

        let parsed = match action {
            "navigate" => {
                let t = required()?;
                UiAction::Navigate(t.parse().map_err(|_| invalid(t))?)
            }
            "toggle-menu" => UiAction::ToggleMenu,
            "select-tab" => {
                let t = required()?;
                UiAction::SelectTab(t.parse().map_err(|_| invalid(t))?)
            }
            "open-modal" => {
                let t = required()?;
                UiAction::OpenModal(t.parse().map_err(|_| invalid(t))?)
            }
            "close-modal" => {
                let t = required()?;
                UiAction::CloseModal(t.parse().map_err(|_| invalid(t))?)
            }
            "submit-form" => {
                let t = required()?;
                UiAction::SubmitForm(t.parse().map_err(|_| invalid(t))?)
            }
            "overlay-click" => UiAction::OverlayClicked(required()?.to_string()),
            "part-enter" => UiAction::PartEntered(required()?.to_string()),
            "part-leave" => UiAction::PartLeft(required()?.to_string()),
            "part-click" => UiAction::PartClicked(required()?.to_string()),
            "submit-contact" => UiAction::SubmitContact,
            "submit-login" => UiAction::SubmitLogin,
            "logout" => UiAction::Logout,
            "toggle-password" => UiAction::TogglePassword,
            "mark-read" => UiAction::MarkRead(id(required()?)?),
            other => match other.strip_prefix("delete-").and_then(deletable) {
                Some(resource) => UiAction::Delete(resource, id(required()?)?),
                None => return Err(UiActionError::Unknown(other.to_string())),
            },
        };
        Ok(parsed)
    }
}

/// Resource named by the suffix of a `delete-*` action.
fn deletable(singular: &str) -> Option<AdminResource> {
    AdminResource::ALL
        .into_iter()
        .filter(|r| *r != AdminResource::Messages)
        .find(|r| r.singular() == singular)
}

impl App {
    /// Run a UI action to completion.
    pub async fn dispatch(&self, action: UiAction) {
        debug!("Dispatching {:?}", action);
        match action {
            UiAction::Navigate(page) => {
                self.navigate_to(page.name()).await;
            }
            UiAction::ToggleMenu => self.toggle_menu(),
            UiAction::SelectTab(tab) => self.select_tab(tab).await,
            UiAction::OpenModal(modal) => self.open_modal(modal).await,
            UiAction::CloseModal(modal) => self.close_modal(modal),
            UiAction::OverlayClicked(id) => {
                self.overlay_clicked(&id);
            }
            UiAction::PartEntered(id) => self.part_entered(&id),
            UiAction::PartLeft(id) => self.part_left(&id),
            UiAction::PartClicked(id) => self.part_clicked(&id).await,
            UiAction::SubmitContact => {
                self.submit_contact().await;
            }
            UiAction::SubmitLogin => {
                self.submit_login().await;
            }
            UiAction::Logout => self.logout().await,
            UiAction::TogglePassword => self.toggle_login_password(),
            UiAction::SubmitForm(modal) => {
                self.submit_form(modal).await;
            }
            UiAction::Delete(resource, id) => {
                self.delete(resource, id).await;
            }
            UiAction::MarkRead(id) => {
                self.mark_message_read(id).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, ScriptedDialog};
    use crate::adapters::MemoryDocument;
    use crate::config::ClientConfig;
    use crate::traits::Document;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_parse_row_buttons() {
        assert_eq!(
            UiAction::parse("delete-illness", Some("12")),
            Ok(UiAction::Delete(AdminResource::Illnesses, 12))
        );
        assert_eq!(
            UiAction::parse("delete-tip", Some("3")),
            Ok(UiAction::Delete(AdminResource::Tips, 3))
        );
        assert_eq!(UiAction::parse("mark-read", Some("5")), Ok(UiAction::MarkRead(5)));
    }

    #[test]
    fn test_parse_targets() {
        assert_eq!(
            UiAction::parse("navigate", Some("tips")),
            Ok(UiAction::Navigate(Page::Tips))
        );
        assert_eq!(
            UiAction::parse("select-tab", Some("messages")),
            Ok(UiAction::SelectTab(AdminTab::Messages))
        );
        assert_eq!(
            UiAction::parse("open-modal", Some("doctor")),
            Ok(UiAction::OpenModal(Modal::Doctor))
        );
        assert_eq!(UiAction::parse("logout", None), Ok(UiAction::Logout));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            UiAction::parse("delete-message", Some("1")),
            Err(UiActionError::Unknown("delete-message".to_string()))
        );
        assert_eq!(
            UiAction::parse("mark-read", None),
            Err(UiActionError::MissingTarget("mark-read".to_string()))
        );
        assert!(matches!(
            UiAction::parse("delete-doctor", Some("abc")),
            Err(UiActionError::InvalidTarget { .. })
        ));
        assert!(matches!(
            UiAction::parse("navigate", Some("pricing")),
            Err(UiActionError::InvalidTarget { .. })
        ));
    }

    #[tokio::test]
    async fn test_dispatch_rendered_delete_button() {
        let mock = MockHttpClient::new();
        let doc = Arc::new(MemoryDocument::app_shell());
        let dialog = ScriptedDialog::declining();
        let app = App::new(
            ClientConfig::default().with_base_url("http://test.local"),
            Arc::new(mock.clone()),
            doc.clone(),
            Arc::new(dialog.clone()),
        )
        .unwrap();
        mock.set_response(
            "http://test.local/admin/illnesses",
            MockResponse::json(json!({
                "success": true,
                "data": [{ "id": 8, "name": "Migraine", "body_part_name": "Head",
                           "severity": "moderate", "is_active": 1 }],
            })),
        );
        app.select_tab(AdminTab::Illnesses).await;
        let html = doc.inner_html("illnesses-table").unwrap();
        assert!(html.contains(r#"data-action="delete-illness" data-id="8""#));

        let action = UiAction::parse("delete-illness", Some("8")).unwrap();
        app.dispatch(action).await;

        assert_eq!(dialog.prompts().len(), 1);
        assert!(mock.requests_to("DELETE", "http://test.local/admin/illness/8").is_empty());
    }
}
