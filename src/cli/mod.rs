//! CLI module for the headless runner.
//!
//! The runner drives the client core against a live backend with an
//! in-memory document, then prints what a browser would have shown:
//!
//! ```ignore
//! use medref::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! let report = run_cli_command(&app, &command).await;
//! print!("{}", report);
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_version_command, VERSION};

use std::fmt::Write;

use crate::app::App;
use crate::bindings::Binding;
use crate::models::{ContactForm, LoginForm};
use crate::view_state::{AdminResource, AdminTab, Page};

pub const USAGE: &str = "\
Usage: medref [--version|-V] [--help|-h] <command>

Commands:
  page <name>                         Navigate to a page
  part <slug>                         Show illnesses and doctors for a body part
  tips                                Show health tips
  contact <name> <email> <message>    Send a contact message
  admin <email> <password> [tab]      Sign in and open an admin tab
  admin <email> <password> delete <tab> <id>
                                      Sign in and delete a record (asks first)

Environment:
  MEDREF_API_URL       Backend base URL
  MEDREF_TOAST_MS      Toast display time in milliseconds
  MEDREF_TIMEOUT_SECS  Request timeout in seconds (0 disables)
  RUST_LOG             Log filter (default medref=info)
";

/// Run a command against a started app and describe the resulting view.
///
/// `Version` and `Help` never reach the app; the caller handles them.
pub async fn run_cli_command(app: &App, command: &CliCommand) -> String {
    let container = match command {
        CliCommand::Version | CliCommand::Help => return USAGE.to_string(),
        CliCommand::Page(name) => {
            app.navigate_to(name).await;
            match app.current_page() {
                Page::Tips => Some(Binding::TipsContent),
                _ => None,
            }
        }
        CliCommand::Part(slug) => {
            app.load_illness_page(slug).await;
            Some(Binding::IllnessContent)
        }
        CliCommand::Tips => {
            app.navigate_to(Page::Tips.name()).await;
            Some(Binding::TipsContent)
        }
        CliCommand::Contact {
            name,
            email,
            message,
        } => {
            let form = ContactForm {
                name: name.clone(),
                email: email.clone(),
                message: message.clone(),
            };
            app.send_contact(&form).await;
            None
        }
        CliCommand::Admin {
            email,
            password,
            tab,
        } => {
            if app.login(&LoginForm::new(email.as_str(), password.as_str())).await
                && *tab != AdminTab::Dashboard
            {
                app.select_tab(*tab).await;
            }
            match app.current_page() {
                Page::Admin => tab.resource().map(|r| r.table()),
                _ => Some(Binding::LoginError),
            }
        }
        CliCommand::AdminDelete {
            email,
            password,
            resource,
            id,
        } => {
            if app.login(&LoginForm::new(email.as_str(), password.as_str())).await {
                app.select_tab(tab_of(*resource)).await;
                app.delete(*resource, *id).await;
            }
            match app.current_page() {
                Page::Admin => Some(resource.table()),
                _ => Some(Binding::LoginError),
            }
        }
    };

    let mut report = String::new();
    let _ = writeln!(report, "page: {}", app.current_page());
    if let Some(binding) = container {
        let id = app.bound_id(binding);
        let html = app.document().inner_html(id).unwrap_or_default();
        let _ = writeln!(report, "#{}:\n{}", id, html);
    }
    if app.current_page() == Page::Admin {
        for stat in [
            Binding::StatIllnesses,
            Binding::StatDoctors,
            Binding::StatMedicines,
            Binding::StatMessages,
        ] {
            let id = app.bound_id(stat);
            let value = app.document().text(id).unwrap_or_default();
            let _ = writeln!(report, "{}: {}", id, value);
        }
    }
    if let Some(toast) = app.toast() {
        let _ = writeln!(report, "toast ({}): {}", toast.kind, toast.message);
    }
    report
}

fn tab_of(resource: AdminResource) -> AdminTab {
    AdminTab::ALL
        .into_iter()
        .find(|tab| tab.resource() == Some(resource))
        .unwrap_or(AdminTab::Dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, ScriptedDialog};
    use crate::adapters::MemoryDocument;
    use crate::config::ClientConfig;
    use serde_json::json;
    use std::sync::Arc;

    fn app(mock: &MockHttpClient) -> App {
        App::new(
            ClientConfig::default().with_base_url("http://test.local"),
            Arc::new(mock.clone()),
            Arc::new(MemoryDocument::app_shell()),
            Arc::new(ScriptedDialog::accepting()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_help_touches_nothing() {
        let mock = MockHttpClient::new();
        let app = app(&mock);
        let report = run_cli_command(&app, &CliCommand::Help).await;
        assert!(report.starts_with("Usage: medref"));
        assert!(mock.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_tips_report() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://test.local/api/health-tips",
            MockResponse::json(json!({ "success": true, "data": {} })),
        );
        let app = app(&mock);

        let report = run_cli_command(&app, &CliCommand::Tips).await;

        assert!(report.starts_with("page: tips\n#tips-content:\n"));
        assert!(report.contains("No health tips available yet."));
    }

    #[tokio::test]
    async fn test_failed_admin_login_reports_error() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "http://test.local/admin/login",
            MockResponse::json(json!({ "success": false, "message": "Invalid credentials" })),
        );
        let app = app(&mock);
        let command = CliCommand::Admin {
            email: "a@b.c".to_string(),
            password: "nope".to_string(),
            tab: AdminTab::Doctors,
        };

        let report = run_cli_command(&app, &command).await;

        assert!(report.contains("#login-error:\nInvalid credentials"));
        assert!(mock.requests_to("GET", "http://test.local/admin/doctors").is_empty());
    }

    fn admin_backend(mock: &MockHttpClient) {
        mock.set_response(
            "http://test.local/admin/login",
            MockResponse::json(json!({ "success": true })),
        );
        mock.set_response(
            "http://test.local/admin/stats",
            MockResponse::json(json!({ "success": true, "data": {} })),
        );
        mock.set_response(
            "http://test.local/admin/doctors",
            MockResponse::json(json!({ "success": true, "data": [] })),
        );
        mock.set_response(
            "http://test.local/admin/doctor/4",
            MockResponse::json(json!({ "success": true })),
        );
    }

    fn delete_doctor_command() -> CliCommand {
        CliCommand::AdminDelete {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
            resource: AdminResource::Doctors,
            id: 4,
        }
    }

    #[tokio::test]
    async fn test_admin_delete_asks_before_deleting() {
        let mock = MockHttpClient::new();
        admin_backend(&mock);
        let dialog = ScriptedDialog::accepting();
        let app = App::new(
            ClientConfig::default().with_base_url("http://test.local"),
            Arc::new(mock.clone()),
            Arc::new(MemoryDocument::app_shell()),
            Arc::new(dialog.clone()),
        )
        .unwrap();

        let report = run_cli_command(&app, &delete_doctor_command()).await;

        assert_eq!(dialog.prompts().len(), 1);
        assert_eq!(mock.requests_to("DELETE", "http://test.local/admin/doctor/4").len(), 1);
        assert!(report.contains("#doctors-table:"));
        assert!(report.contains("toast (success)"));
    }

    #[tokio::test]
    async fn test_admin_delete_declined_on_console() {
        let mock = MockHttpClient::new();
        admin_backend(&mock);
        let app = App::new(
            ClientConfig::default().with_base_url("http://test.local"),
            Arc::new(mock.clone()),
            Arc::new(MemoryDocument::app_shell()),
            Arc::new(crate::adapters::ConsoleDialog::assume(false)),
        )
        .unwrap();

        run_cli_command(&app, &delete_doctor_command()).await;

        assert!(mock.requests_to("DELETE", "http://test.local/admin/doctor/4").is_empty());
    }
}
