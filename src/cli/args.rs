//! Command-line argument parsing for the headless runner.
//!
//! This module turns the process arguments into a [`CliCommand`]. Flags win
//! over commands; anything unparseable falls back to [`CliCommand::Help`].

use crate::view_state::{AdminResource, AdminTab};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Navigate to a page by name
    Page(String),
    /// Open the detail page of a body part
    Part(String),
    /// Load the health tips page
    Tips,
    /// Send a contact message
    Contact {
        name: String,
        email: String,
        message: String,
    },
    /// Sign in and open an admin tab
    Admin {
        email: String,
        password: String,
        tab: AdminTab,
    },
    /// Sign in and delete one record after confirmation
    AdminDelete {
        email: String,
        password: String,
        resource: AdminResource,
        id: i64,
    },
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use medref::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["medref".to_string(), "part".to_string(), "knee".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Part("knee".to_string()));
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    for arg in &args {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }

    let words: Vec<&str> = args.iter().map(String::as_str).collect();
    match words.as_slice() {
        ["page", name] => CliCommand::Page(name.to_string()),
        ["part", slug] => CliCommand::Part(slug.to_string()),
        ["tips"] => CliCommand::Tips,
        ["contact", name, email, message] => CliCommand::Contact {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        },
        ["admin", email, password] => CliCommand::Admin {
            email: email.to_string(),
            password: password.to_string(),
            tab: AdminTab::Dashboard,
        },
        ["admin", email, password, "delete", table, id] => {
            let resource = table
                .parse::<AdminTab>()
                .ok()
                .and_then(AdminTab::resource)
                .filter(|r| *r != AdminResource::Messages);
            match (resource, id.parse::<i64>()) {
                (Some(resource), Ok(id)) => CliCommand::AdminDelete {
                    email: email.to_string(),
                    password: password.to_string(),
                    resource,
                    id,
                },
                _ => CliCommand::Help,
            }
        }
        ["admin", email, password, tab] => match tab.parse() {
            Ok(tab) => CliCommand::Admin {
                email: email.to_string(),
                password: password.to_string(),
                tab,
            },
            Err(_) => CliCommand::Help,
        },
        _ => CliCommand::Help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["medref".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["page", "home", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Help);
    }

    #[test]
    fn test_parse_page_and_part() {
        assert_eq!(parse(&["page", "about"]), CliCommand::Page("about".to_string()));
        assert_eq!(parse(&["part", "knee"]), CliCommand::Part("knee".to_string()));
        assert_eq!(parse(&["tips"]), CliCommand::Tips);
    }

    #[test]
    fn test_parse_contact() {
        assert_eq!(
            parse(&["contact", "Ana", "ana@example.com", "Hello"]),
            CliCommand::Contact {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                message: "Hello".to_string(),
            }
        );
        assert_eq!(parse(&["contact", "Ana"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_admin_tab() {
        assert_eq!(
            parse(&["admin", "a@b.c", "pw", "messages"]),
            CliCommand::Admin {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
                tab: AdminTab::Messages,
            }
        );
        assert_eq!(parse(&["admin", "a@b.c", "pw", "billing"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_admin_delete() {
        assert_eq!(
            parse(&["admin", "a@b.c", "pw", "delete", "doctors", "4"]),
            CliCommand::AdminDelete {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
                resource: AdminResource::Doctors,
                id: 4,
            }
        );
        assert_eq!(parse(&["admin", "a@b.c", "pw", "delete", "messages", "4"]), CliCommand::Help);
        assert_eq!(parse(&["admin", "a@b.c", "pw", "delete", "doctors", "x"]), CliCommand::Help);
    }
}
