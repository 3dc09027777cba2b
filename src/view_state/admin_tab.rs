//! Admin dashboard tabs and the resources they manage.

use std::fmt;
use std::str::FromStr;

use crate::bindings::Binding;

/// A CRUD-managed admin resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminResource {
    Illnesses,
    Doctors,
    Medicines,
    Tips,
    Messages,
}

impl AdminResource {
    pub const ALL: [AdminResource; 5] = [
        AdminResource::Illnesses,
        AdminResource::Doctors,
        AdminResource::Medicines,
        AdminResource::Tips,
        AdminResource::Messages,
    ];

    /// Plural path segment of the list endpoint (`/admin/{plural}`).
    pub const fn plural(self) -> &'static str {
        match self {
            AdminResource::Illnesses => "illnesses",
            AdminResource::Doctors => "doctors",
            AdminResource::Medicines => "medicines",
            AdminResource::Tips => "tips",
            AdminResource::Messages => "messages",
        }
    }

    /// Singular path segment of the create/delete endpoints.
    pub const fn singular(self) -> &'static str {
        match self {
            AdminResource::Illnesses => "illness",
            AdminResource::Doctors => "doctor",
            AdminResource::Medicines => "medicine",
            AdminResource::Tips => "tip",
            AdminResource::Messages => "message",
        }
    }

    /// Container the resource table renders into.
    pub const fn table(self) -> Binding {
        match self {
            AdminResource::Illnesses => Binding::IllnessesTable,
            AdminResource::Doctors => Binding::DoctorsTable,
            AdminResource::Medicines => Binding::MedicinesTable,
            AdminResource::Tips => Binding::TipsTable,
            AdminResource::Messages => Binding::MessagesTable,
        }
    }

    /// Tips and messages change from other flows, so their tables are
    /// refetched on every visit.
    pub const fn always_reload(self) -> bool {
        matches!(self, AdminResource::Tips | AdminResource::Messages)
    }
}

/// A tab of the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Illnesses,
    Doctors,
    Medicines,
    Tips,
    Messages,
}

impl AdminTab {
    pub const ALL: [AdminTab; 6] = [
        AdminTab::Dashboard,
        AdminTab::Illnesses,
        AdminTab::Doctors,
        AdminTab::Medicines,
        AdminTab::Tips,
        AdminTab::Messages,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "dashboard",
            AdminTab::Illnesses => "illnesses",
            AdminTab::Doctors => "doctors",
            AdminTab::Medicines => "medicines",
            AdminTab::Tips => "tips",
            AdminTab::Messages => "messages",
        }
    }

    /// Title shown above the active panel.
    pub const fn title(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard Overview",
            AdminTab::Illnesses => "Manage Illnesses",
            AdminTab::Doctors => "Manage Doctors",
            AdminTab::Medicines => "Manage Medicines",
            AdminTab::Tips => "Manage Health Tips",
            AdminTab::Messages => "Contact Messages",
        }
    }

    /// Sidebar link id.
    pub fn sidebar_id(self) -> String {
        format!("atab-{}", self.name())
    }

    /// Panel id. The tips panel is suffixed to avoid clashing with the
    /// public tips page content.
    pub fn panel_id(self) -> String {
        match self {
            AdminTab::Tips => "tab-tips-admin".to_string(),
            other => format!("tab-{}", other.name()),
        }
    }

    /// Resource whose table lives on this tab.
    pub const fn resource(self) -> Option<AdminResource> {
        match self {
            AdminTab::Dashboard => None,
            AdminTab::Illnesses => Some(AdminResource::Illnesses),
            AdminTab::Doctors => Some(AdminResource::Doctors),
            AdminTab::Medicines => Some(AdminResource::Medicines),
            AdminTab::Tips => Some(AdminResource::Tips),
            AdminTab::Messages => Some(AdminResource::Messages),
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for tab names that are not on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown admin tab: {0}")]
pub struct UnknownTab(pub String);

impl FromStr for AdminTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminTab::ALL
            .into_iter()
            .find(|tab| tab.name() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}
