//! Typed view bindings.
//!
//! Every singleton element the client core reads or writes is named by a
//! [`Binding`] variant instead of a string scattered through the handlers.
//! [`Bindings::resolve`] runs once at startup and reports every id missing
//! from the host document, so a broken page shell fails loudly instead of
//! silently dropping writes later.
//!
//! Elements that come in families (pages, nav links, admin tabs, modals,
//! body-map regions) are addressed through their typed owners in
//! `view_state` and `app::modal`; form fields are listed in [`fields`].

use std::collections::HashMap;

use crate::error::ViewError;
use crate::traits::Document;

/// A singleton element in the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    MainHeader,
    MainFooter,
    MainNav,
    HoverLabel,
    IllnessContent,
    IllnessTitle,
    IllnessSubtitle,
    PartBadge,
    TipsContent,
    ContactForm,
    ContactSubmit,
    ContactSuccess,
    LoginError,
    AdminNavLink,
    AdminUserInfo,
    AdminPageTitle,
    TopbarDate,
    StatIllnesses,
    StatDoctors,
    StatMedicines,
    StatMessages,
    MessageBadge,
    IllnessesTable,
    DoctorsTable,
    MedicinesTable,
    TipsTable,
    MessagesTable,
    MedicineUploadGroup,
    Toast,
}

impl Binding {
    /// Every binding, in resolution order.
    pub const ALL: [Binding; 29] = [
        Binding::MainHeader,
        Binding::MainFooter,
        Binding::MainNav,
        Binding::HoverLabel,
        Binding::IllnessContent,
        Binding::IllnessTitle,
        Binding::IllnessSubtitle,
        Binding::PartBadge,
        Binding::TipsContent,
        Binding::ContactForm,
        Binding::ContactSubmit,
        Binding::ContactSuccess,
        Binding::LoginError,
        Binding::AdminNavLink,
        Binding::AdminUserInfo,
        Binding::AdminPageTitle,
        Binding::TopbarDate,
        Binding::StatIllnesses,
        Binding::StatDoctors,
        Binding::StatMedicines,
        Binding::StatMessages,
        Binding::MessageBadge,
        Binding::IllnessesTable,
        Binding::DoctorsTable,
        Binding::MedicinesTable,
        Binding::TipsTable,
        Binding::MessagesTable,
        Binding::MedicineUploadGroup,
        Binding::Toast,
    ];

    /// Element id in the standard page shell.
    pub const fn default_id(self) -> &'static str {
        match self {
            Binding::MainHeader => "main-header",
            Binding::MainFooter => "main-footer",
            Binding::MainNav => "main-nav",
            Binding::HoverLabel => "hover-label",
            Binding::IllnessContent => "illness-content",
            Binding::IllnessTitle => "illness-page-title",
            Binding::IllnessSubtitle => "illness-page-sub",
            Binding::PartBadge => "part-badge",
            Binding::TipsContent => "tips-content",
            Binding::ContactForm => "contact-form",
            Binding::ContactSubmit => "contact-submit",
            Binding::ContactSuccess => "contact-success",
            Binding::LoginError => "login-error",
            Binding::AdminNavLink => "admin-nav-link",
            Binding::AdminUserInfo => "admin-user-info",
            Binding::AdminPageTitle => "admin-page-title",
            Binding::TopbarDate => "topbar-date",
            Binding::StatIllnesses => "stat-illnesses",
            Binding::StatDoctors => "stat-doctors",
            Binding::StatMedicines => "stat-medicines",
            Binding::StatMessages => "stat-messages",
            Binding::MessageBadge => "msg-badge",
            Binding::IllnessesTable => "illnesses-table",
            Binding::DoctorsTable => "doctors-table",
            Binding::MedicinesTable => "medicines-table",
            Binding::TipsTable => "tips-table",
            Binding::MessagesTable => "messages-table",
            Binding::MedicineUploadGroup => "med-upload-group",
            Binding::Toast => "toast",
        }
    }
}

/// Form field ids.
pub mod fields {
    pub const CONTACT_NAME: &str = "contact-name";
    pub const CONTACT_EMAIL: &str = "contact-email";
    pub const CONTACT_MESSAGE: &str = "contact-message";

    pub const LOGIN_FORM: &str = "login-form";
    pub const LOGIN_EMAIL: &str = "admin-email";
    pub const LOGIN_PASSWORD: &str = "admin-password";
    pub const LOGIN_PASSWORD_TOGGLE: &str = "admin-password-toggle";

    pub const ILLNESS_BODY_PART: &str = "ill-body-part";
    pub const ILLNESS_NAME: &str = "ill-name";
    pub const ILLNESS_DESCRIPTION: &str = "ill-description";
    pub const ILLNESS_SYMPTOMS: &str = "ill-symptoms";
    pub const ILLNESS_CARE: &str = "ill-care";
    pub const ILLNESS_SEVERITY: &str = "ill-severity";

    pub const DOCTOR_BODY_PART: &str = "doc-body-part";
    pub const DOCTOR_NAME: &str = "doc-name";
    pub const DOCTOR_SPECIALIZATION: &str = "doc-spec";
    pub const DOCTOR_HOSPITAL: &str = "doc-hospital";
    pub const DOCTOR_PHONE: &str = "doc-phone";
    pub const DOCTOR_EMAIL: &str = "doc-email";
    pub const DOCTOR_ADDRESS: &str = "doc-address";
    pub const DOCTOR_EXPERIENCE: &str = "doc-exp";

    pub const MEDICINE_ILLNESS: &str = "med-illness";
    pub const MEDICINE_NAME: &str = "med-name";
    pub const MEDICINE_DESCRIPTION: &str = "med-description";
    pub const MEDICINE_DOSAGE: &str = "med-dosage";
    pub const MEDICINE_SIDE_EFFECTS: &str = "med-sides";
    pub const MEDICINE_OTC: &str = "med-otc";

    pub const TIP_CATEGORY: &str = "tip-category";
    pub const TIP_TITLE: &str = "tip-title";
    pub const TIP_DESCRIPTION: &str = "tip-description";
    pub const TIP_ICON: &str = "tip-icon";
}

/// Resolved binding map.
#[derive(Debug, Clone)]
pub struct Bindings {
    ids: HashMap<Binding, String>,
}

impl Bindings {
    /// Resolve every binding against the document, failing with the full
    /// list of missing ids.
    pub fn resolve(document: &dyn Document) -> Result<Self, ViewError> {
        Self::resolve_with(document, &HashMap::new())
    }

    /// Resolve with per-binding id overrides for hosts whose shell uses
    /// different ids.
    pub fn resolve_with(
        document: &dyn Document,
        overrides: &HashMap<Binding, String>,
    ) -> Result<Self, ViewError> {
        let mut ids = HashMap::with_capacity(Binding::ALL.len());
        let mut missing = Vec::new();

        for binding in Binding::ALL {
            let id = overrides
                .get(&binding)
                .cloned()
                .unwrap_or_else(|| binding.default_id().to_string());
            if !document.contains(&id) {
                missing.push(id.clone());
            }
            ids.insert(binding, id);
        }

        if !missing.is_empty() {
            return Err(ViewError::MissingElements(missing));
        }

        tracing::debug!("Resolved {} view bindings", ids.len());
        Ok(Self { ids })
    }

    /// Element id for a binding.
    pub fn id(&self, binding: Binding) -> &str {
        self.ids
            .get(&binding)
            .map(String::as_str)
            .unwrap_or_else(|| binding.default_id())
    }
}
