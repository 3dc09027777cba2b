//! Top-level pages of the single-page app.

use std::fmt;
use std::str::FromStr;

/// A page section of the document. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Tips,
    Contact,
    Illness,
    Login,
    Admin,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Tips,
        Page::Contact,
        Page::Illness,
        Page::Login,
        Page::Admin,
    ];

    /// Name used in navigation links (`data-page`).
    pub const fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Tips => "tips",
            Page::Contact => "contact",
            Page::Illness => "illness",
            Page::Login => "login",
            Page::Admin => "admin",
        }
    }

    /// Id of the page section element.
    pub fn element_id(self) -> String {
        format!("page-{}", self.name())
    }

    /// Content pages keep the site header and footer visible.
    pub const fn shows_chrome(self) -> bool {
        matches!(self, Page::Home | Page::About | Page::Tips | Page::Contact)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for page names that are not part of the app.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.name() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for page in Page::ALL {
            assert_eq!(page.name().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn test_unknown_page() {
        assert_eq!(
            "billing".parse::<Page>(),
            Err(UnknownPage("billing".to_string()))
        );
        assert_eq!(UnknownPage("billing".to_string()).to_string(), "unknown page: billing");
    }

    #[test]
    fn test_chrome_pages() {
        assert!(Page::Home.shows_chrome());
        assert!(Page::Contact.shows_chrome());
        assert!(!Page::Illness.shows_chrome());
        assert!(!Page::Admin.shows_chrome());
        assert!(!Page::Login.shows_chrome());
    }

    #[test]
    fn test_element_id() {
        assert_eq!(Page::Tips.element_id(), "page-tips");
    }
}
