//! Page router.

use tracing::{debug, info};

use super::App;
use crate::bindings::Binding;
use crate::view_state::Page;

impl App {
    /// Show the page called `name` and run its loader.
    ///
    /// Unknown names and pages missing from the document are ignored and
    /// leave the document untouched. Returns whether the page was shown.
    pub async fn navigate_to(&self, name: &str) -> bool {
        let page: Page = match name.parse() {
            Ok(page) => page,
            Err(err) => {
                debug!("Ignoring navigation: {}", err);
                return false;
            }
        };
        let page_id = page.element_id();
        if !self.document.contains(&page_id) {
            debug!("Ignoring navigation to {}: #{} not in document", page, page_id);
            return false;
        }

        self.activate_page(page, &page_id);
        info!("Navigated to {}", page);

        match page {
            Page::Tips => {
                let loaded = self.state().flags.tips_loaded();
                if !loaded {
                    self.load_health_tips().await;
                }
            }
            Page::About => self.reveal_sections(),
            Page::Admin => self.load_admin_dashboard().await,
            _ => {}
        }
        true
    }

    fn activate_page(&self, page: Page, page_id: &str) {
        let doc = &self.document;
        for id in doc.ids_with_class("page") {
            doc.remove_class(&id, "active");
        }
        for id in doc.ids_with_class("nav-link") {
            doc.remove_class(&id, "active");
        }

        doc.add_class(page_id, "active");
        if let Some(link) = doc.ids_with_attr("data-page", page.name()).first() {
            doc.add_class(link, "active");
        }

        let chrome = page.shows_chrome();
        doc.set_visible(self.id(Binding::MainHeader), chrome);
        doc.set_visible(self.id(Binding::MainFooter), chrome);
        doc.remove_class(self.id(Binding::MainNav), "open");
        doc.scroll_to_top();

        self.state().current = page;
    }

    /// Open or close the mobile navigation drawer.
    pub fn toggle_menu(&self) {
        self.document.toggle_class(self.id(Binding::MainNav), "open");
    }

    /// Mark every scroll-reveal section as revealed.
    pub fn reveal_sections(&self) {
        for id in self.document.ids_with_class("scroll-reveal") {
            self.document.add_class(&id, "revealed");
        }
    }
}
