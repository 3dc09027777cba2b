//! Admin dashboard: tabs, stats and the top-bar date.

use tracing::{debug, warn};

use super::App;
use crate::api::paths;
use crate::bindings::Binding;
use crate::models::AdminStats;
use crate::render::dates::topbar_date;
use crate::view_state::AdminTab;

impl App {
    /// Runs on every entry to the admin page.
    pub async fn load_admin_dashboard(&self) {
        self.update_topbar_date();
        self.load_admin_stats().await;
    }

    pub fn update_topbar_date(&self) {
        let today = chrono::Local::now().date_naive();
        self.document
            .set_text(self.id(Binding::TopbarDate), &topbar_date(today));
    }

    /// Refresh the four counters and the unread badge. Failures are only
    /// logged; the counters keep their previous values.
    pub async fn load_admin_stats(&self) {
        let result = self
            .api
            .get::<AdminStats>(paths::STATS)
            .await
            .and_then(|envelope| envelope.into_data("Could not load stats"));

        let stats = match result {
            Ok(stats) => stats,
            Err(err) => {
                warn!("Loading admin stats failed ({}): {}", err.kind(), err);
                return;
            }
        };

        let doc = &self.document;
        doc.set_text(self.id(Binding::StatIllnesses), &stats.illnesses.to_string());
        doc.set_text(self.id(Binding::StatDoctors), &stats.doctors.to_string());
        doc.set_text(self.id(Binding::StatMedicines), &stats.medicines.to_string());
        doc.set_text(self.id(Binding::StatMessages), &stats.messages.to_string());

        let badge = self.id(Binding::MessageBadge);
        doc.set_text(badge, &stats.messages.to_string());
        doc.set_visible(badge, stats.messages > 0);
        debug!("Stats refreshed: {:?}", stats);
    }

    /// Switch the active admin tab. Table data loads only when its flag is
    /// unset, except tips and messages which reload on every visit.
    pub async fn select_tab(&self, tab: AdminTab) {
        let doc = &self.document;
        for id in doc.ids_with_class("admin-tab") {
            doc.remove_class(&id, "active");
        }
        for id in doc.ids_with_class("sidebar-link") {
            doc.remove_class(&id, "active");
        }
        doc.add_class(&tab.sidebar_id(), "active");
        doc.add_class(&tab.panel_id(), "active");
        doc.set_text(self.id(Binding::AdminPageTitle), tab.title());

        let needs_load = {
            let mut state = self.state();
            state.active_tab = tab;
            tab.resource().filter(|r| state.flags.needs_load(*r))
        };
        debug!("Selected admin tab {}", tab);

        if let Some(resource) = needs_load {
            self.load_resource(resource).await;
        }
    }

    /// [`App::select_tab`] by name. Unknown names are ignored.
    pub async fn select_tab_named(&self, name: &str) -> bool {
        match name.parse::<AdminTab>() {
            Ok(tab) => {
                self.select_tab(tab).await;
                true
            }
            Err(err) => {
                debug!("Ignoring tab selection: {}", err);
                false
            }
        }
    }
}
