//! Hover and click on the anatomical body map.
//!
//! Regions that share a `data-part` value (left and right knee, say) act as
//! one: hovering either highlights both.

use tracing::debug;

use super::App;
use crate::bindings::Binding;

const HIGHLIGHT_FILL: &str = "rgba(0,180,216,0.25)";
const IDLE_FILL: &str = "transparent";
const IDLE_LABEL: &str = "Hover to select";

impl App {
    pub fn part_entered(&self, region_id: &str) {
        let Some(part) = self.document.attr(region_id, "data-part") else {
            return;
        };
        let label = self
            .document
            .attr(region_id, "data-label")
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| part.clone());
        self.document.set_text(self.id(Binding::HoverLabel), &label);
        self.fill_part(&part, HIGHLIGHT_FILL);
    }

    pub fn part_left(&self, region_id: &str) {
        let Some(part) = self.document.attr(region_id, "data-part") else {
            return;
        };
        self.document
            .set_text(self.id(Binding::HoverLabel), IDLE_LABEL);
        self.fill_part(&part, IDLE_FILL);
    }

    /// Open the detail page of the clicked region's body part.
    pub async fn part_clicked(&self, region_id: &str) {
        match self.document.attr(region_id, "data-part") {
            Some(part) => self.load_illness_page(&part).await,
            None => debug!("Click on #{} outside any body part", region_id),
        }
    }

    fn fill_part(&self, part: &str, fill: &str) {
        for id in self.document.ids_with_attr("data-part", part) {
            self.document.set_style(&id, "fill", fill);
        }
    }
}
