//! Create-form overlays and their dropdowns.

use tracing::{debug, warn};

use super::App;
use crate::api::paths;
use crate::bindings::{fields, Binding};
use crate::models::{BodyPart, IllnessOption};
use crate::render::options;
use crate::view_state::Modal;

impl App {
    /// Open a create form and fill its dropdown from the backend.
    ///
    /// The overlay opens before the options arrive; a failed fetch leaves
    /// the dropdown as it was.
    pub async fn open_modal(&self, modal: Modal) {
        self.document.add_class(&modal.element_id(), "open");
        debug!("Opened {} modal", modal.name());

        match modal {
            Modal::Illness => {
                self.fill_body_parts(fields::ILLNESS_BODY_PART, false)
                    .await
            }
            Modal::Doctor => self.fill_body_parts(fields::DOCTOR_BODY_PART, true).await,
            Modal::Medicine => {
                self.document
                    .set_visible(self.id(Binding::MedicineUploadGroup), false);
                self.fill_illnesses(fields::MEDICINE_ILLNESS).await;
            }
            Modal::Tip => {}
        }
    }

    pub fn close_modal(&self, modal: Modal) {
        self.document.remove_class(&modal.element_id(), "open");
    }

    /// Close the overlay whose backdrop was clicked. Clicks on anything
    /// other than an overlay element are ignored.
    pub fn overlay_clicked(&self, target_id: &str) -> bool {
        match Modal::from_element_id(target_id) {
            Some(modal) => {
                self.close_modal(modal);
                true
            }
            None => false,
        }
    }

    async fn fill_body_parts(&self, select_id: &str, with_general: bool) {
        let result = self
            .api
            .get::<Vec<BodyPart>>(paths::BODY_PARTS)
            .await
            .and_then(|envelope| envelope.into_data("Could not load body parts"));
        match result {
            Ok(parts) => {
                let html = options::body_part_options(&parts, with_general);
                self.document.set_inner_html(select_id, html.as_str());
            }
            Err(err) => warn!("Loading body parts failed ({}): {}", err.kind(), err),
        }
    }

    async fn fill_illnesses(&self, select_id: &str) {
        let result = self
            .api
            .get::<Vec<IllnessOption>>(paths::ILLNESSES_LIST)
            .await
            .and_then(|envelope| envelope.into_data("Could not load illnesses"));
        match result {
            Ok(illnesses) => {
                let html = options::illness_options(&illnesses);
                self.document.set_inner_html(select_id, html.as_str());
            }
            Err(err) => warn!("Loading illness list failed ({}): {}", err.kind(), err),
        }
    }
}
