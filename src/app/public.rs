//! Public pages: body-part detail, health tips, contact form.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::App;
use crate::api::paths;
use crate::bindings::Binding;
use crate::models::{group_tips, BodyPartDetail, ContactForm, HealthTip};
use crate::render::{illness_page, placeholders, tips};
use crate::view_state::ToastKind;

const SUBMIT_LABEL: &str = "Send Message";

impl App {
    /// Route to the detail page of a body part and load it.
    pub async fn load_illness_page(&self, slug: &str) {
        if !self.navigate_to("illness").await {
            return;
        }

        let doc = &self.document;
        for label in [Binding::IllnessTitle, Binding::IllnessSubtitle, Binding::PartBadge] {
            doc.set_text(self.id(label), "");
        }
        let token = self.begin_render(
            Binding::IllnessContent,
            &placeholders::loading("Loading health information..."),
        );

        let result = self
            .api
            .get::<BodyPartDetail>(&paths::body_part(slug))
            .await;

        let html = match result {
            Ok(envelope) if envelope.success => {
                let detail = envelope.data.unwrap_or_default();
                if !self.is_current(token) {
                    debug!("Discarding superseded body-part page for {}", slug);
                    return;
                }
                let header = illness_page::part_header(&detail.part);
                doc.set_text(self.id(Binding::PartBadge), &header.badge);
                doc.set_text(self.id(Binding::IllnessTitle), &header.title);
                doc.set_text(self.id(Binding::IllnessSubtitle), &header.subtitle);
                info!(
                    "Loaded {} with {} illnesses and {} doctors",
                    slug,
                    detail.illnesses.len(),
                    detail.doctors.len()
                );
                illness_page::illness_content(&detail.illnesses, &detail.doctors)
            }
            Ok(envelope) => {
                let message = envelope
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Could not load data. Please try again.".to_string());
                warn!("Body part {} unavailable: {}", slug, message);
                placeholders::notice("⚠️", &message)
            }
            Err(err) => {
                warn!("Loading body part {} failed ({}): {}", slug, err.kind(), err);
                placeholders::notice("⚠️", &format!("Error: {}", err.user_message()))
            }
        };

        self.finish_render(token, &html);
    }

    /// Load the health-tips page and set its load-once flag on success.
    pub async fn load_health_tips(&self) {
        let token = self.begin_render(
            Binding::TipsContent,
            &placeholders::loading("Loading health tips..."),
        );

        let result = self
            .api
            .get::<BTreeMap<String, Vec<HealthTip>>>(paths::HEALTH_TIPS)
            .await
            .and_then(|envelope| envelope.into_data("Could not load tips"));

        match result {
            Ok(grouped) => {
                let groups = group_tips(grouped);
                if self.finish_render(token, &tips::tips_content(&groups)) {
                    self.state().flags.set_tips_loaded(true);
                    debug!("Rendered {} tip categories", groups.len());
                }
            }
            Err(err) => {
                warn!("Loading health tips failed ({}): {}", err.kind(), err);
                self.finish_render(token, &tips::tips_error(&err.user_message()));
            }
        }
    }

    /// Read the contact form and send it.
    pub async fn submit_contact(&self) -> bool {
        let form = ContactForm::from_values(|id| self.field_value(id));
        self.send_contact(&form).await
    }

    /// Post a contact message. The submit button is disabled while the
    /// request is in flight and always restored afterwards.
    pub async fn send_contact(&self, form: &ContactForm) -> bool {
        let doc = &self.document;
        let button = self.id(Binding::ContactSubmit);
        doc.set_disabled(button, true);
        doc.set_text(button, "Sending...");

        let sent = match self.api.post::<_, serde_json::Value>(paths::CONTACT, form).await {
            Ok(envelope) if envelope.success => {
                doc.set_visible(self.id(Binding::ContactSuccess), true);
                doc.reset_form(self.id(Binding::ContactForm));
                info!("Contact message sent");
                self.show_toast("Message sent successfully!", ToastKind::Success);
                true
            }
            Ok(envelope) => {
                let message = envelope
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Failed to send message".to_string());
                warn!("Contact message rejected: {}", message);
                self.show_toast(&message, ToastKind::Error);
                false
            }
            Err(err) => {
                warn!("Contact message failed ({}): {}", err.kind(), err);
                self.show_toast("Network error. Please try again.", ToastKind::Error);
                false
            }
        };

        doc.set_disabled(button, false);
        doc.set_text(button, SUBMIT_LABEL);
        sent
    }
}
