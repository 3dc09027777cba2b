//! Create and delete flows of the admin panel.
//!
//! Every mutation ends the same way: the resource's load-once flag is
//! cleared, then its table and the dashboard counters are refetched
//! concurrently.

use serde::Serialize;
use tracing::{info, warn};

use super::App;
use crate::api::{paths, Ack};
use crate::models::{DoctorForm, IllnessForm, MedicineForm, TipForm};
use crate::view_state::{AdminResource, Modal, ToastKind};

impl App {
    pub async fn save_illness(&self, form: &IllnessForm) -> bool {
        self.save_resource(Modal::Illness, form, "Illness added successfully!")
            .await
    }

    pub async fn save_doctor(&self, form: &DoctorForm) -> bool {
        self.save_resource(Modal::Doctor, form, "Doctor added successfully!")
            .await
    }

    pub async fn save_medicine(&self, form: &MedicineForm) -> bool {
        self.save_resource(Modal::Medicine, form, "Medicine added successfully!")
            .await
    }

    pub async fn save_tip(&self, form: &TipForm) -> bool {
        self.save_resource(Modal::Tip, form, "Health tip added!").await
    }

    pub async fn submit_illness_form(&self) -> bool {
        let form = IllnessForm::from_values(|id| self.field_value(id));
        self.save_illness(&form).await
    }

    pub async fn submit_doctor_form(&self) -> bool {
        let form = DoctorForm::from_values(|id| self.field_value(id));
        self.save_doctor(&form).await
    }

    pub async fn submit_medicine_form(&self) -> bool {
        let form = MedicineForm::from_values(|id| self.field_value(id));
        self.save_medicine(&form).await
    }

    pub async fn submit_tip_form(&self) -> bool {
        let form = TipForm::from_values(|id| self.field_value(id));
        self.save_tip(&form).await
    }

    /// Submit whichever create form `modal` holds.
    pub async fn submit_form(&self, modal: Modal) -> bool {
        match modal {
            Modal::Illness => self.submit_illness_form().await,
            Modal::Doctor => self.submit_doctor_form().await,
            Modal::Medicine => self.submit_medicine_form().await,
            Modal::Tip => self.submit_tip_form().await,
        }
    }

    /// On failure the modal stays open with its input intact.
    async fn save_resource<B>(&self, modal: Modal, body: &B, success_message: &str) -> bool
    where
        B: Serialize + ?Sized,
    {
        let resource = modal.resource();
        let result = self
            .api
            .post::<_, serde_json::Value>(&paths::create(resource), body)
            .await;

        match result {
            Ok(envelope) if envelope.success => {
                info!(
                    "Created {} (id {:?})",
                    resource.singular(),
                    envelope.id
                );
                self.close_modal(modal);
                self.document.reset_form(&modal.form_id());
                self.invalidate(resource);
                self.reload_after_mutation(resource).await;
                self.show_toast(success_message, ToastKind::Success);
                true
            }
            Ok(envelope) => {
                let message = envelope
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| format!("Could not save {}", resource.singular()));
                warn!("Saving {} rejected: {}", resource.singular(), message);
                self.show_toast(&message, ToastKind::Error);
                false
            }
            Err(err) => {
                warn!("Saving {} failed ({}): {}", resource.singular(), err.kind(), err);
                self.show_toast(&format!("Error: {}", err.user_message()), ToastKind::Error);
                false
            }
        }
    }

    pub async fn delete_illness(&self, id: i64) -> bool {
        self.delete_resource(
            AdminResource::Illnesses,
            id,
            "Delete this illness? Related medicines will also be deleted.",
            "Illness deleted",
        )
        .await
    }

    pub async fn delete_doctor(&self, id: i64) -> bool {
        self.delete_resource(AdminResource::Doctors, id, "Delete this doctor?", "Doctor deleted")
            .await
    }

    pub async fn delete_medicine(&self, id: i64) -> bool {
        self.delete_resource(
            AdminResource::Medicines,
            id,
            "Delete this medicine?",
            "Medicine deleted",
        )
        .await
    }

    pub async fn delete_tip(&self, id: i64) -> bool {
        self.delete_resource(AdminResource::Tips, id, "Delete this tip?", "Tip deleted")
            .await
    }

    /// Delete a record after confirmation. Messages cannot be deleted.
    pub async fn delete(&self, resource: AdminResource, id: i64) -> bool {
        match resource {
            AdminResource::Illnesses => self.delete_illness(id).await,
            AdminResource::Doctors => self.delete_doctor(id).await,
            AdminResource::Medicines => self.delete_medicine(id).await,
            AdminResource::Tips => self.delete_tip(id).await,
            AdminResource::Messages => {
                warn!("Ignoring delete of message {}", id);
                false
            }
        }
    }

    /// A declined prompt sends nothing. Once the server has answered, the
    /// table and counters are refetched whatever the outcome.
    async fn delete_resource(
        &self,
        resource: AdminResource,
        id: i64,
        prompt: &str,
        success_message: &str,
    ) -> bool {
        if !self.dialog.confirm(prompt) {
            info!("Delete of {} {} cancelled", resource.singular(), id);
            return false;
        }

        match self.api.delete::<serde_json::Value>(&paths::item(resource, id)).await {
            Ok(envelope) => {
                self.invalidate(resource);
                self.reload_after_mutation(resource).await;
                if envelope.success {
                    info!("Deleted {} {}", resource.singular(), id);
                    self.show_toast(success_message, ToastKind::Success);
                    true
                } else {
                    let message = envelope
                        .message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| "Error deleting".to_string());
                    warn!("Delete of {} {} rejected: {}", resource.singular(), id, message);
                    self.show_toast(&message, ToastKind::Error);
                    false
                }
            }
            Err(err) => {
                warn!(
                    "Delete of {} {} failed ({}): {}",
                    resource.singular(),
                    id,
                    err.kind(),
                    err
                );
                self.show_toast("Error deleting", ToastKind::Error);
                false
            }
        }
    }

    pub async fn mark_message_read(&self, id: i64) -> bool {
        let result = self.api.post_empty::<serde_json::Value>(&paths::mark_read(id)).await;
        match result.and_then(|envelope: Ack| envelope.ensure_success("Could not update message")) {
            Ok(_) => {
                self.reload_after_mutation(AdminResource::Messages).await;
                self.show_toast("Message marked as read", ToastKind::Success);
                true
            }
            Err(err) => {
                warn!("Marking message {} read failed ({}): {}", id, err.kind(), err);
                self.show_toast(&format!("Error: {}", err.user_message()), ToastKind::Error);
                false
            }
        }
    }

    /// Tips also clear the public page's flag so the next visit refetches.
    fn invalidate(&self, resource: AdminResource) {
        let mut state = self.state();
        state.flags.invalidate(resource);
        if resource == AdminResource::Tips {
            state.flags.set_tips_loaded(false);
        }
    }

    async fn reload_after_mutation(&self, resource: AdminResource) {
        futures::join!(self.load_resource(resource), self.load_admin_stats());
    }
}
