//! Fetch-render pipeline.
//!
//! A render into a container goes: take a request token, write the loading
//! placeholder, await the request, then assign the whole fragment at once.
//! A response whose token has been superseded by a later request for the
//! same container is dropped without touching the document.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::App;
use crate::api::paths;
use crate::bindings::Binding;
use crate::models::{ContactMessage, Doctor, HealthTip, IllnessRow, MedicineRow};
use crate::render::{admin_tables, placeholders, Markup};
use crate::view_state::{AdminResource, RequestToken};

impl App {
    /// Issue a token for `container` and show `placeholder` in it.
    pub(crate) fn begin_render(&self, container: Binding, placeholder: &Markup) -> RequestToken {
        let token = self.state().tokens.issue(container);
        self.document
            .set_inner_html(self.id(container), placeholder.as_str());
        token
    }

    pub(crate) fn is_current(&self, token: RequestToken) -> bool {
        self.state().tokens.is_current(token)
    }

    /// Assign `html` to the token's container if the token is still current.
    pub(crate) fn finish_render(&self, token: RequestToken, html: &Markup) -> bool {
        if !self.is_current(token) {
            debug!(
                "Discarding superseded response for #{}",
                self.id(token.container())
            );
            return false;
        }
        self.document
            .set_inner_html(self.id(token.container()), html.as_str());
        true
    }

    /// Fetch and render one admin table.
    pub async fn load_resource(&self, resource: AdminResource) {
        match resource {
            AdminResource::Illnesses => {
                self.load_table::<IllnessRow, _>(resource, admin_tables::illnesses_table)
                    .await
            }
            AdminResource::Doctors => {
                self.load_table::<Doctor, _>(resource, admin_tables::doctors_table)
                    .await
            }
            AdminResource::Medicines => {
                self.load_table::<MedicineRow, _>(resource, admin_tables::medicines_table)
                    .await
            }
            AdminResource::Tips => {
                self.load_table::<HealthTip, _>(resource, admin_tables::tips_table)
                    .await
            }
            AdminResource::Messages => {
                self.load_table::<ContactMessage, _>(resource, admin_tables::messages_table)
                    .await
            }
        }
    }

    async fn load_table<T, F>(&self, resource: AdminResource, render: F)
    where
        T: DeserializeOwned,
        F: Fn(&[T]) -> Markup,
    {
        let token = self.begin_render(resource.table(), &placeholders::loading("Loading..."));

        let result = self
            .api
            .get::<Vec<T>>(&paths::listing(resource))
            .await
            .and_then(|envelope| envelope.into_data("Could not load data"));

        let (html, loaded) = match result {
            Ok(items) if items.is_empty() => (placeholders::empty_table(resource), true),
            Ok(items) => (render(&items), true),
            Err(err) => {
                warn!(
                    "Loading {} failed ({}): {}",
                    resource.plural(),
                    err.kind(),
                    err
                );
                (placeholders::error_state(&err.user_message()), false)
            }
        };

        if self.finish_render(token, &html) && loaded {
            self.state().flags.mark_loaded(resource);
            debug!("Rendered {} table", resource.plural());
        }
    }
}
