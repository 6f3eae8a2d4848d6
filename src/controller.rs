//! View-state controller: the user actions of the page.
//!
//! DESIGN
//! ======
//! The controller owns the form and view state and is driven through
//! `&mut self`, so only one action runs at a time. Every action settles
//! into state rather than returning an error: failures become the
//! per-action message in `ViewState::error_message`, or a log line for
//! history fetches. No action retries.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;

use tracing::{error, warn};

use crate::confirm::{CLEAR_HISTORY_PROMPT, Confirm};
use crate::net::api::ContentApi;
use crate::net::types::{GenerateRequest, RecordId};
use crate::state::view::{CLEAR_FAILED_MESSAGE, DELETE_FAILED_MESSAGE};
use crate::state::{FormInput, ViewState};

pub struct Controller {
    api: Arc<dyn ContentApi>,
    form: FormInput,
    view: ViewState,
}

impl Controller {
    #[must_use]
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self { api, form: FormInput::default(), view: ViewState::default() }
    }

    #[must_use]
    pub fn form(&self) -> &FormInput {
        &self.form
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.form.product_name = name.into();
    }

    pub fn set_product_description(&mut self, description: impl Into<String>) {
        self.form.product_description = description.into();
    }

    /// Set both form fields and submit them.
    pub async fn submit_generation(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.set_product_name(name);
        self.set_product_description(description);
        self.submit_form().await;
    }

    /// Submit the current form. Field presence is checked by the input
    /// surface, not here.
    pub async fn submit_form(&mut self) {
        self.view.begin_generation();

        let request = GenerateRequest {
            product_name: self.form.product_name.clone(),
            product_description: self.form.product_description.clone(),
        };
        let result = self.api.generate_content(&request).await;
        let succeeded = match result {
            Ok(resp) => {
                self.view.generation_succeeded(resp.marketing_text);
                true
            }
            Err(e) => {
                warn!(error = %e, "content generation failed");
                self.view.generation_failed();
                false
            }
        };
        self.view.generation_settled();

        if succeeded {
            self.refresh_history().await;
        }
    }

    /// Replace the history list with the server's current list. Failures are
    /// logged and otherwise ignored.
    pub async fn refresh_history(&mut self) {
        match self.api.list_history().await {
            Ok(records) => self.view.replace_history(records),
            Err(e) => error!(error = %e, "failed to fetch history"),
        }
    }

    pub async fn delete_record(&mut self, id: &RecordId) {
        match self.api.delete_record(id).await {
            Ok(()) => self.refresh_history().await,
            Err(e) => {
                error!(error = %e, %id, "failed to delete history item");
                self.view.set_error(DELETE_FAILED_MESSAGE);
            }
        }
    }

    /// Delete every record after an explicit confirmation. Returns whether
    /// the user confirmed.
    pub async fn clear_all_history(&mut self, confirm: &mut impl Confirm) -> bool {
        if !confirm.confirm(CLEAR_HISTORY_PROMPT) {
            return false;
        }
        match self.api.clear_history().await {
            Ok(()) => self.refresh_history().await,
            Err(e) => {
                error!(error = %e, "failed to clear history");
                self.view.set_error(CLEAR_FAILED_MESSAGE);
            }
        }
        true
    }

    pub fn toggle_expand(&mut self, id: &RecordId) {
        self.view.toggle_expand(id);
    }
}
