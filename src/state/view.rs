//! Page view state: form inputs, request status, result and history.
//!
//! DESIGN
//! ======
//! All mutation goes through the named transitions below so the controller
//! never pokes at fields ad hoc. Expansion is a single `Option<RecordId>`,
//! which makes "more than one record expanded" unrepresentable.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::{HistoryRecord, RecordId};

pub const GENERATE_FAILED_MESSAGE: &str =
    "Failed to generate content. Please check the backend server and try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete history item.";
pub const CLEAR_FAILED_MESSAGE: &str = "Failed to clear history.";

/// Transient product form. Not reset after a submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    pub product_name: String,
    pub product_description: String,
}

impl FormInput {
    #[must_use]
    pub fn new(product_name: impl Into<String>, product_description: impl Into<String>) -> Self {
        Self { product_name: product_name.into(), product_description: product_description.into() }
    }

    /// Name of the first required field that is empty, if any. Whitespace
    /// counts as a value.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.product_name.is_empty() {
            Some("product name")
        } else if self.product_description.is_empty() {
            Some("product description")
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub marketing_content: Option<String>,
    pub expanded_record_id: Option<RecordId>,
    pub history: Vec<HistoryRecord>,
}

impl ViewState {
    /// Enter the loading state, dropping the previous error and result.
    pub fn begin_generation(&mut self) {
        self.is_loading = true;
        self.error_message = None;
        self.marketing_content = None;
    }

    pub fn generation_succeeded(&mut self, marketing_text: String) {
        self.marketing_content = Some(marketing_text);
    }

    pub fn generation_failed(&mut self) {
        self.marketing_content = None;
        self.error_message = Some(GENERATE_FAILED_MESSAGE.to_owned());
    }

    /// Leave the loading state; called once the request has settled either way.
    pub fn generation_settled(&mut self) {
        self.is_loading = false;
    }

    /// Wholesale replacement; no merge with the previous list.
    pub fn replace_history(&mut self, records: Vec<HistoryRecord>) {
        self.history = records;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn toggle_expand(&mut self, id: &RecordId) {
        if self.expanded_record_id.as_ref() == Some(id) {
            self.expanded_record_id = None;
        } else {
            self.expanded_record_id = Some(id.clone());
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expanded_record_id.as_ref() == Some(id)
    }

    /// The expanded record, if it is still present in the current history.
    #[must_use]
    pub fn expanded_record(&self) -> Option<&HistoryRecord> {
        let id = self.expanded_record_id.as_ref()?;
        self.history.iter().find(|record| &record.id == id)
    }
}
