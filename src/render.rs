//! Plain-text rendering of the page.
//!
//! Sections top to bottom: title, form, error, generated content, history.
//! Rendering is a pure function of `FormInput` + `ViewState`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use crate::net::types::HistoryRecord;
use crate::state::{FormInput, ViewState};

pub const TITLE: &str = "Marketing Content Generator";
pub const SUBTITLE: &str = "Enter your product details to generate stunning marketing copy with AI.";
pub const SUBMIT_LABEL: &str = "Generate Content";
pub const SUBMIT_LOADING_LABEL: &str = "Generating...";
pub const RESULT_HEADING: &str = "Generated Content";
pub const HISTORY_HEADING: &str = "Recent Generations";
pub const CLEAR_ALL_HINT: &str = "[Clear All]";
pub const EMPTY_HISTORY: &str = "No history yet. Generate some content to see it here!";

const INDENT: &str = "    ";

#[must_use]
pub fn render_page(form: &FormInput, view: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{SUBTITLE}");
    out.push('\n');

    let _ = writeln!(out, "Product Name: {}", field_or_placeholder(&form.product_name));
    let _ = writeln!(out, "Product Description: {}", field_or_placeholder(&form.product_description));
    let label = if view.is_loading { SUBMIT_LOADING_LABEL } else { SUBMIT_LABEL };
    let _ = writeln!(out, "[{label}]");

    if let Some(error) = &view.error_message {
        out.push('\n');
        let _ = writeln!(out, "Error: {error}");
    }

    if let Some(content) = &view.marketing_content {
        out.push('\n');
        let _ = writeln!(out, "== {RESULT_HEADING} ==");
        let _ = writeln!(out, "{content}");
    }

    out.push('\n');
    out.push_str(&render_history(view));
    out
}

/// The history section on its own.
#[must_use]
pub fn render_history(view: &ViewState) -> String {
    let mut out = String::new();
    if view.history.is_empty() {
        let _ = writeln!(out, "== {HISTORY_HEADING} ==");
        let _ = writeln!(out, "{EMPTY_HISTORY}");
        return out;
    }

    let _ = writeln!(out, "== {HISTORY_HEADING} == {CLEAR_ALL_HINT}");
    for record in &view.history {
        let expanded = view.is_expanded(&record.id);
        let marker = if expanded { '-' } else { '+' };
        let _ = writeln!(out, "[{marker}] #{} {}", record.id, record.product_name);
        if expanded {
            write_expanded(&mut out, record);
        }
    }
    out
}

fn write_expanded(out: &mut String, record: &HistoryRecord) {
    if let Some(created_at) = &record.created_at {
        let _ = writeln!(out, "{INDENT}Created: {created_at}");
    }
    let _ = writeln!(out, "{INDENT}{}", record.product_description);
    let _ = writeln!(out, "{INDENT}---");
    for line in record.generated_content.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "{INDENT}{line}");
        }
    }
}

fn field_or_placeholder(value: &str) -> &str {
    if value.is_empty() { "(empty)" } else { value }
}
