//! Blocking yes/no confirmation for destructive actions.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::io::{self, BufRead, Write};

pub const CLEAR_HISTORY_PROMPT: &str =
    "Are you sure you want to delete all history? This action cannot be undone.";

pub trait Confirm {
    /// Ask the user `message`; `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Always answers yes. Backs the CLI `--yes` flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Prompts on stderr and reads one line from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{message} [y/N] ");
        let _ = stderr.flush();
        read_answer(&mut io::stdin().lock())
    }
}

/// Read one answer line. EOF and read errors count as "no".
pub fn read_answer(reader: &mut impl BufRead) -> bool {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => false,
        Ok(_) => is_affirmative(&line),
    }
}

#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
