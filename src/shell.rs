//! Interactive single-page loop.
//!
//! Reads one command per line, applies it through the [`Controller`], and
//! re-renders the whole page after every state-touching command. The page
//! fetches history once on start, before the first render.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::io::{self, BufRead, Write};

use crate::confirm::read_answer;
use crate::controller::Controller;
use crate::net::types::RecordId;
use crate::render::{SUBMIT_LOADING_LABEL, render_page};

pub const HELP: &str = "\
commands:
  name <text>     set product name
  desc <text>     set product description
  generate        generate marketing content from the form
  refresh         reload history
  toggle <id>     expand/collapse a history record
  delete <id>     delete a history record
  clear           delete all history (asks first)
  show            redraw the page
  help            show this list
  quit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    SetName(String),
    SetDescription(String),
    Generate,
    Refresh,
    Toggle(RecordId),
    Delete(RecordId),
    Clear,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("usage: {command} <{argument}>")]
    MissingArgument { command: &'static str, argument: &'static str },
}

/// Parse one input line. Text arguments keep their inner spacing.
///
/// # Errors
///
/// Returns [`ParseError`] for blank lines, unknown verbs, or a missing argument.
pub fn parse_command(line: &str) -> Result<ShellCommand, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let require = |command: &'static str, argument: &'static str| {
        if rest.is_empty() {
            Err(ParseError::MissingArgument { command, argument })
        } else {
            Ok(rest.to_owned())
        }
    };

    match verb.to_ascii_lowercase().as_str() {
        "name" => require("name", "text").map(ShellCommand::SetName),
        "desc" | "description" => require("desc", "text").map(ShellCommand::SetDescription),
        "generate" | "gen" => Ok(ShellCommand::Generate),
        "refresh" => Ok(ShellCommand::Refresh),
        "toggle" => require("toggle", "id").map(|id| ShellCommand::Toggle(RecordId::from(id))),
        "delete" | "rm" => require("delete", "id").map(|id| ShellCommand::Delete(RecordId::from(id))),
        "clear" => Ok(ShellCommand::Clear),
        "show" => Ok(ShellCommand::Show),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        _ => Err(ParseError::Unknown(verb.to_owned())),
    }
}

/// Run the page loop until `quit` or end of input.
///
/// The clear-history confirmation is read from `input` as well, so the loop
/// never needs a second handle on the terminal.
///
/// # Errors
///
/// Returns an error only when reading `input` or writing `output` fails.
pub async fn run_shell<R: BufRead, W: Write>(
    controller: &mut Controller,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    controller.refresh_history().await;
    write!(output, "{}", render_page(controller.form(), controller.view()))?;
    writeln!(output, "\ntype 'help' for commands")?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            ShellCommand::SetName(name) => controller.set_product_name(name),
            ShellCommand::SetDescription(description) => controller.set_product_description(description),
            ShellCommand::Generate => {
                if let Some(field) = controller.form().missing_field() {
                    writeln!(output, "cannot generate: {field} is required")?;
                    continue;
                }
                writeln!(output, "{SUBMIT_LOADING_LABEL}")?;
                output.flush()?;
                controller.submit_form().await;
            }
            ShellCommand::Refresh => controller.refresh_history().await,
            ShellCommand::Toggle(id) => {
                if !controller.view().history.iter().any(|record| record.id == id) {
                    writeln!(output, "no record #{id} in history")?;
                    continue;
                }
                controller.toggle_expand(&id);
            }
            ShellCommand::Delete(id) => controller.delete_record(&id).await,
            ShellCommand::Clear => {
                let mut ask = |message: &str| {
                    let _ = write!(output, "{message} [y/N] ");
                    let _ = output.flush();
                    read_answer(&mut *input)
                };
                controller.clear_all_history(&mut ask).await;
            }
            ShellCommand::Show => {}
        }

        write!(output, "\n{}", render_page(controller.form(), controller.view()))?;
    }
    Ok(())
}
