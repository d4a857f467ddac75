//! Headless command scripts.
//!
//! One command per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! input Buy milk     set pending input to the rest of the line, verbatim
//! add                add the pending input
//! add Learn Go       set pending input and add it in one step
//! toggle 1
//! delete 2
//! count              print the completed count
//! list               print the plain rendering
//! ```

use crate::TodoStore;
use crate::types::{TaskId, TodoAction};
use crate::view;
use anyhow::Context;
use std::io::Write;
use thiserror::Error;

/// A parsed script line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Send an action to the store
    Action(TodoAction),
    /// Print the completed count
    Count,
    /// Print the plain rendering
    List,
}

/// Script parse failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// First word is not a known command
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand {
        /// 1-based line number
        line: usize,
        /// The offending word
        command: String,
    },

    /// `toggle`/`delete` argument is not an id
    #[error("line {line}: `{command}` expects a task id, got `{value}`")]
    InvalidId {
        /// 1-based line number
        line: usize,
        /// Command name
        command: String,
        /// The offending argument
        value: String,
    },

    /// Argument given to a command that takes none
    #[error("line {line}: `{command}` takes no arguments")]
    UnexpectedArgument {
        /// 1-based line number
        line: usize,
        /// Command name
        command: String,
    },
}

fn parse_id(line: usize, command: &str, value: &str) -> Result<TaskId, ScriptError> {
    value
        .trim()
        .parse::<u64>()
        .map(TaskId)
        .map_err(|_| ScriptError::InvalidId {
            line,
            command: command.to_string(),
            value: value.to_string(),
        })
}

/// Parse a single line. Blank lines and comments yield `None`.
///
/// # Errors
///
/// Returns a [`ScriptError`] describing the first problem on the line.
pub fn parse_line(line: usize, source: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let source = source.trim_end_matches(['\r', '\n']).trim_start();
    if source.trim().is_empty() || source.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = source
        .split_once(char::is_whitespace)
        .unwrap_or((source, ""));
    let no_args = |parsed: ScriptCommand| {
        if rest.trim().is_empty() {
            Ok(Some(parsed))
        } else {
            Err(ScriptError::UnexpectedArgument {
                line,
                command: command.to_string(),
            })
        }
    };

    match command {
        "input" => Ok(Some(ScriptCommand::Action(TodoAction::SetPendingInput {
            text: rest.to_string(),
        }))),
        "add" if rest.trim().is_empty() => {
            Ok(Some(ScriptCommand::Action(TodoAction::AddTask)))
        },
        "add" => Ok(Some(ScriptCommand::Action(TodoAction::Submit {
            text: rest.to_string(),
        }))),
        "toggle" => Ok(Some(ScriptCommand::Action(TodoAction::ToggleTask {
            id: parse_id(line, command, rest)?,
        }))),
        "delete" => Ok(Some(ScriptCommand::Action(TodoAction::DeleteTask {
            id: parse_id(line, command, rest)?,
        }))),
        "count" => no_args(ScriptCommand::Count),
        "list" => no_args(ScriptCommand::List),
        other => Err(ScriptError::UnknownCommand {
            line,
            command: other.to_string(),
        }),
    }
}

/// Parse a whole script
///
/// # Errors
///
/// Returns the first [`ScriptError`] encountered.
pub fn parse(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Run parsed commands against a store, writing `count`/`list` output
///
/// # Errors
///
/// Fails if the store reports a runtime error or `out` cannot be written.
pub fn run<W: Write>(
    store: &mut TodoStore,
    commands: Vec<ScriptCommand>,
    out: &mut W,
) -> anyhow::Result<()> {
    for command in commands {
        match command {
            ScriptCommand::Action(action) => {
                store.send(action).context("store rejected script action")?;
            },
            ScriptCommand::Count => {
                writeln!(out, "{}", store.state(crate::types::TodoState::completed_count))?;
            },
            ScriptCommand::List => {
                write!(out, "{}", store.state(view::render_plain))?;
            },
        }
    }
    Ok(())
}
