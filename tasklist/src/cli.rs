//! Command line interface.

use crate::ids::IdScheme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-memory todo list
#[derive(Parser, Debug)]
#[command(name = "tasklist", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand; defaults to the interactive UI
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Id assignment for new tasks. `length` (default) numbers a task
    /// len+1 and can repeat an id after deletions; `monotonic` never
    /// reuses an id within the session.
    #[arg(long, value_enum, default_value_t = IdScheme::Length, env = "TASKLIST_ID_SCHEME", global = true)]
    pub id_scheme: IdScheme,

    /// Log filter, e.g. `debug` or `tasklist=trace`
    #[arg(long, default_value = "warn", env = "TASKLIST_LOG", global = true)]
    pub log_level: String,

    /// Write logs to this file. The interactive UI only logs when set.
    #[arg(long, env = "TASKLIST_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Front ends
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive terminal UI
    Tui,

    /// Run a command script and print the result
    Script {
        /// Script file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Print the final state as JSON instead of the plain rendering
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The subcommand to run, with `tui` as the default
    #[must_use]
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}
