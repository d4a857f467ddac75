//! `tasklist` binary: interactive UI or headless scripts over one store.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Read, Write};
use tasklist::cli::{Cli, Command};
use tasklist::logging::{self, Fallback};
use tasklist::{new_store, script, tui, view};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.subcommand();

    let fallback = match command {
        Command::Tui => Fallback::Discard,
        Command::Script { .. } => Fallback::Stderr,
    };
    logging::init(&cli.log_level, cli.log_file.as_deref(), fallback)?;
    tracing::debug!(id_scheme = ?cli.id_scheme, "Starting session");

    let mut store = new_store(cli.id_scheme).context("failed to initialize task list")?;

    match command {
        Command::Tui => tui::run(store),
        Command::Script { file, json } => {
            let source = match &file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read script {}", path.display()))?,
                None => {
                    let mut source = String::new();
                    io::stdin()
                        .read_to_string(&mut source)
                        .context("failed to read script from stdin")?;
                    source
                },
            };
            let commands = script::parse(&source)?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            script::run(&mut store, commands, &mut out)?;

            if json {
                let state = store.snapshot();
                serde_json::to_writer_pretty(&mut out, &state)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", store.state(view::render_plain))?;
            }
            Ok(())
        },
    }
}
