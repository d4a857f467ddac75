//! Tracing subscriber setup.

use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where logs go when no log file is configured
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Standard error (headless front ends)
    Stderr,
    /// Nowhere (the terminal UI owns the screen)
    Discard,
}

/// Install the global subscriber
///
/// # Errors
///
/// Fails if the filter does not parse or the log file cannot be opened.
pub fn init(filter: &str, log_file: Option<&Path>, fallback: Fallback) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter `{filter}`"))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    match (log_file, fallback) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        },
        (None, Fallback::Stderr) => builder.with_writer(std::io::stderr).init(),
        (None, Fallback::Discard) => {},
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_filter() {
        let err = init("tasklist=verbose", None, Fallback::Discard).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }
}
