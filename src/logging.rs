//! Log file setup.
//!
//! The terminal is the game screen, so logs never go to stdout or stderr.
//! Without a configured path no subscriber is installed at all.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Prefix match: covers the facade and every `tui_roam_*` member crate, but
/// not dependencies.
const DEFAULT_FILTER: &str = "tui_roam=info";

/// Install a file-backed subscriber. Returns whether logging is on.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("installing log subscriber")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_scoped_to_this_workspace() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        assert!(DEFAULT_FILTER.starts_with("tui_roam="));
    }

    #[test]
    fn no_path_means_no_subscriber() {
        assert!(!init(None).unwrap());
    }
}
