use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Settings resolved from CLI flags, environment and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    /// `None` when running ephemeral
    pub data_dir: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl AppConfig {
    /// Precedence: CLI flags > CHATBOX_* env (both handled by clap) > defaults
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = if cli.ephemeral {
            None
        } else {
            Some(resolve_data_dir(cli.data_dir.clone())?)
        };

        let timeout = match cli.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(Self {
            endpoint: cli.endpoint.clone(),
            data_dir,
            timeout,
        })
    }
}

/// Explicit directory, or `~/.chatbox`
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    Ok(PathBuf::from(home_dir).join(".chatbox"))
}
