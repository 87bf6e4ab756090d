use std::env;
use std::process::Command;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use memento_core::{ConfigRepository, FileConfigRepository, StatsService};
use tracing::{info, warn};

const DEFAULT_EDITOR: &str = "nano";

#[derive(clap::Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration (with --birthdate applied) as JSON
    Show,
    /// Print the config file location
    Path,
    /// Open the config file in $EDITOR
    Edit,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// The config the other commands would run with, validated against `today`.
fn effective_config_json<R: ConfigRepository>(
    service: &StatsService<R>,
    today: NaiveDate,
) -> Result<String> {
    let config = service.get_config(today)?;
    Ok(serde_json::to_string_pretty(&config)?)
}

pub fn run(
    action: ConfigAction,
    service: &StatsService<FileConfigRepository>,
    today: NaiveDate,
) -> Result<()> {
    let repo = service.repository();
    match action {
        ConfigAction::Show => {
            println!("{}", effective_config_json(service, today)?);
        }
        ConfigAction::Path => {
            println!("{}", repo.path().display());
        }
        ConfigAction::Edit => {
            // Creates the file with defaults when missing
            repo.load()?;
            let editor = env::var("EDITOR").unwrap_or_else(|_| DEFAULT_EDITOR.to_string());
            open_in_editor(&editor, repo)?;
        }
        ConfigAction::Init { force } => {
            repo.write_defaults(force)?;
            println!("Wrote default config to {}", repo.path().display());
        }
    }
    Ok(())
}

fn open_in_editor(editor: &str, repo: &FileConfigRepository) -> Result<()> {
    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| anyhow!("EDITOR is set but empty"))?;

    info!(editor = program, path = %repo.path().display(), "opening config");
    let status = Command::new(program)
        .args(parts)
        .arg(repo.path())
        .status()
        .map_err(|e| anyhow!("Could not launch editor '{}': {}", program, e))?;

    if !status.success() {
        warn!(%status, "editor exited with an error");
    }
    Ok(())
}
