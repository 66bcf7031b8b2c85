//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::{home_dir, Settings};
use crate::errors::{PassKeepError, Result};
use crate::vault::{VaultRepository, VaultService};

/// PassKeep CLI: local encrypted password manager.
#[derive(Parser)]
#[command(
    name = "passkeep",
    about = "Local encrypted password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault file (default: ~/.passkeep/passwords.json)
    #[arg(long, global = true, env = "PASSKEEP_VAULT")]
    pub vault: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a credential for a site
    Add {
        /// Site label (e.g. github.com)
        site: String,
        /// Username for the site
        username: String,
        /// Password (omit for interactive prompt)
        password: Option<String>,
    },

    /// Show the first credential stored for a site
    Get {
        /// Site label
        site: String,
    },

    /// List all credentials
    List,

    /// Replace the password for a site/username pair
    Update {
        /// Site label
        site: String,
        /// Username for the site
        username: String,
        /// New password (omit for interactive prompt)
        password: Option<String>,
    },

    /// Delete the first credential stored for a site
    Delete {
        /// Site label
        site: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master passphrase, trying in order:
/// 1. `PASSKEEP_PASSPHRASE` env var (scripts/CI)
/// 2. Interactive masked prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_master_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSKEEP_PASSPHRASE") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master passphrase")
        .interact()
        .map_err(|e| PassKeepError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Resolve the vault file path: `--vault` flag (or `PASSKEEP_VAULT`) wins,
/// otherwise the config file / defaults decide.
pub fn vault_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.vault {
        return Ok(path.clone());
    }

    let home = home_dir()?;
    let settings = Settings::load(&home)?;
    Ok(settings.vault_path(&home))
}

/// Build a `VaultService` for the resolved vault path with the master
/// passphrase already supplied.
pub fn unlocked_service(cli: &Cli) -> Result<VaultService> {
    let path = vault_path(cli)?;
    let passphrase = prompt_master_passphrase()?;

    let mut service = VaultService::new(VaultRepository::new(path));
    service.set_master_passphrase(&passphrase);
    Ok(service)
}

/// Determine a password value from one of three sources: an inline
/// argument, piped stdin, or an interactive masked prompt.
pub fn read_password_value(prompt: &str, value: Option<&str>) -> Result<String> {
    if let Some(v) = value {
        output::warning("Password provided on command line — it may appear in shell history.");
        return Ok(v.to_string());
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf.trim_end().to_string());
    }

    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| PassKeepError::CommandFailed(format!("password prompt: {e}")))
}
