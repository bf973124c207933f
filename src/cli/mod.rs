//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::crypto::Username;
use crate::errors::{MppassError, Result};
use crate::salt::{Salt, SaltStore};

/// mppass CLI: derive per-user credentials from a server salt.
#[derive(Parser)]
#[command(
    name = "mppass",
    about = "Derive mppass credentials from a server salt",
    version
)]
pub struct Cli {
    /// What to do (default: derive, prompting for a username)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Salt file (default: server.salt, or `salt_file` in .mppass.toml)
    #[arg(long, env = "MPPASS_SALT_FILE", global = true)]
    pub salt_file: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Derive the mppass for a username
    Derive {
        /// Username (omit for interactive prompt)
        username: Option<String>,
    },

    /// Check an mppass against the one derived for a username
    Verify {
        /// The mppass to check
        mppass: String,

        /// Username (omit for interactive prompt)
        #[arg(short, long)]
        username: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Work out which salt file to read, trying in order:
/// 1. `--salt-file` / `MPPASS_SALT_FILE`
/// 2. `salt_file` from `.mppass.toml` in the working directory
/// 3. `server.salt` in the working directory
pub fn salt_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.salt_file {
        return Ok(path.clone());
    }

    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    Ok(settings.salt_path())
}

/// Load and validate the salt selected by the CLI arguments.
pub fn load_salt(cli: &Cli) -> Result<Salt> {
    let path = salt_path(cli)?;
    tracing::debug!(path = %path.display(), "resolved salt path");
    SaltStore::new(path).load()
}

/// Get the username, trying in order:
/// 1. The value passed on the command line
/// 2. An interactive prompt, when stdin is a terminal
/// 3. One line read from stdin (piped / scripted use)
pub fn prompt_username(provided: Option<&str>) -> Result<Username> {
    if let Some(name) = provided {
        return Username::parse(name);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        let name = dialoguer::Input::<String>::new()
            .with_prompt("Enter username")
            .interact_text()
            .map_err(|e| MppassError::CommandFailed(format!("username prompt: {e}")))?;
        return Username::parse(&name);
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Username::parse(&line)
}
