//! `mppass verify`: check a presented mppass for a username.

use crate::cli::{load_salt, output, prompt_username, Cli};
use crate::crypto;
use crate::errors::{MppassError, Result};

/// Execute the `verify` command.
pub fn execute(cli: &Cli, presented: &str, username: Option<&str>) -> Result<()> {
    let salt = load_salt(cli)?;
    let username = prompt_username(username)?;

    if !crypto::verify(&salt, &username, presented) {
        return Err(MppassError::MppassMismatch(username.to_string()));
    }

    output::success(&format!("mppass matches for user '{username}'"));
    Ok(())
}
