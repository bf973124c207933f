//! `mppass derive`: print the mppass for a username.
//!
//! This is also what a bare `mppass` invocation runs.

use crate::cli::{load_salt, output, prompt_username, Cli};
use crate::crypto;
use crate::errors::Result;

/// Execute the `derive` command.
pub fn execute(cli: &Cli, username: Option<&str>) -> Result<()> {
    // Salt first: a missing or bad salt fails before any prompt.
    let salt = load_salt(cli)?;
    let username = prompt_username(username)?;

    let mppass = crypto::derive(&salt, &username);
    output::mppass(&mppass);

    Ok(())
}
