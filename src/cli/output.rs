//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so every command
//! styles its results the same way. Colors drop out automatically when
//! the stream is not a terminal.

use console::style;

use crate::crypto::Mppass;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print the failure line on stdout: "Error: {msg}"
pub fn error(msg: &str) {
    println!("{} {}", style("Error:").red().bold(), msg);
}

/// Print the derived credential on a single stdout line.
pub fn mppass(value: &Mppass) {
    println!("Generated mppass: {}", style(value).bold());
}
