//! One module per subcommand. Each exposes an `execute` entry point.

pub mod derive;
pub mod verify;
