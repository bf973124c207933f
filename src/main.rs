use clap::Parser;
use mppass::cli::{Cli, Commands};

fn main() {
    mppass::logging::init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        None => mppass::cli::commands::derive::execute(&cli, None),
        Some(Commands::Derive { ref username }) => {
            mppass::cli::commands::derive::execute(&cli, username.as_deref())
        }
        Some(Commands::Verify {
            mppass: ref presented,
            ref username,
        }) => mppass::cli::commands::verify::execute(&cli, presented, username.as_deref()),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        mppass::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
