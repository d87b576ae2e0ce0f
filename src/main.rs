use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;

use decomp_progress::cmd;

/// Decompilation progress tracker
///
/// decomp-progress fetches a project's progress feed and renders how much
/// of the original binary has been decompiled, both right now and over time.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current decompilation progress
    Status {
        /// Output as JSON (for CI/CD integration)
        #[arg(long)]
        json: bool,
    },

    /// Show decompilation progress over time
    History {
        /// Only show the newest N snapshots
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output the chart series as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the current progress badge text
    Badge,

    /// Initialize decomp-progress configuration
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Status { json }) => cmd::cmd_status(*json),
        Some(Commands::History { limit, json }) => cmd::cmd_history(*limit, *json),
        Some(Commands::Badge) => cmd::cmd_badge(),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("decomp-progress v{}", env!("CARGO_PKG_VERSION"));
            println!("Decompilation progress tracker\n");
            println!("Usage: decomp-progress <COMMAND>\n");
            println!("Commands:");
            println!("  status   Show current decompilation progress");
            println!("  history  Show decompilation progress over time");
            println!("  badge    Print the current progress badge text");
            println!("  init     Initialize decomp-progress configuration");
            println!("\nRun 'decomp-progress <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use decomp_progress::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }
}
