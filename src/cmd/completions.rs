//! Completions command implementation
//!
//! Handles the `decomp-progress completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// decomp-progress completions bash > /etc/bash_completion.d/decomp-progress
///
/// # Zsh
/// decomp-progress completions zsh > ~/.zfunc/_decomp-progress
///
/// # Fish
/// decomp-progress completions fish > ~/.config/fish/completions/decomp-progress.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    // We need to re-create the command structure here since Cli is in main.rs
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("decomp-progress")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decompilation progress tracker")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("status").about("Show current decompilation progress"))
        .subcommand(Command::new("history").about("Show decompilation progress over time"))
        .subcommand(Command::new("badge").about("Print the current progress badge text"))
        .subcommand(Command::new("init").about("Initialize decomp-progress configuration"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "decomp-progress".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
