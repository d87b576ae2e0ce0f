//! Init command implementation
//!
//! Handles the `decomp-progress init` command which writes a default
//! configuration file into the working directory.

use anyhow::Result;
use console::style;
use std::env;

use crate::config::{ConfigFile, ConfigLoader, CONFIG_FILE_NAME};
use crate::fmt::{CHECKMARK, INFO, ROCKET};

/// Initialize decomp-progress configuration
///
/// Creates a `.decomp-progress.toml` file with the default endpoints and
/// chart settings. Refuses to overwrite an existing file.
pub fn cmd_init() -> Result<()> {
    println!(
        "{} {} Initializing decomp-progress",
        ROCKET,
        style("decomp-progress init").bold()
    );
    println!();

    let dir = env::current_dir()?;

    if ConfigLoader::exists(&dir) {
        println!(
            "{} Config file already exists: {}",
            style("⚠️").yellow(),
            style(CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(());
    }

    let config = ConfigFile::default();
    ConfigLoader::save(&config, &dir)?;

    println!(
        "{} Wrote {}",
        CHECKMARK,
        style(CONFIG_FILE_NAME).cyan()
    );
    println!(
        "   {} Point progress-csv-url and badge-json-url at your project's feed",
        INFO
    );

    Ok(())
}
