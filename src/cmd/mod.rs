//! Command handlers for the decomp-progress CLI
//!
//! This module contains all command implementations, organized by
//! functionality. Each submodule handles a specific CLI command.

pub mod badge;
pub mod completions;
pub mod history;
pub mod init;
pub mod status;

// Re-export command functions for convenient access
pub use badge::cmd_badge;
pub use completions::cmd_completions;
pub use history::cmd_history;
pub use init::cmd_init;
pub use status::cmd_status;

use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;

use crate::config::{ConfigFile, ConfigLoader};
use crate::feed::ProgressFeed;
use crate::transport::HttpTransport;

/// Build a feed client from the working directory's configuration.
pub(crate) fn feed_client() -> Result<(ProgressFeed<HttpTransport>, ConfigFile)> {
    let dir = std::env::current_dir()?;
    let config = ConfigLoader::load(&dir)?;

    let feed = ProgressFeed::new(&config.progress_csv_url, &config.badge_json_url)
        .cache_bust(config.cache_bust);

    Ok((feed, config))
}

/// Run `work` behind a console spinner.
pub(crate) fn with_spinner<T>(message: &'static str, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = work();

    spinner.finish_and_clear();
    result
}
