//! Badge command implementation
//!
//! Prints the badge `message` field verbatim, suitable for embedding in
//! shell prompts or CI annotations. Unlike `status`, a badge failure here
//! is fatal: this command has nothing else to show.

use anyhow::Result;

/// Print the current progress badge text
pub fn cmd_badge() -> Result<()> {
    let (feed, _config) = super::feed_client()?;

    let message = feed.current_progress_text()?;
    println!("{}", message);

    Ok(())
}
