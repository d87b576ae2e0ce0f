//! Status command implementation
//!
//! Fetches the feed, derives the headline metrics from the newest snapshot
//! and prints them, either as console rows or as JSON for scripting.

use anyhow::Result;
use log::warn;
use serde::Serialize;

use crate::error::ProgressError;
use crate::metrics::ProgressSummary;
use crate::report::ProgressReporter;

/// JSON document emitted by `decomp-progress status --json`
#[derive(Serialize)]
struct StatusDocument<'a> {
    summary: &'a ProgressSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<&'a str>,
    snapshots: usize,
}

/// Show current decompilation progress
///
/// Performs one feed fetch and one badge fetch. A badge failure is not
/// fatal here: the report simply omits the badge row, the same way the
/// website shows placeholder text until the badge resolves.
pub fn cmd_status(json: bool) -> Result<()> {
    let (feed, _config) = super::feed_client()?;

    let entries = if json {
        feed.load_entries()?
    } else {
        super::with_spinner("Fetching progress feed...", || feed.load_entries())?
    };

    let summary = ProgressSummary::from_latest(&entries).ok_or(ProgressError::EmptyFeed)?;

    let badge = match feed.current_progress_text() {
        Ok(message) => Some(message),
        Err(err) => {
            warn!("badge fetch failed: {}", err);
            None
        }
    };

    if json {
        let doc = StatusDocument {
            summary: &summary,
            badge: badge.as_deref(),
            snapshots: entries.len(),
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        ProgressReporter::new().print_summary(&summary, badge.as_deref());
    }

    Ok(())
}
