//! History command implementation
//!
//! Fetches the feed and renders the full snapshot history: a table of
//! per-snapshot percentages plus a text chart of decompiled size percent
//! over time. `--json` emits the chart series for external charting.

use anyhow::Result;

use crate::chart;
use crate::error::ProgressError;
use crate::report::ProgressReporter;

/// Show decompilation progress over time
pub fn cmd_history(limit: Option<usize>, json: bool) -> Result<()> {
    let (feed, config) = super::feed_client()?;

    let entries = if json {
        feed.load_entries()?
    } else {
        super::with_spinner("Fetching progress feed...", || feed.load_entries())?
    };

    if entries.is_empty() {
        return Err(ProgressError::EmptyFeed.into());
    }

    // Keep the newest N snapshots; the feed is ordered oldest first.
    let entries = match limit {
        Some(n) => &entries[entries.len().saturating_sub(n)..],
        None => &entries[..],
    };

    let series = chart::decompiled_series(entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    } else {
        ProgressReporter::new().print_history(entries);

        let chart_config = config.chart_config();
        print!("{}", chart::render(&series, &chart_config));
    }

    Ok(())
}
