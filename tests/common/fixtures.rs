//! Test fixture helpers for CLI tests
//!
//! Provides utilities for setting up working directories with a
//! `.decomp-progress.toml` pointing at controlled endpoints.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// A well-formed two-snapshot feed matching the wire schema.
pub const SAMPLE_FEED: &str = "1,1600000000,abc123,100,1000,40,400,10,100,5,50\n\
                               1,1600003600,def456,100,1000,45,450,10,100,5,50\n";

/// Creates a working directory whose config points at the given endpoints
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the config file) - the TempDir must be
/// kept alive for the duration of the test.
pub fn create_configured_dir(
    csv_url: &str,
    badge_url: &str,
) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join(".decomp-progress.toml");

    fs::write(
        &config_path,
        format!(
            "progress-csv-url = \"{}\"\nbadge-json-url = \"{}\"\ncache-bust = false\n",
            csv_url, badge_url
        ),
    )?;

    Ok((temp_dir, config_path))
}

/// Generate a synthetic well-formed feed with `rows` snapshots
///
/// Progress rises monotonically; the corpus total stays fixed so derived
/// percentages are easy to reason about in assertions.
pub fn synthetic_feed(rows: usize) -> String {
    let mut feed = String::with_capacity(rows * 48);
    for i in 0..rows {
        writeln!(
            feed,
            "1,{},rev{:06},5000,500000,{},{},{},{},{},{}",
            1_600_000_000 + i as u64 * 3600,
            i,
            1000 + i,
            (1000 + i) * 10,
            200,
            2000,
            100,
            1000,
        )
        .expect("writing to a String cannot fail");
    }
    feed
}
