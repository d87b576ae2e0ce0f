#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! decomp-progress library
//!
//! This library provides the core functionality for tracking decompilation
//! progress from a remote CSV feed. It can be used programmatically in
//! addition to the CLI interface.
//!
//! # Basic Example
//!
//! Parsing a feed and reading the derived categories:
//!
//! ```
//! use decomp_progress::feed::parse_entries;
//!
//! let feed = "1,1600000000,abc123,100,1000,40,400,10,100,5,50\n\
//!             1,1600003600,def456,100,1000,45,450,10,100,5,50\n";
//! let entries = parse_entries(feed)?;
//!
//! assert_eq!(entries.len(), 2);
//! // decompiled = matching + non-matching (minor) + non-matching (major)
//! assert_eq!(entries[0].decompiled.count, 55);
//! // every snapshot carries the newest corpus total
//! assert_eq!(entries[0].total.size, 1000);
//! # Ok::<(), decomp_progress::error::ProgressError>(())
//! ```
//!
//! # Advanced Example: Headline Metrics
//!
//! Deriving the summary shown by `decomp-progress status`:
//!
//! ```
//! use decomp_progress::feed::parse_entries;
//! use decomp_progress::metrics::ProgressSummary;
//! use decomp_progress::fmt::format_percent;
//!
//! let feed = "1,1600000000,abc123,100,1000,40,400,10,100,5,50\n";
//! let entries = parse_entries(feed)?;
//!
//! let summary = ProgressSummary::from_latest(&entries).expect("non-empty feed");
//! assert_eq!(format_percent(summary.decompiled_ratio, 3), "55.000%");
//! # Ok::<(), decomp_progress::error::ProgressError>(())
//! ```
//!
//! # Advanced Example: Charting
//!
//! Rendering the progress-over-time chart with explicit options:
//!
//! ```
//! use decomp_progress::chart::{decompiled_series, render, ChartConfig};
//! use decomp_progress::feed::parse_entries;
//!
//! let feed = "1,1600000000,abc123,100,1000,40,400,10,100,5,50\n\
//!             1,1600003600,def456,100,1000,45,450,10,100,5,50\n";
//! let entries = parse_entries(feed)?;
//!
//! let config = ChartConfig { width: 40, height: 8, percent_digits: 2 };
//! let chart = render(&decompiled_series(&entries), &config);
//! assert!(chart.contains("60.00%"));
//! # Ok::<(), decomp_progress::error::ProgressError>(())
//! ```

/// Terminal time-series chart rendering
pub mod chart;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file and loading
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Feed client and CSV parsing
pub mod feed;
/// Shared formatting utilities
pub mod fmt;
/// Derived progress metrics
pub mod metrics;
/// Console rendering of progress reports
pub mod report;
/// Transport abstraction over HTTP fetches
pub mod transport;
