//! Console rendering of progress reports

use console::style;

use crate::feed::{percent_of, Snapshot};
use crate::fmt::{format_percent, format_size_mb, CHART};
use crate::metrics::ProgressSummary;

/// Decimal digits used for percentages in reports.
const PERCENT_DIGITS: usize = 3;

/// Handles console output of summaries and history tables
pub struct ProgressReporter;

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        Self
    }

    /// Print the headline summary rows.
    ///
    /// `badge` is the current-progress badge message; `None` leaves the
    /// row out rather than inventing a fallback value.
    pub fn print_summary(&self, summary: &ProgressSummary, badge: Option<&str>) {
        println!("\n{} Decompilation Progress", CHART);
        println!("{}", "=".repeat(64));

        self.print_row(
            "Functions",
            &format!(
                "{}/{} - {}",
                summary.decompiled.count,
                summary.total.count,
                format_percent(summary.function_ratio, PERCENT_DIGITS)
            ),
            false,
        );
        self.print_row(
            "Decompiled",
            &format!(
                "{}/{} MB - {}",
                format_size_mb(summary.decompiled.size, PERCENT_DIGITS),
                format_size_mb(summary.total.size, PERCENT_DIGITS),
                format_percent(summary.decompiled_ratio, PERCENT_DIGITS)
            ),
            false,
        );
        self.print_row(
            "Matching",
            &format_percent(summary.matching_ratio, PERCENT_DIGITS),
            true,
        );
        self.print_row(
            "Non-matching (minor issues)",
            &format_percent(summary.nm_minor_ratio, PERCENT_DIGITS),
            true,
        );
        self.print_row(
            "Non-matching (major issues)",
            &format_percent(summary.nm_major_ratio, PERCENT_DIGITS),
            true,
        );

        println!("{}", "-".repeat(64));
        println!(
            "As of {} (commit {})",
            summary.timestamp.format("%Y-%m-%d %H:%M UTC"),
            truncate(&summary.revision, 12)
        );
        if let Some(message) = badge {
            println!("Badge: {}", style(message).bold().cyan());
        }
        println!("{}", "=".repeat(64));
    }

    fn print_row(&self, title: &str, value: &str, second_level: bool) {
        if second_level {
            println!("  - {:<29} {}", format!("{}:", title), style(value).bold());
        } else {
            println!("{:<33} {}", format!("{}:", title), style(value).bold());
        }
    }

    /// Print the snapshot history as a table.
    pub fn print_history(&self, entries: &[Snapshot]) {
        println!("\n{} Progress History", CHART);
        println!("{}", "=".repeat(64));
        println!(
            "{:<18} {:<14} {:>14} {:>14}",
            "Date", "Revision", "Decompiled", "Matching"
        );
        println!("{}", "-".repeat(64));

        for entry in entries {
            println!(
                "{:<18} {:<14} {:>14} {:>14}",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                truncate(&entry.revision, 14),
                format_percent(percent_of(entry.decompiled, entry.total), PERCENT_DIGITS),
                format_percent(percent_of(entry.matching, entry.total), PERCENT_DIGITS),
            );
        }

        println!("{}", "=".repeat(64));
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate string to max length
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
