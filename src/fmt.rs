//! Shared formatting utilities for metric display and console output

use console::Emoji;

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Format a 0.0–1.0 ratio as a percentage with fixed decimal digits
///
/// # Examples
///
/// ```
/// use decomp_progress::fmt::format_percent;
///
/// assert_eq!(format_percent(0.55, 3), "55.000%");
/// assert_eq!(format_percent(0.42123, 3), "42.123%");
/// assert_eq!(format_percent(1.0, 2), "100.00%");
/// ```
pub fn format_percent(ratio: f64, digits: usize) -> String {
    format!("{:.*}%", digits, 100.0 * ratio)
}

/// Format a byte size as decimal megabytes with fixed decimal digits
///
/// Uses decimal megabytes (1 MB = 1,000,000 bytes), matching how corpus
/// sizes are reported to users.
///
/// # Examples
///
/// ```
/// use decomp_progress::fmt::format_size_mb;
///
/// assert_eq!(format_size_mb(1_000_000, 3), "1.000");
/// assert_eq!(format_size_mb(12_345_678, 3), "12.346");
/// assert_eq!(format_size_mb(550, 3), "0.001");
/// ```
pub fn format_size_mb(size_bytes: u64, digits: usize) -> String {
    format!("{:.*}", digits, size_bytes as f64 / 1_000_000.0)
}
