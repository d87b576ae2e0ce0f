//! Terminal time-series chart of decompilation progress
//!
//! The chart is a pure transformation: snapshots are first mapped to a
//! series of (timestamp, ratio) points, then rendered to text against an
//! explicit [`ChartConfig`]. All rendering options travel through that
//! value; there is no process-global chart state.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::feed::{percent_of, Snapshot};
use crate::fmt::format_percent;

/// One point of the rendered time series
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    /// When the snapshot was recorded
    pub timestamp: DateTime<Utc>,
    /// Decompiled bytes over total bytes, 0.0–1.0
    pub ratio: f64,
    /// Source-control revision of the snapshot
    pub revision: String,
}

/// Rendering options for the text chart
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Plot width in columns, excluding the y-axis gutter
    pub width: usize,
    /// Plot height in rows
    pub height: usize,
    /// Decimal digits on y-axis percentage labels
    pub percent_digits: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 72,
            height: 12,
            percent_digits: 2,
        }
    }
}

impl ChartConfig {
    /// Validate that the chart dimensions are renderable
    ///
    /// The x-axis needs room for two date labels, and a plot shorter than
    /// two rows cannot show a trend.
    pub fn validate(&self) -> Result<()> {
        if self.width < 24 {
            anyhow::bail!("Chart width ({}) must be at least 24 columns", self.width);
        }
        if self.height < 2 {
            anyhow::bail!("Chart height ({}) must be at least 2 rows", self.height);
        }
        Ok(())
    }
}

/// Width of the y-axis label gutter, including the axis character.
const GUTTER: usize = 9;

/// Map snapshots to the decompiled-size-percent series.
///
/// The y value divides by the snapshot's `total`, which after parsing is
/// the newest corpus size on every row, so the denominator is constant
/// across the series.
pub fn decompiled_series(entries: &[Snapshot]) -> Vec<ChartPoint> {
    entries
        .iter()
        .map(|entry| ChartPoint {
            timestamp: entry.timestamp,
            ratio: percent_of(entry.decompiled, entry.total),
            revision: entry.revision.clone(),
        })
        .collect()
}

/// Render a series as a text chart.
///
/// Output is deterministic for a given series and config, is exactly
/// `config.width + GUTTER` columns wide, and always starts the y-axis at
/// zero so progress is never visually exaggerated.
///
/// # Examples
///
/// ```
/// use decomp_progress::chart::{render, ChartConfig};
///
/// let chart = render(&[], &ChartConfig::default());
/// assert_eq!(chart, "(no data)\n");
/// ```
pub fn render(series: &[ChartPoint], config: &ChartConfig) -> String {
    if series.is_empty() {
        return "(no data)\n".to_string();
    }

    let y_max = series
        .iter()
        .map(|point| point.ratio)
        .fold(0.0_f64, f64::max)
        .max(f64::EPSILON);

    // Resample the series to one value per plot column.
    let levels: Vec<usize> = (0..config.width)
        .map(|col| {
            let idx = if config.width == 1 {
                0
            } else {
                col * (series.len() - 1) / (config.width - 1)
            };
            let scaled = series[idx].ratio / y_max * config.height as f64;
            (scaled.ceil() as usize).min(config.height)
        })
        .collect();

    let mut out = String::new();

    for row in (1..=config.height).rev() {
        let label = if row == config.height {
            format_percent(y_max, config.percent_digits)
        } else if row == 1 {
            format_percent(0.0, config.percent_digits)
        } else {
            String::new()
        };
        out.push_str(&format!("{:>width$} |", label, width = GUTTER - 2));

        for &level in &levels {
            out.push(if level >= row { '#' } else { ' ' });
        }
        out.push('\n');
    }

    // X axis with the date range underneath.
    out.push_str(&format!("{:>width$} +", "", width = GUTTER - 2));
    out.push_str(&"-".repeat(config.width));
    out.push('\n');

    let first = series[0].timestamp.format("%Y-%m-%d").to_string();
    let last = series[series.len() - 1].timestamp.format("%Y-%m-%d").to_string();
    let padding = config.width.saturating_sub(first.len() + last.len());
    out.push_str(&format!(
        "{:>width$} {}{}{}\n",
        "",
        first,
        " ".repeat(padding),
        last,
        width = GUTTER - 1,
    ));

    out
}
