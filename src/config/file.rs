//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::chart::ChartConfig;
use crate::feed::{DEFAULT_BADGE_JSON_URL, DEFAULT_PROGRESS_CSV_URL};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".decomp-progress.toml";

/// decomp-progress configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Progress CSV feed endpoint
    #[serde(rename = "progress-csv-url", default = "default_progress_csv_url")]
    pub progress_csv_url: String,

    /// Current-progress JSON badge endpoint
    #[serde(rename = "badge-json-url", default = "default_badge_json_url")]
    pub badge_json_url: String,

    /// Append a cache-busting query parameter to feed fetches
    #[serde(rename = "cache-bust", default = "default_cache_bust")]
    pub cache_bust: bool,

    /// Chart rendering overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSettings>,
}

fn default_progress_csv_url() -> String {
    DEFAULT_PROGRESS_CSV_URL.to_string()
}

fn default_badge_json_url() -> String {
    DEFAULT_BADGE_JSON_URL.to_string()
}

fn default_cache_bust() -> bool {
    true
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            progress_csv_url: default_progress_csv_url(),
            badge_json_url: default_badge_json_url(),
            cache_bust: default_cache_bust(),
            chart: None,
        }
    }
}

impl ConfigFile {
    /// Resolve the effective chart configuration.
    ///
    /// Settings absent from the file fall back to [`ChartConfig::default`].
    pub fn chart_config(&self) -> ChartConfig {
        let defaults = ChartConfig::default();
        match &self.chart {
            Some(settings) => ChartConfig {
                width: settings.width.unwrap_or(defaults.width),
                height: settings.height.unwrap_or(defaults.height),
                percent_digits: settings.percent_digits.unwrap_or(defaults.percent_digits),
            },
            None => defaults,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.progress_csv_url.is_empty() {
            anyhow::bail!("progress-csv-url must not be empty");
        }
        if self.badge_json_url.is_empty() {
            anyhow::bail!("badge-json-url must not be empty");
        }
        self.chart_config().validate()
    }
}

/// Chart rendering settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Plot width in columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,

    /// Plot height in rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,

    /// Decimal digits on y-axis percentage labels
    #[serde(rename = "percent-digits", skip_serializing_if = "Option::is_none")]
    pub percent_digits: Option<usize>,
}
