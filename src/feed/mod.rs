//! Progress feed client and parsing
//!
//! The feed is a remotely hosted CSV of historical progress snapshots plus
//! a small JSON badge document with the current headline percentage. Each
//! call rebuilds the full snapshot sequence from scratch; nothing is cached
//! between invocations and concurrent calls share no mutable state.

mod parser;
mod snapshot;

pub use parser::{parse_entries, FIELDS_PER_ROW, SCHEMA_VERSION};
pub use snapshot::{percent_of, Counts, Snapshot};

use chrono::Utc;
use log::debug;

use crate::error::ProgressError;
use crate::transport::{HttpTransport, Transport};

/// Default location of the progress CSV feed.
pub const DEFAULT_PROGRESS_CSV_URL: &str = "https://botw.link/progress.csv";

/// Default location of the current-progress JSON badge.
pub const DEFAULT_BADGE_JSON_URL: &str = "https://botw.link/badges/progress.json";

/// Client for the progress feed endpoints.
///
/// Holds the endpoint URLs and a [`Transport`]; each operation performs
/// exactly one fetch and returns a freshly parsed result.
pub struct ProgressFeed<T: Transport = HttpTransport> {
    transport: T,
    csv_url: String,
    badge_url: String,
    cache_bust: bool,
}

impl ProgressFeed<HttpTransport> {
    /// Create a feed client for the given endpoints over real HTTP.
    pub fn new(csv_url: impl Into<String>, badge_url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new(), csv_url, badge_url)
    }
}

impl<T: Transport> ProgressFeed<T> {
    /// Create a feed client with a custom transport implementation.
    pub fn with_transport(
        transport: T,
        csv_url: impl Into<String>,
        badge_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            csv_url: csv_url.into(),
            badge_url: badge_url.into(),
            cache_bust: false,
        }
    }

    /// Enable or disable the `?v=<unix-millis>` cache-busting parameter on
    /// the CSV URL, so intermediaries never serve a stale feed.
    pub fn cache_bust(mut self, enabled: bool) -> Self {
        self.cache_bust = enabled;
        self
    }

    /// Fetch and parse the full snapshot sequence.
    ///
    /// Performs exactly one network fetch. Returns one snapshot per
    /// non-empty feed line, in feed order, with every snapshot's `total`
    /// normalized to the newest snapshot's total. Fetch failures and
    /// malformed rows propagate as errors; there are no retries and no
    /// partial results.
    pub fn load_entries(&self) -> Result<Vec<Snapshot>, ProgressError> {
        let url = self.feed_url();
        debug!("fetching progress feed from {}", url);

        let csv = self.transport.fetch_text(&url)?;
        let entries = parse_entries(&csv)?;
        debug!("parsed {} snapshots", entries.len());

        Ok(entries)
    }

    /// Fetch the current-progress badge and return its `message` verbatim.
    ///
    /// The badge endpoint is independent of the CSV feed. No fallback text
    /// is computed here; callers decide what to show while this resolves
    /// or when it fails.
    pub fn current_progress_text(&self) -> Result<String, ProgressError> {
        debug!("fetching progress badge from {}", self.badge_url);
        let body = self.transport.fetch_text(&self.badge_url)?;

        let doc: serde_json::Value =
            serde_json::from_str(&body).map_err(|err| ProgressError::BadgeFormat {
                detail: format!("response is not valid JSON: {}", err),
            })?;

        doc.get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ProgressError::BadgeFormat {
                detail: "missing string field 'message'".to_string(),
            })
    }

    fn feed_url(&self) -> String {
        if self.cache_bust {
            format!("{}?v={}", self.csv_url, Utc::now().timestamp_millis())
        } else {
            self.csv_url.clone()
        }
    }
}
