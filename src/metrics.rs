//! Derived progress metrics
//!
//! Pure, stateless helpers that turn an already-parsed snapshot sequence
//! into the headline numbers shown to users. Nothing here touches the
//! network; the split keeps metric derivation unit-testable without a
//! transport.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::feed::{percent_of, Counts, Snapshot};

/// Headline metrics derived from the newest snapshot of a feed
///
/// All ratios are fractions in 0.0–1.0 against the corpus total, by byte
/// size except for `function_ratio` which is by function count.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    /// When the newest snapshot was recorded
    pub timestamp: DateTime<Utc>,
    /// Source-control revision of the newest snapshot
    pub revision: String,
    /// Corpus total
    pub total: Counts,
    /// Decompiled functions and bytes
    pub decompiled: Counts,
    /// Byte-for-byte matching functions and bytes
    pub matching: Counts,
    /// Decompiled function count over total function count
    pub function_ratio: f64,
    /// Decompiled bytes over total bytes
    pub decompiled_ratio: f64,
    /// Matching bytes over total bytes
    pub matching_ratio: f64,
    /// Non-matching (minor issues) bytes over total bytes
    pub nm_minor_ratio: f64,
    /// Non-matching (major issues) bytes over total bytes
    pub nm_major_ratio: f64,
}

impl ProgressSummary {
    /// Derive the summary from the newest snapshot of a sequence.
    ///
    /// Returns `None` for an empty sequence; an empty feed has no corpus
    /// total to divide by.
    pub fn from_latest(entries: &[Snapshot]) -> Option<Self> {
        let last = entries.last()?;

        Some(Self {
            timestamp: last.timestamp,
            revision: last.revision.clone(),
            total: last.total,
            decompiled: last.decompiled,
            matching: last.matching,
            function_ratio: last.decompiled.count as f64 / last.total.count as f64,
            decompiled_ratio: percent_of(last.decompiled, last.total),
            matching_ratio: percent_of(last.matching, last.total),
            nm_minor_ratio: percent_of(last.nm_minor, last.total),
            nm_major_ratio: percent_of(last.nm_major, last.total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::parse_entries;

    const FEED: &str = "1,1600000000,abc123,100,1000,40,400,10,100,5,50\n\
                        1,1600003600,def456,100,1000,45,450,10,100,5,50\n";

    #[test]
    fn test_summary_uses_newest_snapshot() {
        let entries = parse_entries(FEED).unwrap();
        let summary = ProgressSummary::from_latest(&entries).unwrap();

        assert_eq!(summary.revision, "def456");
        assert_eq!(summary.decompiled, Counts { count: 60, size: 600 });
        assert_eq!(summary.function_ratio, 0.6);
        assert_eq!(summary.decompiled_ratio, 0.6);
        assert_eq!(summary.matching_ratio, 0.45);
        assert_eq!(summary.nm_minor_ratio, 0.1);
        assert_eq!(summary.nm_major_ratio, 0.05);
    }

    #[test]
    fn test_summary_of_empty_sequence_is_none() {
        assert!(ProgressSummary::from_latest(&[]).is_none());
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let entries = parse_entries(FEED).unwrap();
        let summary = ProgressSummary::from_latest(&entries).unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["revision"], "def456");
        assert_eq!(json["total"]["size"], 1000);
        assert_eq!(json["decompiled_ratio"], 0.6);
    }
}
