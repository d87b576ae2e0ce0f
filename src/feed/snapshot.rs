//! Typed progress records parsed from the feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pair of function count and byte size
///
/// Every progress category (total, matching, ...) is measured both in
/// number of functions and number of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Number of functions
    pub count: u64,
    /// Number of bytes
    pub size: u64,
}

impl Counts {
    /// Field-wise sum of two measurements
    pub fn plus(self, other: Counts) -> Counts {
        Counts {
            count: self.count + other.count,
            size: self.size + other.size,
        }
    }
}

/// Fraction of `whole` covered by `part`, by byte size
///
/// Callers must ensure `whole.size > 0`; the corpus total of a non-empty
/// feed is never zero, so no guard exists here.
///
/// # Examples
///
/// ```
/// use decomp_progress::feed::{percent_of, Counts};
///
/// let part = Counts { count: 55, size: 550 };
/// let whole = Counts { count: 100, size: 1000 };
/// assert_eq!(percent_of(part, whole), 0.55);
/// ```
pub fn percent_of(part: Counts, whole: Counts) -> f64 {
    part.size as f64 / whole.size as f64
}

/// One decompilation progress measurement from the feed
///
/// `total` does not hold the row's own wire value: after a feed is parsed,
/// every snapshot carries the total of the newest snapshot, so percentages
/// over time are always relative to the current corpus size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Row schema version tag (currently always `"1"`)
    pub version: String,
    /// Point in time the measurement was recorded
    pub timestamp: DateTime<Utc>,
    /// Source-control revision the measurement was taken at
    pub revision: String,
    /// Corpus size, taken from the newest snapshot in the feed
    pub total: Counts,
    /// Sum of matching and both non-matching categories
    pub decompiled: Counts,
    /// Functions reproduced byte-for-byte
    pub matching: Counts,
    /// Functions reimplemented with small discrepancies
    pub nm_minor: Counts,
    /// Functions reimplemented with significant discrepancies
    pub nm_major: Counts,
}
