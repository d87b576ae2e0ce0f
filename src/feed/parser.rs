//! Progress feed CSV parsing
//!
//! The feed is one record per line, 11 comma-separated fields, no header
//! row and no quoting:
//!
//! ```text
//! version,unixTimestampSeconds,revisionId,totalCount,totalSize,
//! matchingCount,matchingSize,nmMinorCount,nmMinorSize,nmMajorCount,nmMajorSize
//! ```
//!
//! Fields never contain a literal comma; the producer is trusted, so a
//! naive split is used. Row order is preserved as-is and assumed to be
//! chronological ascending.

use chrono::DateTime;

use super::snapshot::{Counts, Snapshot};
use crate::error::ProgressError;

/// Wire rows always carry exactly this many fields.
pub const FIELDS_PER_ROW: usize = 11;

/// The only feed schema version currently recognized.
pub const SCHEMA_VERSION: &str = "1";

/// Parse a raw CSV feed into an ordered sequence of snapshots.
///
/// Empty lines are skipped, which covers the trailing newline at
/// end-of-file. Any malformed row aborts the whole parse; there is no
/// partial-success mode.
///
/// After parsing, every snapshot's `total` is overwritten with the total
/// of the last (newest) snapshot. The per-row wire totals of older rows
/// are deliberately discarded: progress-over-time charts must use the
/// current corpus size as a constant denominator, not a moving one.
///
/// # Examples
///
/// ```
/// use decomp_progress::feed::parse_entries;
///
/// let feed = "1,1600000000,abc123,100,1000,40,400,10,100,5,50\n";
/// let entries = parse_entries(feed)?;
///
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].decompiled.count, 55);
/// assert_eq!(entries[0].decompiled.size, 550);
/// # Ok::<(), decomp_progress::error::ProgressError>(())
/// ```
pub fn parse_entries(csv: &str) -> Result<Vec<Snapshot>, ProgressError> {
    let mut entries = Vec::new();

    for (idx, line) in csv.split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }

        entries.push(parse_row(idx + 1, line)?);
    }

    // The last entry holds the current corpus size; broadcast it to every
    // row so percentages share a constant denominator.
    if let Some(total) = entries.last().map(|entry| entry.total) {
        for entry in &mut entries {
            entry.total = total;
        }
    }

    Ok(entries)
}

/// Parse a single feed row.
fn parse_row(line: usize, raw: &str) -> Result<Snapshot, ProgressError> {
    let fields: Vec<&str> = raw.split(',').collect();

    if fields.len() != FIELDS_PER_ROW {
        return Err(ProgressError::InvalidRow {
            line,
            expected: FIELDS_PER_ROW,
            found: fields.len(),
        });
    }

    let version = fields[0];
    if version != SCHEMA_VERSION {
        return Err(ProgressError::UnexpectedVersion {
            line,
            version: version.to_string(),
        });
    }

    let timestamp = parse_timestamp(line, fields[1])?;
    let revision = fields[2].to_string();

    let total = parse_counts(line, "total count", fields[3], "total size", fields[4])?;
    let matching = parse_counts(line, "matching count", fields[5], "matching size", fields[6])?;
    let nm_minor = parse_counts(
        line,
        "non-matching (minor) count",
        fields[7],
        "non-matching (minor) size",
        fields[8],
    )?;
    let nm_major = parse_counts(
        line,
        "non-matching (major) count",
        fields[9],
        "non-matching (major) size",
        fields[10],
    )?;

    Ok(Snapshot {
        version: version.to_string(),
        timestamp,
        revision,
        total,
        decompiled: matching.plus(nm_minor).plus(nm_major),
        matching,
        nm_minor,
        nm_major,
    })
}

fn parse_timestamp(
    line: usize,
    raw: &str,
) -> Result<chrono::DateTime<chrono::Utc>, ProgressError> {
    let secs: i64 = raw.parse().map_err(|_| ProgressError::InvalidField {
        line,
        field: "timestamp",
        value: raw.to_string(),
    })?;

    DateTime::from_timestamp(secs, 0).ok_or_else(|| ProgressError::InvalidField {
        line,
        field: "timestamp",
        value: raw.to_string(),
    })
}

fn parse_counts(
    line: usize,
    count_field: &'static str,
    count_raw: &str,
    size_field: &'static str,
    size_raw: &str,
) -> Result<Counts, ProgressError> {
    Ok(Counts {
        count: parse_u64(line, count_field, count_raw)?,
        size: parse_u64(line, size_field, size_raw)?,
    })
}

fn parse_u64(line: usize, field: &'static str, raw: &str) -> Result<u64, ProgressError> {
    raw.parse().map_err(|_| ProgressError::InvalidField {
        line,
        field,
        value: raw.to_string(),
    })
}
