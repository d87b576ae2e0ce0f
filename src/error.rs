//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Documentation links
//! - Proper exit codes for CI/CD
//!
//! All feed errors are fatal to the invocation that raised them: a single
//! malformed row aborts the whole parse, and no retry or fallback value is
//! computed internally.

use thiserror::Error;

/// Errors raised while fetching or interpreting the progress feed
#[derive(Error, Debug)]
pub enum ProgressError {
    /// Fetching a remote resource failed or returned a non-success status
    #[error("Network error fetching {url}: {detail}")]
    Network {
        /// Resource that was being fetched
        url: String,
        /// Transport failure or HTTP status description
        detail: String,
    },

    /// A feed row did not have the expected number of fields
    #[error("Invalid row on line {line}: expected {expected} fields, found {found}")]
    InvalidRow {
        /// 1-based feed line number
        line: usize,
        /// Required field count
        expected: usize,
        /// Field count actually present
        found: usize,
    },

    /// A feed row carried an unrecognized schema version tag
    #[error("Unexpected version on line {line}: '{version}'")]
    UnexpectedVersion {
        /// 1-based feed line number
        line: usize,
        /// Version tag found on the wire
        version: String,
    },

    /// A numeric feed field could not be parsed
    #[error("Invalid {field} on line {line}: '{value}'")]
    InvalidField {
        /// 1-based feed line number
        line: usize,
        /// Name of the offending field
        field: &'static str,
        /// Raw field text
        value: String,
    },

    /// The badge document was not the expected shape
    #[error("Badge format error: {detail}")]
    BadgeFormat {
        /// What was missing or malformed
        detail: String,
    },

    /// The feed contained no snapshots
    #[error("The progress feed is empty")]
    EmptyFeed,
}

impl ProgressError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use decomp_progress::error::ProgressError;
    ///
    /// let error = ProgressError::UnexpectedVersion {
    ///     line: 3,
    ///     version: "2".to_string(),
    /// };
    ///
    /// let suggestion = error.suggestion();
    /// assert!(suggestion.is_some());
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Network { url, .. } => Some(format!(
                "Check network connectivity and that {} is reachable.\n  \
                 The feed endpoints can be changed in .decomp-progress.toml",
                url
            )),
            Self::InvalidRow { line, .. } => Some(format!(
                "Line {} of the feed is malformed. The producer emits exactly \
                 11 comma-separated fields per row; the feed may be truncated or corrupt",
                line
            )),
            Self::UnexpectedVersion { version, .. } => Some(format!(
                "Only feed schema version '1' is recognized (found '{}').\n  \
                 Update decomp-progress if the feed has moved to a newer schema",
                version
            )),
            Self::InvalidField { field, .. } => Some(format!(
                "The '{}' field must be a base-10 integer; the feed may be corrupt",
                field
            )),
            Self::BadgeFormat { .. } => Some(
                "The badge endpoint must return a JSON document with a string \
                 'message' field"
                    .to_string(),
            ),
            Self::EmptyFeed => Some(
                "The feed fetched successfully but contained no rows. \
                 Check that the configured URL points at the progress CSV"
                    .to_string(),
            ),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::Network { .. } => {
                Some("https://github.com/decomp-tools/decomp-progress#configuration")
            }
            Self::InvalidRow { .. }
            | Self::UnexpectedVersion { .. }
            | Self::InvalidField { .. } => {
                Some("https://github.com/decomp-tools/decomp-progress#feed-format")
            }
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following
    /// sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use decomp_progress::error::ProgressError;
    ///
    /// let error = ProgressError::Network {
    ///     url: "https://example.invalid/progress.csv".to_string(),
    ///     detail: "connection refused".to_string(),
    /// };
    ///
    /// assert_eq!(error.exit_code(), 69); // EX_UNAVAIL
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Network { .. } => 69,           // EX_UNAVAIL (sysexits.h)
            Self::InvalidRow { .. } => 65,        // EX_DATAERR
            Self::UnexpectedVersion { .. } => 65, // EX_DATAERR
            Self::InvalidField { .. } => 65,      // EX_DATAERR
            Self::BadgeFormat { .. } => 76,       // EX_PROTOCOL
            Self::EmptyFeed => 66,                // EX_NOINPUT
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        // Try to downcast to ProgressError for suggestions
        if let Some(progress_error) = error.downcast_ref::<ProgressError>() {
            if let Some(suggestion) = progress_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = progress_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(progress_error) = error.downcast_ref::<ProgressError>() {
            progress_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_suggestion_names_url() {
        let err = ProgressError::Network {
            url: "https://botw.link/progress.csv".to_string(),
            detail: "connection timed out".to_string(),
        };

        let suggestion = err.suggestion().expect("Network should have suggestion");
        assert!(suggestion.contains("https://botw.link/progress.csv"));
        assert!(suggestion.contains(".decomp-progress.toml"));
    }

    #[test]
    fn test_invalid_row_message_includes_field_counts() {
        let err = ProgressError::InvalidRow {
            line: 4,
            expected: 11,
            found: 9,
        };

        let message = err.to_string();
        assert!(message.contains("line 4"));
        assert!(message.contains("11"));
        assert!(message.contains("9"));
    }

    #[test]
    fn test_unexpected_version_suggestion_mentions_upgrade() {
        let err = ProgressError::UnexpectedVersion {
            line: 1,
            version: "2".to_string(),
        };

        let suggestion = err
            .suggestion()
            .expect("UnexpectedVersion should have suggestion");
        assert!(suggestion.contains("'1'"));
        assert!(suggestion.contains("'2'"));
    }

    #[test]
    fn test_exit_codes_follow_sysexits_conventions() {
        let network = ProgressError::Network {
            url: "x".to_string(),
            detail: "x".to_string(),
        };
        assert_eq!(network.exit_code(), 69); // Service unavailable

        let schema = ProgressError::InvalidRow {
            line: 1,
            expected: 11,
            found: 2,
        };
        assert_eq!(schema.exit_code(), 65); // Data error

        let badge = ProgressError::BadgeFormat {
            detail: "missing 'message'".to_string(),
        };
        assert_eq!(badge.exit_code(), 76); // Protocol error
    }

    #[test]
    fn test_all_error_variants_have_exit_codes() {
        let errors = vec![
            ProgressError::Network {
                url: "test".to_string(),
                detail: "test".to_string(),
            },
            ProgressError::InvalidRow {
                line: 1,
                expected: 11,
                found: 3,
            },
            ProgressError::UnexpectedVersion {
                line: 1,
                version: "9".to_string(),
            },
            ProgressError::InvalidField {
                line: 1,
                field: "timestamp",
                value: "abc".to_string(),
            },
            ProgressError::BadgeFormat {
                detail: "test".to_string(),
            },
            ProgressError::EmptyFeed,
        ];

        for err in errors {
            let exit_code = err.exit_code();
            assert!(
                exit_code > 0,
                "Error {:?} should have non-zero exit code",
                err
            );
            assert!(exit_code < 256, "Exit code should fit in a byte");
        }
    }

    #[test]
    fn test_all_error_variants_have_suggestions() {
        let errors = vec![
            ProgressError::Network {
                url: "test".to_string(),
                detail: "test".to_string(),
            },
            ProgressError::InvalidRow {
                line: 1,
                expected: 11,
                found: 3,
            },
            ProgressError::UnexpectedVersion {
                line: 1,
                version: "9".to_string(),
            },
            ProgressError::InvalidField {
                line: 1,
                field: "total size",
                value: "abc".to_string(),
            },
            ProgressError::BadgeFormat {
                detail: "test".to_string(),
            },
            ProgressError::EmptyFeed,
        ];

        for err in &errors {
            let suggestion = err.suggestion();
            assert!(
                suggestion.is_some(),
                "Error {:?} should have a suggestion",
                err
            );
            assert!(
                !suggestion.unwrap().is_empty(),
                "Suggestion should not be empty"
            );
        }
    }

    #[test]
    fn test_formatter_includes_help_for_progress_errors() {
        let err: anyhow::Error = ProgressError::EmptyFeed.into();
        let formatted = ErrorFormatter::format(&err);
        assert!(formatted.contains("error:"));
        assert!(formatted.contains("help:"));
    }

    #[test]
    fn test_formatter_exit_code_for_generic_error() {
        let err = anyhow::anyhow!("something unrelated");
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
    }
}
