//! Transport abstraction for fetching remote resources.
//!
//! The feed client only ever needs "URL in, body text out", so the HTTP
//! layer sits behind a small trait. This allows dependency injection of
//! canned responses in tests without binding a socket, and keeps the
//! `ureq` surface confined to one type.

use std::time::Duration;

use crate::error::ProgressError;

/// Trait for fetching a remote resource as text.
pub trait Transport {
    /// Fetch `url` and return the response body as a string.
    ///
    /// Implementations must map transport failures and non-success HTTP
    /// statuses to [`ProgressError::Network`]; retries are never performed.
    fn fetch_text(&self, url: &str) -> Result<String, ProgressError>;
}

/// Real HTTP transport backed by a blocking `ureq` agent.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    const READ_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a transport with default connect/read timeouts.
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Self::CONNECT_TIMEOUT)
            .timeout_read(Self::READ_TIMEOUT)
            .build();
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn fetch_text(&self, url: &str) -> Result<String, ProgressError> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                return Err(ProgressError::Network {
                    url: url.to_string(),
                    detail: format!("server returned HTTP {}", code),
                });
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(ProgressError::Network {
                    url: url.to_string(),
                    detail: err.to_string(),
                });
            }
        };

        response.into_string().map_err(|err| ProgressError::Network {
            url: url.to_string(),
            detail: format!("failed reading response body: {}", err),
        })
    }
}
