//! Error types for the HTTP client.
//!
//! # Design
//! Two kinds only. `Init` means the transport engine's process-wide or
//! per-session setup failed; the affected client cannot be retried and
//! must be discarded. `Transport` covers every failure while a request
//! was executing (resolution, connect, TLS, timeout, callback abort) and
//! carries the engine's own description. A failed request never yields a
//! partial `Response` — the accumulated body/headers are discarded.

use std::fmt;

/// Errors returned by [`crate::HttpClient`].
#[derive(Debug)]
pub enum HttpError {
    /// Transport engine setup failed. Fatal to the client.
    Init(String),

    /// A request failed during execution. The message comes from the
    /// transport engine.
    Transport(String),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Init(msg) => write!(f, "transport init failed: {msg}"),
            HttpError::Transport(msg) => write!(f, "request failed: {msg}"),
        }
    }
}

impl std::error::Error for HttpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distinguishes_kinds() {
        let init = HttpError::Init("no session".to_string());
        let transport = HttpError::Transport("timed out".to_string());
        assert_eq!(init.to_string(), "transport init failed: no session");
        assert_eq!(transport.to_string(), "request failed: timed out");
    }
}
