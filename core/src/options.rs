//! Per-request configuration for `HttpClient`.
//!
//! # Design
//! Plain value type with no identity beyond its fields. The client stores
//! one `Options` and re-applies it to the curl handle at the start of every
//! request, so a value passed to `set_options` takes effect on the next
//! call, never retroactively.

/// Default `User-Agent` sent when `Options::user_agent` is left at its
/// default.
pub const DEFAULT_USER_AGENT: &str = "httpc/1.0";

/// Configuration applied to the transport handle before each request.
#[derive(Debug, Clone)]
pub struct Options {
    /// Total wall-clock timeout for one request, in milliseconds.
    pub timeout_ms: u64,
    /// Follow HTTP redirect responses automatically.
    pub follow_redirects: bool,
    /// `User-Agent` header value. `None` or an empty string leaves the
    /// transport default in place.
    pub user_agent: Option<String>,
    /// Verify the peer's TLS certificate.
    pub verify_peer: bool,
    /// Verify that the certificate matches the requested host name.
    /// Independent from `verify_peer`.
    pub verify_host: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout_ms: 15_000,
            follow_redirects: true,
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            verify_peer: true,
            verify_host: true,
        }
    }
}
