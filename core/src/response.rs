//! The result of one completed request.

/// A completed HTTP response.
///
/// `status` is always the final numeric status code of the exchange; a
/// `Response` is only constructed after the transport call succeeded, so a
/// zero status is never observable. When redirects are followed, `headers`
/// holds only the headers of the last response stage (see
/// [`crate::capture`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Final HTTP status code.
    pub status: u32,
    /// Response body bytes, concatenated in arrival order.
    pub body: Vec<u8>,
    /// Header pairs in arrival order. Names are kept exactly as received
    /// and duplicates are preserved as separate entries.
    pub headers: Vec<(String, String)>,
}

impl Response {
    /// First header value whose name matches `name` case-insensitively.
    ///
    /// Lookup convenience only; the stored pairs themselves are never
    /// case-normalized.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
