//! Response capture sink: accumulates body bytes and header lines pushed
//! by the transport engine while a request is in flight.
//!
//! # Design
//! `Collector` is the `curl::easy::Handler` installed on the client's easy
//! handle. libcurl invokes `write` with arbitrary body chunks and `header`
//! with exactly one raw header line per call (terminator included). The
//! accumulators are cleared before each request and moved out into a
//! [`Response`] once the transfer completes.
//!
//! A line starting with `HTTP/` begins a new status stage (a redirect hop,
//! or an informational response such as `100 Continue` preceding the final
//! one). All headers accumulated for earlier stages are discarded then, so
//! a finished request exposes only the last stage's headers.

use curl::easy::{Handler, WriteError};

use crate::response::Response;

/// Accumulates one in-flight request's body and headers.
#[derive(Debug, Default)]
pub struct Collector {
    body: Vec<u8>,
    headers: Vec<(String, String)>,
}

impl Collector {
    /// Reset both accumulators ahead of a new request.
    pub fn clear(&mut self) {
        self.body.clear();
        self.headers.clear();
    }

    /// Move the accumulated state out into a `Response`, leaving the
    /// accumulators empty.
    pub fn take_response(&mut self, status: u32) -> Response {
        Response {
            status,
            body: std::mem::take(&mut self.body),
            headers: std::mem::take(&mut self.headers),
        }
    }

    /// Append one body chunk, returning the number of bytes consumed.
    fn body_chunk(&mut self, data: &[u8]) -> usize {
        self.body.extend_from_slice(data);
        data.len()
    }

    /// Classify and record one raw header line.
    fn header_line(&mut self, raw: &[u8]) {
        if raw.starts_with(b"HTTP/") {
            // New status stage: drop everything from earlier stages.
            self.headers.clear();
            return;
        }
        let line = String::from_utf8_lossy(raw);
        let line = match line.find("\r\n") {
            Some(end) => &line[..end],
            None => line.as_ref(),
        };
        if line.is_empty() {
            // Blank line terminating one header block.
            return;
        }
        let pair = match line.find(':') {
            Some(colon) => {
                let value = line[colon + 1..].trim_start_matches([' ', '\t']);
                (line[..colon].to_string(), value.to_string())
            }
            None => (line.to_string(), String::new()),
        };
        self.headers.push(pair);
    }
}

impl Handler for Collector {
    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        Ok(self.body_chunk(data))
    }

    fn header(&mut self, data: &[u8]) -> bool {
        self.header_line(data);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(lines: &[&str]) -> Collector {
        let mut c = Collector::default();
        for line in lines {
            c.header_line(line.as_bytes());
        }
        c
    }

    #[test]
    fn field_line_splits_at_first_colon() {
        let c = feed(&["HTTP/1.1 200 OK\r\n", "X-Test: ok\r\n", "\r\n"]);
        assert_eq!(
            c.headers,
            vec![("X-Test".to_string(), "ok".to_string())]
        );
    }

    #[test]
    fn leading_value_whitespace_is_trimmed_name_untouched() {
        let c = feed(&["X-Foo:   bar\r\n"]);
        assert_eq!(c.headers, vec![("X-Foo".to_string(), "bar".to_string())]);
    }

    #[test]
    fn tabs_after_colon_are_trimmed() {
        let c = feed(&["X-Foo:\t\tbar\r\n"]);
        assert_eq!(c.headers, vec![("X-Foo".to_string(), "bar".to_string())]);
    }

    #[test]
    fn trailing_value_whitespace_is_preserved() {
        let c = feed(&["X-Foo: bar  \r\n"]);
        assert_eq!(c.headers, vec![("X-Foo".to_string(), "bar  ".to_string())]);
    }

    #[test]
    fn new_status_stage_discards_earlier_headers() {
        // An informational stage followed by the final response: only the
        // final stage's headers survive.
        let c = feed(&[
            "HTTP/1.1 100 Continue\r\n",
            "\r\n",
            "HTTP/1.1 200 OK\r\n",
            "X-Test: ok\r\n",
            "\r\n",
        ]);
        assert_eq!(c.headers, vec![("X-Test".to_string(), "ok".to_string())]);
    }

    #[test]
    fn redirect_chain_keeps_only_last_stage() {
        let c = feed(&[
            "HTTP/1.1 302 Found\r\n",
            "Location: /elsewhere\r\n",
            "\r\n",
            "HTTP/1.1 200 OK\r\n",
            "Content-Type: text/plain\r\n",
            "\r\n",
        ]);
        assert_eq!(
            c.headers,
            vec![("Content-Type".to_string(), "text/plain".to_string())]
        );
    }

    #[test]
    fn duplicate_names_are_preserved_in_order() {
        let c = feed(&["Set-Cookie: a=1\r\n", "Set-Cookie: b=2\r\n"]);
        assert_eq!(
            c.headers,
            vec![
                ("Set-Cookie".to_string(), "a=1".to_string()),
                ("Set-Cookie".to_string(), "b=2".to_string()),
            ]
        );
    }

    #[test]
    fn colonless_line_becomes_name_with_empty_value() {
        let c = feed(&["weird line\r\n"]);
        assert_eq!(
            c.headers,
            vec![("weird line".to_string(), String::new())]
        );
    }

    #[test]
    fn blank_and_empty_lines_are_ignored() {
        let c = feed(&["\r\n", ""]);
        assert!(c.headers.is_empty());
    }

    #[test]
    fn body_chunks_concatenate_in_order() {
        let mut c = Collector::default();
        assert_eq!(c.body_chunk(b"ab\0"), 3);
        assert_eq!(c.body_chunk(b""), 0);
        assert_eq!(c.body_chunk(b"cd"), 2);
        assert_eq!(c.body, b"ab\0cd");
    }

    #[test]
    fn take_response_leaves_accumulators_empty() {
        let mut c = Collector::default();
        c.body_chunk(b"payload");
        c.header_line(b"X-A: 1\r\n");
        let resp = c.take_response(200);
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, b"payload");
        assert_eq!(resp.headers, vec![("X-A".to_string(), "1".to_string())]);
        assert!(c.body.is_empty());
        assert!(c.headers.is_empty());
    }

    #[test]
    fn clear_resets_both_accumulators() {
        let mut c = Collector::default();
        c.body_chunk(b"stale");
        c.header_line(b"X-Stale: yes\r\n");
        c.clear();
        assert!(c.body.is_empty());
        assert!(c.headers.is_empty());
    }
}
