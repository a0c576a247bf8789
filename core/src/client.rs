//! Synchronous HTTP client over a libcurl easy handle.
//!
//! # Design
//! `HttpClient` owns exactly one easy session handle for its whole
//! lifetime; moving the client moves the handle with it. Every request
//! resets the handle and re-applies the stored [`Options`] before setting
//! method-specific state, so a reused client never leaks method, body,
//! header list or accumulator state from a prior call. Requests are
//! blocking and take `&mut self`, which rules out two in-flight requests
//! on one client at compile time.

use std::time::Duration;

use curl::easy::{Easy2, List};

use crate::capture::Collector;
use crate::error::HttpError;
use crate::options::Options;
use crate::response::Response;

/// Blocking HTTP client bound to one transport session.
pub struct HttpClient {
    handle: Easy2<Collector>,
    options: Options,
}

impl HttpClient {
    /// Create a client with default [`Options`].
    pub fn new() -> Result<Self, HttpError> {
        Self::with_options(Options::default())
    }

    /// Create a client with the given options applied to a fresh session.
    pub fn with_options(options: Options) -> Result<Self, HttpError> {
        // Process-wide engine init; guarded internally, so concurrent
        // first calls are fine.
        curl::init();
        let mut client = Self {
            handle: Easy2::new(Collector::default()),
            options,
        };
        client.apply_options().map_err(init_error)?;
        Ok(client)
    }

    /// Replace the stored options and re-apply them to the session.
    ///
    /// Takes effect from the next request; there can be no request in
    /// flight while this runs.
    pub fn set_options(&mut self, options: Options) -> Result<(), HttpError> {
        self.options = options;
        self.apply_options().map_err(init_error)
    }

    /// Perform a blocking GET.
    pub fn get(
        &mut self,
        url: &str,
        headers: &[(String, String)],
    ) -> Result<Response, HttpError> {
        self.apply_options().map_err(transport_error)?;
        self.handle.get(true).map_err(transport_error)?;
        self.handle.url(url).map_err(transport_error)?;
        self.attach_headers(headers).map_err(transport_error)?;
        self.perform()
    }

    /// Perform a blocking POST with `body` as the request body.
    ///
    /// The body is sent with its exact byte length; embedded zero bytes
    /// are fine, and an empty body is a valid POST.
    pub fn post(
        &mut self,
        url: &str,
        body: &[u8],
        headers: &[(String, String)],
    ) -> Result<Response, HttpError> {
        self.apply_options().map_err(transport_error)?;
        self.handle.post(true).map_err(transport_error)?;
        self.handle.url(url).map_err(transport_error)?;
        self.handle.post_fields_copy(body).map_err(transport_error)?;
        self.attach_headers(headers).map_err(transport_error)?;
        self.perform()
    }

    /// Reset the handle and apply the stored options.
    ///
    /// Wipes all per-request state (method, body, URL, header list) left
    /// by a previous call; the `Collector` handler survives the reset.
    fn apply_options(&mut self) -> Result<(), curl::Error> {
        self.handle.reset();
        self.handle
            .timeout(Duration::from_millis(self.options.timeout_ms))?;
        self.handle.follow_location(self.options.follow_redirects)?;
        if let Some(agent) = &self.options.user_agent {
            if !agent.is_empty() {
                self.handle.useragent(agent)?;
            }
        }
        self.handle.ssl_verify_peer(self.options.verify_peer)?;
        self.handle.ssl_verify_host(self.options.verify_host)?;
        Ok(())
    }

    /// Attach extra request headers as literal `Name: Value` lines, in
    /// the order supplied. No validation; the transport layer may reject
    /// malformed lines. An empty slice attaches nothing.
    fn attach_headers(&mut self, headers: &[(String, String)]) -> Result<(), curl::Error> {
        if headers.is_empty() {
            return Ok(());
        }
        let mut list = List::new();
        for (name, value) in headers {
            list.append(&format!("{name}: {value}"))?;
        }
        self.handle.http_headers(list)
    }

    /// Run the blocking transfer and package the accumulated state.
    fn perform(&mut self) -> Result<Response, HttpError> {
        self.handle.get_mut().clear();
        if let Err(e) = self.handle.perform() {
            // Discard whatever arrived before the failure; callers never
            // see a partial response.
            self.handle.get_mut().clear();
            return Err(transport_error(e));
        }
        let status = self.handle.response_code().map_err(transport_error)?;
        Ok(self.handle.get_mut().take_response(status))
    }
}

fn init_error(e: curl::Error) -> HttpError {
    HttpError::Init(e.to_string())
}

fn transport_error(e: curl::Error) -> HttpError {
    HttpError::Transport(e.to_string())
}
