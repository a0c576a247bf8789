//! Synchronous HTTP client over libcurl.
//!
//! # Overview
//! A thin convenience layer over one curl easy session: configure options,
//! issue one blocking GET or POST, collect status/body/headers into a
//! [`Response`], and surface transport failures as [`HttpError`].
//!
//! # Design
//! - [`HttpClient`] owns exactly one easy handle; `&mut self` methods keep
//!   it to a single in-flight request.
//! - [`Options`] are stored on the client and re-applied at the start of
//!   every request, so no state leaks between calls.
//! - [`capture::Collector`] is the handler the engine pushes body chunks
//!   and header lines into; a new status line discards the headers of
//!   earlier response stages, so only the final stage's headers survive
//!   redirect chains and `100 Continue` preambles.
//! - No pooling, retries, cookies or streaming — one request per call.

pub mod capture;
pub mod client;
pub mod error;
pub mod options;
pub mod response;

pub use client::HttpClient;
pub use error::HttpError;
pub use options::{Options, DEFAULT_USER_AGENT};
pub use response::Response;
