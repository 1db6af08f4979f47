//! Host-bound HTTP client core.
//!
//! # Overview
//! `HttpClient` turns a verb, a relative path and optional query or body data
//! into a fully qualified request against one configured host, sends it
//! through a pluggable `Transport`, and decodes the JSON response into the
//! caller's type.
//!
//! # Design
//! - Configuration (`ClientConfig`) holds the host, the default headers and
//!   the credentials policy. Setting a token switches from cookies to an
//!   `Authorization` header.
//! - Every verb is split into a `build_*` step that produces an
//!   `HttpRequest` as plain data and a dispatch step that sends it, so request
//!   construction is testable without I/O.
//! - Transport failures reach the caller unchanged inside
//!   `ApiError::Transport`; nothing is retried.

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod http;
pub mod options;
pub mod transport;
pub mod url;

pub use client::HttpClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, TransportError};
pub use headers::Headers;
pub use http::{check_status, HttpMethod, HttpRequest, HttpResponse};
pub use options::RequestOptions;
pub use transport::Transport;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
