//! HTTP transport types for the client core.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The client
//! resolves every verb call into an `HttpRequest` (host prefix, query string,
//! headers, credentials and cross-origin flags all applied) before handing it
//! to a `Transport`. Keeping the resolved request as data makes the merge
//! rules testable without a network.

use std::fmt;
use std::time::Duration;

use crate::error::TransportError;
use crate::headers::Headers;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved HTTP request described as plain data.
///
/// Built by `HttpClient::build_*` methods and executed by a `Transport`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
    /// Attach ambient credentials (cookies) held by the transport.
    pub with_credentials: bool,
    /// `false` marks the request as same-origin; transports then add the
    /// `X-Requested-With` header.
    pub cross_domain: bool,
    /// Deadline enforced by the transport, if any.
    pub timeout: Option<Duration>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Turn a non-2xx response into `TransportError::Status`.
///
/// Transports call this before resolving, so a successful `send` always
/// carries a 2xx response.
pub fn check_status(
    request: &HttpRequest,
    response: HttpResponse,
) -> Result<HttpResponse, TransportError> {
    if response.is_success() {
        return Ok(response);
    }
    Err(TransportError::Status {
        method: request.method,
        url: request.url.clone(),
        status: response.status,
        body: response.body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost:3000/a".to_string(),
            headers: Headers::new(),
            body: None,
            with_credentials: true,
            cross_domain: true,
            timeout: None,
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn method_names_are_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn check_status_passes_2xx() {
        for status in [200, 201, 204, 299] {
            let resp = check_status(&request(), response(status, "ok")).unwrap();
            assert_eq!(resp.status, status);
        }
    }

    #[test]
    fn check_status_rejects_404() {
        let err = check_status(&request(), response(404, "missing")).unwrap_err();
        match err {
            TransportError::Status {
                method,
                url,
                status,
                body,
            } => {
                assert_eq!(method, HttpMethod::Get);
                assert_eq!(url, "http://localhost:3000/a");
                assert_eq!(status, 404);
                assert_eq!(body, "missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn check_status_rejects_redirects_and_server_errors() {
        assert!(check_status(&request(), response(302, "")).is_err());
        assert!(check_status(&request(), response(500, "boom")).is_err());
    }
}
