//! Ureq-based transport (blocking).
//!
//! ureq is synchronous, so [`Transport::send`] runs each round-trip on
//! tokio's blocking pool and must be awaited inside a tokio runtime. The
//! agent is reference-counted, so the per-request clone shares its
//! connection pool.

use std::time::Duration;

use ureq::http;

use crate::error::TransportError;
use crate::http::{check_status, HttpRequest, HttpResponse};
use crate::transport::Transport;

const COOKIE: &str = "Cookie";
const X_REQUESTED_WITH: &str = "X-Requested-With";

/// A [`Transport`] backed by a [`ureq::Agent`].
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    cookie: Option<String>,
}

impl UreqTransport {
    /// `timeout` applies to requests that do not carry their own.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            // Status codes are interpreted by `check_status`.
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            cookie: None,
        }
    }

    /// Ambient `Cookie` header, sent only on requests with
    /// `with_credentials` set.
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = http::Request::builder()
            .method(request.method.as_str())
            .uri(&request.url);

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if request.with_credentials {
            if let Some(cookie) = &self.cookie {
                builder = builder.header(COOKIE, cookie.as_str());
            }
        }
        if !request.cross_domain && !request.headers.contains_key_ignore_case(X_REQUESTED_WITH) {
            builder = builder.header(X_REQUESTED_WITH, "XMLHttpRequest");
        }

        let result = match &request.body {
            Some(body) => {
                let req = builder
                    .body(body.clone().into_bytes())
                    .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                self.run(req, request.timeout)
            }
            None => {
                let req = builder
                    .body(())
                    .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                self.run(req, request.timeout)
            }
        };

        let response = result.map_err(map_ureq_error)?;
        check_status(request, convert_response(response)?)
    }

    fn run<S: ureq::AsSendBody>(
        &self,
        req: http::Request<S>,
        timeout: Option<Duration>,
    ) -> Result<http::Response<ureq::Body>, ureq::Error> {
        let req = match timeout {
            Some(timeout) => self
                .agent
                .configure_request(req)
                .timeout_global(Some(timeout))
                .build(),
            None => req,
        };
        self.agent.run(req)
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let transport = self.clone();
        tokio::task::spawn_blocking(move || transport.execute(&request))
            .await
            .map_err(|e| TransportError::Other(Box::new(e)))?
    }
}

fn map_ureq_error(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(_) => TransportError::Timeout,
        ureq::Error::HostNotFound => TransportError::Connection("host not found".to_owned()),
        ureq::Error::ConnectionFailed => TransportError::Connection("connection failed".to_owned()),
        ureq::Error::Io(e) => TransportError::Connection(e.to_string()),
        ureq::Error::BadUri(uri) => TransportError::InvalidRequest(format!("bad uri: {uri}")),
        e => TransportError::Other(Box::new(e)),
    }
}

fn convert_response(response: http::Response<ureq::Body>) -> Result<HttpResponse, TransportError> {
    let (parts, mut body) = response.into_parts();

    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = body.read_to_string().map_err(map_ureq_error)?;

    Ok(HttpResponse {
        status: parts.status.as_u16(),
        headers,
        body,
    })
}
