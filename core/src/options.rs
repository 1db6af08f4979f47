//! Per-call request options.
//!
//! # Design
//! Every field is optional and, when set, overrides what the client computed
//! for the call. The precedence, lowest first, is:
//!
//! 1. client defaults: `headers`, `with_credentials`
//! 2. `cross_domain = true`
//! 3. the verb's own `method`, `url` (with query) and `body`
//! 4. these options
//! 5. the winning `url`, re-prefixed with the client host
//!
//! `headers` replaces the default header set as a whole; it is not merged
//! key by key.

use std::time::Duration;

use serde_json::Value;

use crate::headers::Headers;
use crate::http::HttpMethod;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Option<HttpMethod>,
    /// Relative or absolute. Still goes through host prefixing, but skips
    /// query building.
    pub url: Option<String>,
    pub body: Option<Value>,
    pub headers: Option<Headers>,
    pub with_credentials: Option<bool>,
    pub cross_domain: Option<bool>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_credentials(mut self, with_credentials: bool) -> Self {
        self.with_credentials = Some(with_credentials);
        self
    }

    pub fn cross_domain(mut self, cross_domain: bool) -> Self {
        self.cross_domain = Some(cross_domain);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
