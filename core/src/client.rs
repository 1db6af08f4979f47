//! The API client: one host, one header set, one credentials policy.
//!
//! # Design
//! `HttpClient` owns a `ClientConfig` and a `Transport`. Each verb resolves
//! its arguments into an `HttpRequest` through a `build_*` method, sends it,
//! and decodes the 2xx body as JSON into the caller's type. The builders are
//! public so the resolved request can be inspected without a network.
//!
//! Configuration setters take `&mut self` and verbs take `&self`; a client
//! shared across tasks needs external synchronization if it is reconfigured
//! while requests are in flight. Each request snapshots the configuration
//! when it is built.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, debug_span, trace, warn, Instrument};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::headers::Headers;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::options::RequestOptions;
use crate::transport::Transport;
use crate::url::{build_query, prefix_api_host};

const AUTHORIZATION: &str = "Authorization";
const CONTENT_TYPE: &str = "Content-Type";

#[derive(Debug, Clone)]
pub struct HttpClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> HttpClient<T> {
    /// Empty host, credentials enabled, `headers` as the defaults.
    pub fn new(transport: T, headers: Headers) -> Self {
        Self::from_config(transport, ClientConfig::new(headers))
    }

    pub fn from_config(transport: T, config: ClientConfig) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// Accepted verbatim; no validation.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.config.host = host.into();
        trace!(host = %self.config.host, "host updated");
    }

    pub fn headers(&self) -> &Headers {
        &self.config.headers
    }

    /// Merges into the current defaults; see [`Headers::merge`].
    pub fn set_headers(&mut self, headers: Headers) {
        self.config.headers.merge(headers);
        trace!(count = self.config.headers.len(), "default headers updated");
    }

    pub fn with_credentials(&self) -> bool {
        self.config.with_credentials
    }

    /// Switch to token auth: turn off ambient credentials, then send `token`
    /// verbatim as the `Authorization` header on every later request.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.with_credentials = false;
        self.config.headers.insert(AUTHORIZATION, token);
        trace!("authorization token set, ambient credentials disabled");
    }

    pub fn build_get(
        &self,
        url: &str,
        query: impl Serialize,
        options: RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let url = with_query(url, query)?;
        self.resolve(HttpMethod::Get, url, None, options)
    }

    pub fn build_put(
        &self,
        url: &str,
        body: impl Serialize,
        options: RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let body = body_value(body)?;
        self.resolve(HttpMethod::Put, url.to_string(), Some(body), options)
    }

    pub fn build_post(
        &self,
        url: &str,
        body: impl Serialize,
        options: RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let body = body_value(body)?;
        self.resolve(HttpMethod::Post, url.to_string(), Some(body), options)
    }

    pub fn build_delete(
        &self,
        url: &str,
        query: impl Serialize,
        options: RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let url = with_query(url, query)?;
        self.resolve(HttpMethod::Delete, url, None, options)
    }

    /// GET `url` with `query` appended. Pass `()` for no query.
    pub async fn get<R: DeserializeOwned>(
        &self,
        url: &str,
        query: impl Serialize,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let request = self.build_get(url, query, options)?;
        self.dispatch(request).await
    }

    /// PUT `body` as JSON. `()` sends `{}`.
    pub async fn put<R: DeserializeOwned>(
        &self,
        url: &str,
        body: impl Serialize,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let request = self.build_put(url, body, options)?;
        self.dispatch(request).await
    }

    /// POST `body` as JSON. `()` sends `{}`.
    pub async fn post<R: DeserializeOwned>(
        &self,
        url: &str,
        body: impl Serialize,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let request = self.build_post(url, body, options)?;
        self.dispatch(request).await
    }

    /// DELETE `url` with `query` appended. Pass `()` for no query.
    pub async fn delete<R: DeserializeOwned>(
        &self,
        url: &str,
        query: impl Serialize,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let request = self.build_delete(url, query, options)?;
        self.dispatch(request).await
    }

    /// Layer the verb's computed fields and `options` over the client
    /// defaults. The url is host-prefixed last, whichever side supplied it.
    fn resolve(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let RequestOptions {
            method: method_override,
            url: url_override,
            body: body_override,
            headers,
            with_credentials,
            cross_domain,
            timeout,
        } = options;

        let mut headers = headers.unwrap_or_else(|| self.config.headers.clone());
        let body = match body_override.or(body) {
            Some(body) => {
                if !headers.contains_key_ignore_case(CONTENT_TYPE) {
                    headers.insert(CONTENT_TYPE, "application/json");
                }
                Some(serde_json::to_string(&body).map_err(ApiError::SerializationError)?)
            }
            None => None,
        };
        let url = url_override.unwrap_or(url);

        Ok(HttpRequest {
            method: method_override.unwrap_or(method),
            url: prefix_api_host(&self.config.host, &url),
            headers,
            body,
            with_credentials: with_credentials.unwrap_or(self.config.with_credentials),
            cross_domain: cross_domain.unwrap_or(true),
            timeout,
        })
    }

    async fn dispatch<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let span = debug_span!("dispatch", method = %request.method, url = %request.url);
        async move {
            debug!(has_body = request.body.is_some(), "sending request");
            let response = match self.transport.send(request).await {
                Ok(response) => response,
                Err(err) => {
                    warn!(error = %err, "request failed");
                    return Err(err.into());
                }
            };
            debug!(status = response.status, bytes = response.body.len(), "response received");
            decode(response)
        }
        .instrument(span)
        .await
    }
}

#[cfg(feature = "ureq")]
impl HttpClient<crate::transport::UreqTransport> {
    /// A ureq-backed client with the JSON `Accept`/`Content-Type` preset.
    pub fn json() -> Self {
        Self::from_config(crate::transport::UreqTransport::default(), ClientConfig::json())
    }
}

fn with_query(url: &str, query: impl Serialize) -> Result<String, ApiError> {
    let query = serde_json::to_value(query).map_err(ApiError::SerializationError)?;
    Ok(build_query(url, &query))
}

/// A body that serializes to `null` is sent as `{}`.
fn body_value(body: impl Serialize) -> Result<Value, ApiError> {
    match serde_json::to_value(body).map_err(ApiError::SerializationError)? {
        Value::Null => Ok(Value::Object(Map::new())),
        value => Ok(value),
    }
}

/// An empty body decodes as JSON `null`.
fn decode<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    let status = response.status;
    let result = if response.body.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(&response.body)
    };
    result.map_err(|source| ApiError::DeserializationError { status, source })
}
