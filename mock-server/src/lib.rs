//! Echo server used as the network peer in client integration tests.
//!
//! Every request is answered with a JSON description of itself, except
//! `/status/{code}`, which answers with the requested status code,
//! `/delay/{ms}`, which echoes after sleeping, and `/empty`, which answers
//! `204 No Content`.

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::Path,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

/// What the server saw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EchoedRequest {
    pub method: String,
    pub path: String,
    /// Raw query string, without the leading `?`.
    pub query: Option<String>,
    /// Header names are lowercase, in arrival order.
    pub headers: Vec<(String, String)>,
    /// Parsed JSON body; `None` when the request had no body.
    pub body: Option<serde_json::Value>,
}

impl EchoedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/status/{code}", any(status))
        .route("/delay/{ms}", any(delay))
        .route("/empty", any(empty))
        .fallback(echo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<EchoedRequest>, (StatusCode, String)> {
    let body = if body.is_empty() {
        None
    } else {
        let value = serde_json::from_slice(&body)
            .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
        Some(value)
    };
    let echoed = EchoedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: headers
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect(),
        body,
    };
    debug!(method = %echoed.method, path = %echoed.path, "echo");
    Ok(Json(echoed))
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<serde_json::Value>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(serde_json::json!({ "status": code }))))
}

async fn delay(
    Path(ms): Path<u64>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<EchoedRequest>, (StatusCode, String)> {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    echo(method, uri, headers, body).await
}

async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echoed() -> EchoedRequest {
        EchoedRequest {
            method: "GET".to_string(),
            path: "/a".to_string(),
            query: None,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = echoed();
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn echoed_request_roundtrips_through_json() {
        let req = echoed();
        let json = serde_json::to_string(&req).unwrap();
        let back: EchoedRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }
}
