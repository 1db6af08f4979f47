//! The network boundary.
//!
//! The client resolves a call into an `HttpRequest` and hands it to a
//! `Transport`; anything that can execute a request plugs in here. Retries,
//! connection reuse and deadline enforcement belong to the transport.

use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

#[cfg(feature = "ureq")]
mod ureq_transport;
#[cfg(feature = "ureq")]
pub use ureq_transport::UreqTransport;

/// Executes resolved requests.
///
/// Implementations resolve `Ok` only for 2xx responses (see
/// [`check_status`](crate::http::check_status)) and must honour the request's
/// `with_credentials`, `cross_domain` and `timeout` fields.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).send(request)
    }
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).send(request)
    }
}
