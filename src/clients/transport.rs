//! The transport seam between resource objects and the network.
//!
//! Resource objects and collections only ever talk to a `dyn Transport`.
//! [`AsanaClient`](crate::clients::AsanaClient) is the HTTP implementation;
//! tests and alternative runtimes can provide their own.

use async_trait::async_trait;

use crate::clients::{HttpError, HttpResponse};
use crate::rest::{Options, Params};

/// Issues requests on behalf of resource objects.
///
/// Implementations own authentication, timeouts and retry policy. A failed
/// request (network error, non-2xx status, unreadable body) must come back
/// as an [`HttpError`]; the caller never inspects status codes itself.
///
/// `params` and `body` have already been filtered. `options` is forwarded
/// exactly as the caller supplied it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a GET request with query parameters.
    async fn get(
        &self,
        path: &str,
        params: &Params,
        options: &Options,
    ) -> Result<HttpResponse, HttpError>;

    /// Sends a POST request with a body.
    async fn post(
        &self,
        path: &str,
        body: &Params,
        options: &Options,
    ) -> Result<HttpResponse, HttpError>;

    /// Sends a PUT request with a body.
    async fn put(
        &self,
        path: &str,
        body: &Params,
        options: &Options,
    ) -> Result<HttpResponse, HttpError>;

    /// Sends a DELETE request.
    async fn delete(&self, path: &str, options: &Options) -> Result<HttpResponse, HttpError>;
}
