//! HTTP client types for Asana API communication.
//!
//! This module provides the transport layer underneath resource objects:
//!
//! - [`Transport`]: the async seam resource objects and collections call
//! - [`AsanaClient`]: the default [`Transport`], bundling configuration and
//!   an [`HttpClient`]
//! - [`HttpClient`]: the reqwest-backed client with retry handling
//! - [`HttpRequest`] and [`HttpResponse`]: a request and its parsed response
//! - [`HttpError`]: transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use asana_api::{AccessToken, AsanaConfig};
//! use asana_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = AsanaConfig::builder()
//!     .access_token(AccessToken::new("1/1234:abcd").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "users/me").build().unwrap();
//! let response = client.request(request).await?;
//! println!("{}", response.body["data"]["name"]);
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: retried after the `Retry-After` delay, or 1 second
//! - **5xx (Server Error)**: retried after 1 second
//! - **Other errors (4xx)**: returned immediately
//!
//! The default `max_tries` is 1, meaning no retries. Set it with
//! [`AsanaConfigBuilder::max_tries`](crate::config::AsanaConfigBuilder::max_tries).

mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use client::AsanaClient;
pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, InvalidResponseBodyError,
    MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{AsanaChange, HttpResponse};
pub use transport::Transport;
