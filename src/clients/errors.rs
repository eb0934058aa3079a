//! HTTP-specific error types for the Asana API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, request validation failures, and unreadable
//! response bodies.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use asana_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("Retries exhausted after {} tries", e.tries),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::InvalidBody(e)) => println!("Unreadable body: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message field contains JSON built from the Asana error body:
/// - `errors`: The `message` of every entry in the response's `errors` array
/// - `error_reference`: Debugging reference including X-Request-Id
///
/// # Example
///
/// ```rust
/// use asana_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":["section: Unknown object: 12"]}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("Unknown object"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// This error is raised when a request continues to fail with 429 or 5xx
/// responses after all configured attempts have been made.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Serialized error message from the last response.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty after normalization.
    #[error("Invalid API path: '{path}'")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },
}

/// Error returned when a successful response carries a body that is not JSON.
#[derive(Debug, Error)]
#[error("Response with status {code} has a body that is not valid JSON: {reason}")]
pub struct InvalidResponseBodyError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The parser's description of the problem.
    pub reason: String,
}

/// Unified error type for all HTTP-related errors.
///
/// This is the error type of the [`Transport`](crate::clients::Transport)
/// seam: every failure to complete a request surfaces as one of these
/// variants.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The response body could not be parsed.
    #[error(transparent)]
    InvalidBody(#[from] InvalidResponseBodyError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidBody(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"errors":["Not Found"]}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"{"errors":["Not Found"]}"#);
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: r#"{"errors":["Rate limited"]}"#.to_string(),
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.contains('3'));
        assert!(message.contains("Exceeded maximum retry count"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBody {
                method: "post".to_string(),
            }
            .to_string(),
            "Cannot use post without specifying data."
        );
        assert_eq!(
            InvalidHttpRequestError::InvalidPath {
                path: "/".to_string()
            }
            .to_string(),
            "Invalid API path: '/'"
        );
    }

    #[test]
    fn test_status_is_reported_for_server_answers_only() {
        let response = HttpError::Response(HttpResponseError {
            code: 403,
            message: String::new(),
            error_reference: None,
        });
        assert_eq!(response.status(), Some(403));

        let body = HttpError::InvalidBody(InvalidResponseBodyError {
            code: 200,
            reason: "expected value".to_string(),
        });
        assert_eq!(body.status(), Some(200));

        let invalid = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType);
        assert_eq!(invalid.status(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            error_reference: None,
        };
        let _: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _: &dyn std::error::Error = &InvalidResponseBodyError {
            code: 200,
            reason: "eof".to_string(),
        };
    }
}
