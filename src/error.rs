//! Error types for the Asana API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and argument validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Resource action methods also report omitted
//! mandatory arguments through [`ConfigError::MissingRequiredArgument`],
//! before any request is sent.
//!
//! # Example
//!
//! ```rust
//! use asana_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration or argument validation.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Asana personal access token or OAuth token.")]
    EmptyAccessToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://app.asana.com/api/1.0').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Retry count must allow at least one attempt.
    #[error("Invalid max_tries {tries}. At least one attempt is required.")]
    InvalidMaxTries {
        /// The value that was provided.
        tries: u32,
    },

    /// A required configuration field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required argument was not supplied to a resource action.
    #[error("Missing required argument: '{argument}'. This argument must be supplied before the request can be sent.")]
    MissingRequiredArgument {
        /// The name of the missing argument.
        argument: &'static str,
    },
}
