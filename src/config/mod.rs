//! Configuration types for the Asana API SDK.
//!
//! # Overview
//!
//! - [`AsanaConfig`]: The main configuration struct holding all SDK settings
//! - [`AsanaConfigBuilder`]: A builder for constructing [`AsanaConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use asana_api::{AsanaConfig, AccessToken};
//!
//! let config = AsanaConfig::builder()
//!     .access_token(AccessToken::new("1/1234:abcd").unwrap())
//!     .max_tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://app.asana.com/api/1.0");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl};

use crate::error::ConfigError;

/// Configuration for the Asana API SDK.
///
/// # Thread Safety
///
/// `AsanaConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Feature Flags
///
/// Asana rolls out breaking API changes behind opt-in/opt-out flags sent in
/// the `Asana-Enable` and `Asana-Disable` headers. The lists configured here
/// are attached to every request.
#[derive(Clone, Debug)]
pub struct AsanaConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    max_tries: u32,
    asana_enable: Vec<String>,
    asana_disable: Vec<String>,
}

impl AsanaConfig {
    /// Creates a new builder for constructing an `AsanaConfig`.
    #[must_use]
    pub fn builder() -> AsanaConfigBuilder {
        AsanaConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a request is attempted on 429/5xx responses.
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Returns the feature flags sent in the `Asana-Enable` header.
    #[must_use]
    pub fn asana_enable(&self) -> &[String] {
        &self.asana_enable
    }

    /// Returns the feature flags sent in the `Asana-Disable` header.
    #[must_use]
    pub fn asana_disable(&self) -> &[String] {
        &self.asana_disable
    }
}

// Verify AsanaConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AsanaConfig>();
};

/// Builder for constructing [`AsanaConfig`] instances.
///
/// `access_token` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: `https://app.asana.com/api/1.0`
/// - `max_tries`: `1` (no retries)
/// - `user_agent_prefix`: `None`
/// - `asana_enable` / `asana_disable`: empty
#[derive(Debug, Default)]
pub struct AsanaConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    max_tries: Option<u32>,
    asana_enable: Vec<String>,
    asana_disable: Vec<String>,
}

impl AsanaConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many attempts are made for rate limited or failing requests.
    #[must_use]
    pub const fn max_tries(mut self, tries: u32) -> Self {
        self.max_tries = Some(tries);
        self
    }

    /// Opts in to an Asana API change.
    #[must_use]
    pub fn enable(mut self, flag: impl Into<String>) -> Self {
        self.asana_enable.push(flag.into());
        self
    }

    /// Opts out of an Asana API change.
    #[must_use]
    pub fn disable(mut self, flag: impl Into<String>) -> Self {
        self.asana_disable.push(flag.into());
        self
    }

    /// Builds the [`AsanaConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    /// Returns [`ConfigError::InvalidMaxTries`] if `max_tries` is zero.
    pub fn build(self) -> Result<AsanaConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        let max_tries = self.max_tries.unwrap_or(1);
        if max_tries == 0 {
            return Err(ConfigError::InvalidMaxTries { tries: max_tries });
        }

        Ok(AsanaConfig {
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            max_tries,
            asana_enable: self.asana_enable,
            asana_disable: self.asana_disable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("test-token").unwrap()
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = AsanaConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = AsanaConfig::builder().access_token(token()).build().unwrap();

        assert_eq!(config.base_url(), &BaseUrl::default());
        assert_eq!(config.max_tries(), 1);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.asana_enable().is_empty());
        assert!(config.asana_disable().is_empty());
    }

    #[test]
    fn test_builder_rejects_zero_tries() {
        let result = AsanaConfig::builder()
            .access_token(token())
            .max_tries(0)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidMaxTries { tries: 0 })
        ));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let url = BaseUrl::new("http://localhost:3000/api/1.0").unwrap();

        let config = AsanaConfig::builder()
            .access_token(token())
            .base_url(url.clone())
            .user_agent_prefix("MyApp/1.0")
            .max_tries(4)
            .enable("new_user_task_lists")
            .disable("new_goal_memberships")
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &url);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.max_tries(), 4);
        assert_eq!(config.asana_enable(), ["new_user_task_lists".to_string()]);
        assert_eq!(config.asana_disable(), ["new_goal_memberships".to_string()]);
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = AsanaConfig::builder()
            .access_token(AccessToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("AsanaConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
