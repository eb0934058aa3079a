//! HTTP client for Asana API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Asana API with automatic retry handling.

use std::collections::HashMap;

use crate::clients::errors::{
    HttpError, HttpResponseError, InvalidResponseBodyError, MaxHttpRetriesExceededError,
};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::AsanaConfig;

/// Fixed retry wait time in seconds when no `Retry-After` header is given.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Asana API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent, bearer token and feature flags
/// - Automatic retry logic for 429 and 5xx responses
/// - Asana-specific header parsing
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://app.asana.com/api/1.0`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Default number of attempts per request.
    max_tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use asana_api::{AsanaConfig, AccessToken};
    /// use asana_api::clients::HttpClient;
    ///
    /// let config = AsanaConfig::builder()
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config).unwrap();
    /// assert_eq!(client.base_url(), "https://app.asana.com/api/1.0");
    /// ```
    pub fn new(config: &AsanaConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Asana API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        if !config.asana_enable().is_empty() {
            default_headers.insert("Asana-Enable".to_string(), config.asana_enable().join(","));
        }
        if !config.asana_disable().is_empty() {
            default_headers.insert(
                "Asana-Disable".to_string(),
                config.asana_disable().join(","),
            );
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            max_tries: config.max_tries(),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the configured number of attempts per request.
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Sends an HTTP request to the Asana API.
    ///
    /// The request is attempted up to `request.tries` times; 429 and 5xx
    /// responses are retried, every other non-2xx response fails at once.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    /// - A 2xx response carries a non-JSON body (`InvalidBody`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!(
            "{}/{}",
            self.base_url,
            request.path.trim_start_matches('/')
        );

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "Sending Asana API request"
            );

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;
            let body = Self::parse_body(code, &body_text)?;

            let response = HttpResponse::new(code, res_headers, body);

            for change in response.asana_changes().iter().filter(|c| c.affected) {
                tracing::warn!(
                    "Request to {} is affected by upcoming Asana API change '{}' ({})",
                    request.path,
                    change.name,
                    change.info.as_deref().unwrap_or("no details")
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);

            let should_retry = code == 429 || code >= 500;
            if !should_retry || tries >= request.tries {
                if should_retry && request.tries > 1 {
                    return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                        code,
                        tries: request.tries,
                        message: error_message,
                        error_reference: response.request_id().map(String::from),
                    }));
                }
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference: response.request_id().map(String::from),
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::debug!(
                code,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying Asana API request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses the body text as JSON.
    ///
    /// Empty bodies become `{}`. Unparseable error bodies are kept as
    /// `raw_body` so the error message can carry them; unparseable success
    /// bodies are an error.
    fn parse_body(code: u16, body_text: &str) -> Result<serde_json::Value, HttpError> {
        if body_text.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }

        match serde_json::from_str(body_text) {
            Ok(body) => Ok(body),
            Err(e) if (200..=299).contains(&code) => {
                Err(HttpError::InvalidBody(InvalidResponseBodyError {
                    code,
                    reason: e.to_string(),
                }))
            }
            Err(_) => Ok(serde_json::json!({ "raw_body": body_text })),
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // Retry-After is only honoured for rate limiting
        if status == 429 {
            if let Some(delay) = response
                .retry_request_after
                .and_then(|secs| std::time::Duration::try_from_secs_f64(secs.max(0.0)).ok())
            {
                return delay;
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Serializes an Asana error body to a compact JSON message.
    ///
    /// Asana reports errors as `{"errors": [{"message": "...", "help": "..."}]}`.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors").and_then(|e| e.as_array()) {
            let messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .cloned()
                        .unwrap_or_else(|| serde_json::Value::String(e.to_string()))
                })
                .collect();
            error_body.insert("errors".to_string(), serde_json::Value::Array(messages));
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        if error_body.is_empty() {
            return format!("Request failed with status {}", response.code);
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, BaseUrl};
    use serde_json::json;

    fn create_test_config() -> AsanaConfig {
        AsanaConfig::builder()
            .access_token(AccessToken::new("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_base_url() {
        let config = AsanaConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .base_url(BaseUrl::new("http://localhost:9000/api/1.0").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "http://localhost:9000/api/1.0");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Asana API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = AsanaConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
    }

    #[test]
    fn test_feature_flag_headers() {
        let config = AsanaConfig::builder()
            .access_token(AccessToken::new("t").unwrap())
            .enable("a")
            .enable("b")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(
            client.default_headers().get("Asana-Enable"),
            Some(&"a,b".to_string())
        );
        assert!(client.default_headers().get("Asana-Disable").is_none());
    }

    #[test]
    fn test_parse_body_handles_empty_and_invalid_bodies() {
        assert_eq!(HttpClient::parse_body(204, "").unwrap(), json!({}));
        assert!(matches!(
            HttpClient::parse_body(200, "<html>"),
            Err(HttpError::InvalidBody(_))
        ));
        assert_eq!(
            HttpClient::parse_body(502, "Bad gateway").unwrap(),
            json!({"raw_body": "Bad gateway"})
        );
    }

    #[test]
    fn test_serialize_error_collects_asana_messages() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-9".to_string()]);
        let response = HttpResponse::new(
            400,
            headers,
            json!({"errors": [{"message": "project: Missing input", "help": "..."}]}),
        );

        let message = HttpClient::serialize_error(&response);
        assert!(message.contains("project: Missing input"));
        assert!(message.contains("req-9"));
        assert!(!message.contains("help"));
    }

    #[test]
    fn test_serialize_error_without_body_mentions_status() {
        let response = HttpResponse::new(404, HashMap::new(), json!({}));
        assert_eq!(
            HttpClient::serialize_error(&response),
            "Request failed with status 404"
        );
    }

    #[test]
    fn test_retry_delay_honours_retry_after_for_429_only() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["3".to_string()]);
        let response = HttpResponse::new(429, headers.clone(), json!({}));
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 429),
            std::time::Duration::from_secs(3)
        );

        let response = HttpResponse::new(500, headers, json!({}));
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 500),
            std::time::Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_retry_delay_falls_back_on_unrepresentable_retry_after() {
        for value in ["inf", "1e300"] {
            let mut headers = HashMap::new();
            headers.insert("retry-after".to_string(), vec![value.to_string()]);
            let response = HttpResponse::new(429, headers, json!({}));
            assert_eq!(
                HttpClient::calculate_retry_delay(&response, 429),
                std::time::Duration::from_secs(RETRY_WAIT_TIME),
                "Retry-After: {value}"
            );
        }
    }
}
