//! HTTP response types for the Asana API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing response
//! status, headers and the parsed JSON body.

use std::collections::HashMap;

/// An upcoming breaking change announced by the `Asana-Change` header.
///
/// The header value looks like
/// `name=new_user_task_lists;info=https://asa.na/...;affected=true`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsanaChange {
    /// The feature flag name of the change.
    pub name: String,
    /// A link describing the change.
    pub info: Option<String>,
    /// Whether this request is affected by the change.
    pub affected: bool,
}

impl AsanaChange {
    /// Parses one `Asana-Change` header value.
    ///
    /// Returns `None` if the value carries no `name`.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let mut change = Self::default();

        for part in header_value.split(';') {
            let mut kv = part.trim().splitn(2, '=');
            match (kv.next(), kv.next()) {
                (Some("name"), Some(value)) => change.name = value.to_string(),
                (Some("info"), Some(value)) => change.info = Some(value.to_string()),
                (Some("affected"), Some(value)) => change.affected = value == "true",
                _ => {}
            }
        }

        if change.name.is_empty() {
            None
        } else {
            Some(change)
        }
    }
}

/// An HTTP response from the Asana API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body (`{}` for empty bodies).
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every change announced through `Asana-Change` headers.
    #[must_use]
    pub fn asana_changes(&self) -> Vec<AsanaChange> {
        self.headers
            .get("asana-change")
            .map(|values| {
                values
                    .iter()
                    .flat_map(|value| value.split(','))
                    .filter_map(AsanaChange::parse)
                    .collect()
            })
            .unwrap_or_default()
    }
}
