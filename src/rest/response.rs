//! Views over Asana response envelopes.
//!
//! Asana wraps every payload in a `data` member. Single-record endpoints
//! return an object:
//!
//! ```json
//! { "data": { "gid": "1331", "resource_type": "section", "name": "Next Actions" } }
//! ```
//!
//! List endpoints return an array plus an optional continuation token:
//!
//! ```json
//! { "data": [ { "gid": "1331" } ], "next_page": { "offset": "eyJ0eXAiOJiKV1iQLCJhbGciOiJIUzI1NiJ9" } }
//! ```
//!
//! `next_page` is `null` or missing on the last page.

use serde_json::Value;

use crate::clients::HttpResponse;
use crate::rest::{Record, ResourceError};

/// Unwraps the `data` object of a single-record response.
///
/// # Errors
///
/// Returns [`ResourceError::MalformedResponse`] if `data` is missing or is
/// not an object.
pub fn first_record(response: &HttpResponse, resource: &'static str) -> Result<Record, ResourceError> {
    match response.body.get("data") {
        Some(Value::Object(map)) => Ok(Record::from(map.clone())),
        Some(other) => Err(ResourceError::MalformedResponse {
            resource,
            reason: format!("expected 'data' to be an object, got {}", kind(other)),
        }),
        None => Err(ResourceError::MalformedResponse {
            resource,
            reason: "missing 'data'".to_string(),
        }),
    }
}

/// One page of a list response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Records of this page, in server order.
    pub records: Vec<Record>,
    /// Continuation token for the following page; `None` on the last page.
    pub next_offset: Option<String>,
}

impl Page {
    /// Unwraps the `data` array and `next_page.offset` of a list response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedResponse`] if `data` is missing or
    /// not an array, or if any element is not an object.
    pub fn from_response(response: &HttpResponse, resource: &'static str) -> Result<Self, ResourceError> {
        let items = match response.body.get("data") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(ResourceError::MalformedResponse {
                    resource,
                    reason: format!("expected 'data' to be an array, got {}", kind(other)),
                })
            }
            None => {
                return Err(ResourceError::MalformedResponse {
                    resource,
                    reason: "missing 'data'".to_string(),
                })
            }
        };

        let records = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(Record::from(map.clone())),
                other => Err(ResourceError::MalformedResponse {
                    resource,
                    reason: format!("element {index} of 'data' is {}", kind(other)),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let next_offset = response
            .body
            .get("next_page")
            .and_then(|page| page.get("offset"))
            .and_then(Value::as_str)
            .filter(|offset| !offset.is_empty())
            .map(String::from);

        Ok(Self {
            records,
            next_offset,
        })
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
