//! Request parameter shaping for resource actions.
//!
//! Every action method builds its body or query from a [`Params`] map, strips
//! empty values with [`filter_params`], and checks mandatory arguments with
//! [`required`] before any request is sent. Per-request [`Options`] (field
//! selection, expansion, pretty printing) travel alongside and are forwarded
//! to the transport untouched.
//!
//! # Example
//!
//! ```rust
//! use asana_api::rest::{filter_params, required, Params};
//! use serde_json::json;
//!
//! let params = Params::new()
//!     .with("name", "Todo")
//!     .with("insert_before", None::<String>)
//!     .with("archived", false);
//!
//! let filtered = filter_params(&params);
//! assert_eq!(filtered.len(), 2);
//! assert_eq!(filtered.get("archived"), Some(&json!(false)));
//!
//! assert!(required("project", None::<String>).is_err());
//! assert_eq!(required("project", Some("999")).unwrap(), "999");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::rest::ResourceError;

/// A mapping of request field names to JSON values.
///
/// Used for request bodies (`POST`/`PUT`) and list query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and returns the map, for chaining.
    ///
    /// `None` values are stored as `null` and dropped by [`filter_params`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the field is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Copies every field of `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Returns the map as a JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Converts the fields to query string pairs.
    ///
    /// Nulls are skipped, arrays become comma-separated values and nested
    /// objects are sent as JSON strings.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| query_value(value).map(|v| (key.clone(), v)))
            .collect()
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Per-request options forwarded unchanged to the transport.
///
/// The resource layer never interprets option keys. The HTTP transport sends
/// each option as an `opt_<key>` query parameter, which is how Asana reads
/// `opt_fields`, `opt_expand` and `opt_pretty`. The one exception is
/// `headers`, whose entries are sent as request headers instead.
///
/// # Example
///
/// ```rust
/// use asana_api::rest::Options;
///
/// let options = Options::new().fields(&["name", "created_at"]).pretty();
/// assert_eq!(
///     options.to_query(),
///     vec![
///         ("opt_fields".to_string(), "name,created_at".to_string()),
///         ("opt_pretty".to_string(), "true".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    /// Creates an empty option bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an arbitrary option.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Requests only the given fields.
    #[must_use]
    pub fn fields(self, fields: &[&str]) -> Self {
        self.with("fields", fields.to_vec())
    }

    /// Expands the given compact sub-resources.
    #[must_use]
    pub fn expand(self, fields: &[&str]) -> Self {
        self.with("expand", fields.to_vec())
    }

    /// Asks the server for pretty-printed output.
    #[must_use]
    pub fn pretty(self) -> Self {
        self.with("pretty", true)
    }

    /// Adds a header to this request only.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers = match self.0.remove(HEADERS_KEY) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        headers.insert(name.into(), Value::String(value.into()));
        self.0.insert(HEADERS_KEY.to_string(), Value::Object(headers));
        self
    }

    /// Opts this request into the given API changes (`Asana-Enable`).
    ///
    /// Overrides the flags configured on the client for this request.
    #[must_use]
    pub fn enable(self, flags: &[&str]) -> Self {
        self.header("Asana-Enable", flags.join(","))
    }

    /// Opts this request out of the given API changes (`Asana-Disable`).
    #[must_use]
    pub fn disable(self, flags: &[&str]) -> Self {
        self.header("Asana-Disable", flags.join(","))
    }

    /// Returns the per-request headers.
    #[must_use]
    pub fn headers(&self) -> Vec<(String, String)> {
        match self.0.get(HEADERS_KEY) {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(name, value)| query_value(value).map(|v| (name.clone(), v)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Returns the value of an option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies every option of `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Converts the options to `opt_`-prefixed query string pairs.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(key, _)| key.as_str() != HEADERS_KEY)
            .filter_map(|(key, value)| query_value(value).map(|v| (format!("opt_{key}"), v)))
            .collect()
    }
}

/// Option key holding per-request headers.
const HEADERS_KEY: &str = "headers";

/// Returns `true` for values that carry nothing worth sending.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(arr) => {
            let values: Vec<String> = arr
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect();
            if values.is_empty() {
                None
            } else {
                Some(values.join(","))
            }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Returns a copy of `params` without null, empty-string, empty-array or
/// empty-object values.
///
/// `false` and `0` are kept. The input is not modified and filtering is
/// idempotent.
#[must_use]
pub fn filter_params(params: &Params) -> Params {
    Params(
        params
            .0
            .iter()
            .filter(|(_, value)| !is_empty_value(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
    )
}

/// Unwraps a mandatory argument.
///
/// `None` and blank strings produce
/// [`ConfigError::MissingRequiredArgument`] naming `argument`.
///
/// # Errors
///
/// Returns [`ResourceError::Config`] when the argument is absent.
pub fn required<T: AsRef<str>>(argument: &'static str, value: Option<T>) -> Result<T, ResourceError> {
    value
        .filter(|v| !v.as_ref().trim().is_empty())
        .ok_or(ResourceError::Config(ConfigError::MissingRequiredArgument {
            argument,
        }))
}
