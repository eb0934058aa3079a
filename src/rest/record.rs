//! Server records and compact references.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entity as received from the server.
///
/// An ordered mapping of field name to JSON value. Unknown fields are kept
/// as-is; absent fields are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns `true` if the field is present, even when it is `null`.
    #[must_use]
    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterates over the field names in server order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the globally unique identifier, if hydrated.
    #[must_use]
    pub fn gid(&self) -> Option<&str> {
        self.0.get("gid").and_then(Value::as_str)
    }

    /// Returns the `resource_type` discriminator, if hydrated.
    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        self.0.get("resource_type").and_then(Value::as_str)
    }

    /// Returns the record as a JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = Value;

    /// Accepts JSON objects; any other value is handed back unchanged.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

/// A compact reference to another resource, such as a section's project.
///
/// Only the identifier is guaranteed. The referenced object is never
/// fetched or owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Identifier of the referenced resource.
    pub gid: String,
    /// Type of the referenced resource, when the server included it.
    #[serde(default)]
    pub resource_type: Option<String>,
    /// Display name, when the server included it.
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_exposes_identity_fields() {
        let record = Record::try_from(json!({
            "gid": "1331",
            "resource_type": "section",
            "name": "Next Actions"
        }))
        .unwrap();

        assert_eq!(record.gid(), Some("1331"));
        assert_eq!(record.resource_type(), Some("section"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_record_preserves_key_order() {
        let record = Record::try_from(json!({"z": 1, "a": 2, "m": 3})).unwrap();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_null_field_is_present_but_empty() {
        let record = Record::try_from(json!({"gid": "1", "notes": null})).unwrap();

        assert!(record.contains_key("notes"));
        assert_eq!(record.get("notes"), Some(&Value::Null));
        assert!(!record.contains_key("name"));
    }

    #[test]
    fn test_try_from_rejects_non_objects() {
        let result = Record::try_from(json!(["gid"]));
        assert_eq!(result.unwrap_err(), json!(["gid"]));
    }

    #[test]
    fn test_resource_ref_deserializes_minimal_reference() {
        let reference: ResourceRef = serde_json::from_value(json!({"gid": "999"})).unwrap();

        assert_eq!(reference.gid, "999");
        assert_eq!(reference.resource_type, None);
        assert_eq!(reference.name, None);
    }

    #[test]
    fn test_resource_ref_ignores_extra_fields() {
        let reference: ResourceRef = serde_json::from_value(json!({
            "gid": "999",
            "resource_type": "project",
            "name": "Roadmap",
            "color": "light-green"
        }))
        .unwrap();

        assert_eq!(reference.resource_type.as_deref(), Some("project"));
        assert_eq!(reference.name.as_deref(), Some("Roadmap"));
    }
}
