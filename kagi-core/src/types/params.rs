//! Endpoint parameter maps and their wire encodings

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// A flat map of request parameters
///
/// Values are JSON scalars in practice (string, number, bool, null).
/// Merging is shallow and key-by-key: a later source overwrites earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`Params::insert`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the map holds no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlay `other` on top of `self`; keys in `other` win
    pub fn merge(&mut self, other: Self) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Remove a key, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Build parameters from any struct that serializes to a JSON object
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(Error::Serialization {
                message: format!("expected an object of parameters, got {other}"),
                source: None,
            }),
        }
    }

    /// Encode as an `application/x-www-form-urlencoded` query string
    ///
    /// Null values are omitted. Strings are emitted verbatim, everything else
    /// in its JSON text form.
    pub fn to_query_string(&self) -> Result<String> {
        let pairs: Vec<(&str, String)> = self
            .0
            .iter()
            .filter_map(|(key, value)| query_value(value).map(|v| (key.as_str(), v)))
            .collect();

        serde_urlencoded::to_string(pairs).map_err(|e| Error::Serialization {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })
    }

    /// The JSON object sent as a POST body; null values are omitted
    pub fn to_json_body(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
