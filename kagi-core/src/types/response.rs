//! Response envelope and per-endpoint payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Request metadata reported by the API
    #[serde(default)]
    pub meta: Meta,
    /// Endpoint-specific payload
    pub data: T,
}

/// Metadata attached to every response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Request identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Node that served the request
    #[serde(default)]
    pub node: Option<String>,
    /// Server-side processing time in milliseconds
    #[serde(default)]
    pub ms: Option<u64>,
    /// Remaining account balance in USD
    #[serde(default)]
    pub api_balance: Option<f64>,
}

/// Payload of the Universal Summarizer endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeData {
    /// Summary text
    pub output: String,
    /// Tokens processed
    #[serde(default)]
    pub tokens: u64,
}

/// Payload of the FastGPT endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastGptData {
    /// Answer text
    pub output: String,
    /// Tokens processed
    #[serde(default)]
    pub tokens: u64,
    /// Sources the answer cites
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// A source cited by a FastGPT answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Page title
    pub title: String,
    /// Excerpt
    #[serde(default)]
    pub snippet: String,
    /// Page URL
    pub url: String,
}

/// Kind discriminator of a [`SearchObject`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchObjectKind {
    /// A search result (`t` = 0)
    Result,
    /// A list of related searches (`t` = 1)
    Related,
    /// A type this crate does not know about
    Unknown(u8),
}

/// One entry of a search or enrichment result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchObject {
    /// Type discriminator, see [`SearchObject::kind`]
    pub t: u8,
    /// Result rank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Result URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Result title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Result excerpt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Publication timestamp, as reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    /// Thumbnail image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    /// Related search terms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
}

impl SearchObject {
    /// Decode the `t` discriminator
    pub const fn kind(&self) -> SearchObjectKind {
        match self.t {
            0 => SearchObjectKind::Result,
            1 => SearchObjectKind::Related,
            other => SearchObjectKind::Unknown(other),
        }
    }
}

/// Thumbnail attached to a search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Image URL
    pub url: String,
    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,
    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,
}

/// One error entry reported by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Numeric error code
    #[serde(default)]
    pub code: Option<i64>,
    /// Human-readable message
    #[serde(default)]
    pub msg: Option<String>,
    /// Reference to the offending input, if any
    #[serde(default, rename = "ref")]
    pub reference: Option<Value>,
}

/// The `error` field of a failed response envelope
///
/// The API reports errors either as a single object or as a list of
/// objects; both are accepted. The raw value is kept as received.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorDescriptor {
    raw: Value,
    details: Vec<ErrorDetail>,
}

impl ApiErrorDescriptor {
    /// Interpret an `error` value from a response body
    pub fn from_value(raw: Value) -> Self {
        let details = match &raw {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            Value::Object(_) => serde_json::from_value(raw.clone())
                .map(|detail| vec![detail])
                .unwrap_or_default(),
            Value::String(message) => vec![ErrorDetail {
                code: None,
                msg: Some(message.clone()),
                reference: None,
            }],
            _ => Vec::new(),
        };

        Self { raw, details }
    }

    /// Code of the first error entry
    pub fn code(&self) -> Option<i64> {
        self.details.first().and_then(|detail| detail.code)
    }

    /// Message of the first error entry
    pub fn message(&self) -> Option<&str> {
        self.details.first().and_then(|detail| detail.msg.as_deref())
    }

    /// All error entries
    pub fn details(&self) -> &[ErrorDetail] {
        &self.details
    }

    /// The `error` value exactly as received
    pub const fn raw(&self) -> &Value {
        &self.raw
    }
}
