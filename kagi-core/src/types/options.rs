//! Per-endpoint call options
//!
//! Every field is optional and omitted from the request when unset. Each
//! options struct also carries an `extra` map for parameters the API accepts
//! but this crate does not model; those are merged verbatim. Options become
//! request parameters through [`crate::Params::from_serialize`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Summarization engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Friendly, descriptive, fast summary
    Cecil,
    /// Formal, technical, analytical summary
    Agnes,
    /// Same as agnes
    Daphne,
    /// Best-in-class summary using an enterprise-grade model
    Muriel,
}

/// Shape of the summary output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    /// Paragraph(s) of summary prose
    Summary,
    /// Bulleted list of key points
    Takeaway,
}

/// Options for the Universal Summarizer endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizeOptions {
    /// Summarization engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<Engine>,
    /// Output shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_type: Option<SummaryType>,
    /// Language code to translate the summary into (e.g. "EN", "DE")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    /// Whether cached requests are allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    /// Additional raw parameters
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SummarizeOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the engine
    #[must_use]
    pub fn engine(mut self, engine: Engine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Set the summary type
    #[must_use]
    pub fn summary_type(mut self, summary_type: SummaryType) -> Self {
        self.summary_type = Some(summary_type);
        self
    }

    /// Set the target language
    #[must_use]
    pub fn target_language(mut self, language: impl Into<String>) -> Self {
        self.target_language = Some(language.into());
        self
    }

    /// Allow or forbid cached results
    #[must_use]
    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Add a raw parameter
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Options for the Search endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Maximum number of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Additional raw parameters
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result limit
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Add a raw parameter
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Options for the FastGPT endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FastGptOptions {
    /// Whether cached requests are allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    /// Whether to ground the answer in web search results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search: Option<bool>,
    /// Additional raw parameters
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FastGptOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow or forbid cached results
    #[must_use]
    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Enable or disable web search
    #[must_use]
    pub fn web_search(mut self, web_search: bool) -> Self {
        self.web_search = Some(web_search);
        self
    }

    /// Add a raw parameter
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Enrichment index to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichType {
    /// The "Teclis" index of non-commercial web content
    Web,
    /// The "TinyGem" index of non-mainstream news
    News,
}

impl EnrichType {
    /// Path segment of the enrichment endpoint
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::News => "news",
        }
    }
}

impl fmt::Display for EnrichType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
