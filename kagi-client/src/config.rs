//! Client settings

use crate::constants::KAGI_DEFAULT_BASE_URL;
use kagi_core::{FastGptOptions, SearchOptions, SummarizeOptions};
use std::fmt;

/// Version namespace of the remote API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiVersion {
    /// `v0`
    #[default]
    V0,
}

impl ApiVersion {
    /// Path segment for this version
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V0 => "v0",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for a [`crate::Kagi`] client
///
/// Once handed to a client the settings are shared read-only between all
/// calls made through it.
#[derive(Clone)]
pub struct Settings {
    /// API token, sent as `Authorization: Bot <token>`
    pub token: String,
    /// API version segment
    pub version: ApiVersion,
    /// Base URL the version segment is appended to
    pub base_url: String,
    /// Defaults merged into every summarize call
    pub summarizer: Option<SummarizeOptions>,
    /// Defaults merged into every search call
    pub search: Option<SearchOptions>,
    /// Defaults merged into every FastGPT call
    pub fastgpt: Option<FastGptOptions>,
}

impl Settings {
    /// Create settings with a token and default everything else
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            version: ApiVersion::default(),
            base_url: KAGI_DEFAULT_BASE_URL.to_string(),
            summarizer: None,
            search: None,
            fastgpt: None,
        }
    }

    /// Set the API version
    #[must_use]
    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Set a custom base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set summarizer defaults
    #[must_use]
    pub fn with_summarizer_defaults(mut self, defaults: SummarizeOptions) -> Self {
        self.summarizer = Some(defaults);
        self
    }

    /// Set search defaults
    #[must_use]
    pub fn with_search_defaults(mut self, defaults: SearchOptions) -> Self {
        self.search = Some(defaults);
        self
    }

    /// Set FastGPT defaults
    #[must_use]
    pub fn with_fastgpt_defaults(mut self, defaults: FastGptOptions) -> Self {
        self.fastgpt = Some(defaults);
        self
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"<redacted>")
            .field("version", &self.version)
            .field("base_url", &self.base_url)
            .field("summarizer", &self.summarizer)
            .field("search", &self.search)
            .field("fastgpt", &self.fastgpt)
            .finish()
    }
}
