//! Validating builder for [`Settings`]

use crate::config::{ApiVersion, Settings};
use crate::constants::KAGI_DEFAULT_BASE_URL;
use kagi_core::{Error, FastGptOptions, SearchOptions, SummarizeOptions};
use url::Url;

/// Builder for client settings
///
/// Unlike the `with_*` methods on [`Settings`], [`SettingsBuilder::build`]
/// rejects an empty token and a base URL that does not parse.
pub struct SettingsBuilder {
    token: String,
    version: Option<ApiVersion>,
    base_url: Option<String>,
    summarizer: Option<SummarizeOptions>,
    search: Option<SearchOptions>,
    fastgpt: Option<FastGptOptions>,
}

impl SettingsBuilder {
    /// Create a new builder with the required token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            version: None,
            base_url: None,
            summarizer: None,
            search: None,
            fastgpt: None,
        }
    }

    /// Set the API version
    #[must_use]
    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set summarizer defaults
    #[must_use]
    pub fn summarizer(mut self, defaults: SummarizeOptions) -> Self {
        self.summarizer = Some(defaults);
        self
    }

    /// Set search defaults
    #[must_use]
    pub fn search(mut self, defaults: SearchOptions) -> Self {
        self.search = Some(defaults);
        self
    }

    /// Set FastGPT defaults
    #[must_use]
    pub fn fastgpt(mut self, defaults: FastGptOptions) -> Self {
        self.fastgpt = Some(defaults);
        self
    }

    /// Build the settings
    pub fn build(self) -> Result<Settings, Error> {
        if self.token.trim().is_empty() {
            return Err(Error::Configuration("API token must not be empty".into()));
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| KAGI_DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)
            .map_err(|e| Error::Configuration(format!("Invalid base URL {base_url}: {e}")))?;

        Ok(Settings {
            token: self.token,
            version: self.version.unwrap_or_default(),
            base_url,
            summarizer: self.summarizer,
            search: self.search,
            fastgpt: self.fastgpt,
        })
    }
}
