//! Classification of summarizer input

use url::Url;

/// What the summarizer is asked to summarize
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryInput {
    /// An absolute URL of a document to fetch
    Url(String),
    /// Literal text
    Text(String),
}

impl SummaryInput {
    /// Treat `input` as a URL if it parses as an absolute URL, else as text
    pub fn classify(input: &str) -> Self {
        match Url::parse(input) {
            Ok(_) => Self::Url(input.to_owned()),
            Err(_) => Self::Text(input.to_owned()),
        }
    }

    /// Name of the request parameter carrying this input
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Text(_) => "text",
        }
    }

    /// Name of the parameter this input must not be sent alongside
    pub const fn other_field(&self) -> &'static str {
        match self {
            Self::Url(_) => "text",
            Self::Text(_) => "url",
        }
    }

    /// The input as given
    pub fn value(&self) -> &str {
        match self {
            Self::Url(value) | Self::Text(value) => value,
        }
    }
}
