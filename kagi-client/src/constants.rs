//! Constants for the Kagi API client

/// Default API base URL
pub const KAGI_DEFAULT_BASE_URL: &str = "https://kagi.com/api";

/// Scheme prefix of the `Authorization` header value
pub const AUTH_SCHEME: &str = "Bot";

/// MIME type used for `Accept` and `Content-Type`
pub const JSON_MIME: &str = "application/json";

/// Path segment of the Universal Summarizer endpoint
pub const SUMMARIZE_PATH: &str = "summarize";

/// Path segment of the Search endpoint
pub const SEARCH_PATH: &str = "search";

/// Path segment of the FastGPT endpoint
pub const FASTGPT_PATH: &str = "fastgpt";

/// Path segment shared by the enrichment endpoints
pub const ENRICH_PATH: &str = "enrich";
