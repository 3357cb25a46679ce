//! The Kagi API client
//!
//! Each endpoint method merges its parameters (required fields, then the
//! defaults from [`Settings`], then the call options), builds one request
//! and hands it to the shared [`RequestExecutor`]. Typed methods decode the
//! envelope into [`ApiResponse`]; the `*_raw` variants return it as JSON.

use crate::config::Settings;
use crate::constants::{
    AUTH_SCHEME, ENRICH_PATH, FASTGPT_PATH, JSON_MIME, SEARCH_PATH, SUMMARIZE_PATH,
};
use crate::executor::RequestExecutor;
use crate::http::{HttpClient, ReqwestClient};
use crate::input::SummaryInput;
use crate::utils::endpoint_url;
use kagi_core::{
    ApiResponse, EnrichType, Error, FastGptData, FastGptOptions, HttpMethod, Params,
    RequestDescriptor, SearchObject, SearchOptions, SummarizeData, SummarizeOptions,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// A fully built request: URL plus descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// Target URL including the query string
    pub url: String,
    /// Method, headers and body
    pub request: RequestDescriptor,
}

/// Client for the Kagi API
///
/// Cheap to clone; clones share the same settings and transport.
///
/// # Example
///
/// ```no_run
/// use kagi_client::{Kagi, Settings};
/// use kagi_core::{HttpMethod, SummarizeOptions, SummaryType};
///
/// # async fn example() -> Result<(), kagi_core::Error> {
/// let kagi = Kagi::new(Settings::new("your-api-token"))?;
///
/// let summary = kagi
///     .summarize(
///         "https://en.wikipedia.org/wiki/Rust_(programming_language)",
///         SummarizeOptions::new().summary_type(SummaryType::Takeaway),
///         HttpMethod::Post,
///     )
///     .await?;
/// println!("{}", summary.data.output);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Kagi {
    settings: Arc<Settings>,
    executor: RequestExecutor,
}

impl Kagi {
    /// Create a client using the default reqwest transport
    pub fn new(settings: Settings) -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::new()?);
        Ok(Self::with_client(settings, client))
    }

    /// Create a client with just an API token
    pub fn with_token(token: impl Into<String>) -> Result<Self, Error> {
        Self::new(Settings::new(token))
    }

    /// Create a client over a custom transport
    pub fn with_client(settings: Settings, client: Arc<dyn HttpClient>) -> Self {
        Self {
            settings: Arc::new(settings),
            executor: RequestExecutor::new(client),
        }
    }

    /// The settings this client was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Summarize a URL or a piece of text
    ///
    /// `input` is sent as `url` when it parses as an absolute URL and as
    /// `text` otherwise. With [`HttpMethod::Get`] the parameters go in the
    /// query string; with [`HttpMethod::Post`] they go in a JSON body.
    pub async fn summarize(
        &self,
        input: &str,
        options: SummarizeOptions,
        method: HttpMethod,
    ) -> Result<ApiResponse<SummarizeData>, Error> {
        let prepared = self.prepare_summarize(input, options, method)?;
        self.send_typed(prepared).await
    }

    /// [`Kagi::summarize`] returning the untyped envelope
    pub async fn summarize_raw(
        &self,
        input: &str,
        options: SummarizeOptions,
        method: HttpMethod,
    ) -> Result<Value, Error> {
        let prepared = self.prepare_summarize(input, options, method)?;
        self.send(prepared).await
    }

    /// Run a web search
    pub async fn search(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<ApiResponse<Vec<SearchObject>>, Error> {
        let prepared = self.prepare_search(query, options)?;
        self.send_typed(prepared).await
    }

    /// [`Kagi::search`] returning the untyped envelope
    pub async fn search_raw(&self, query: &str, options: SearchOptions) -> Result<Value, Error> {
        let prepared = self.prepare_search(query, options)?;
        self.send(prepared).await
    }

    /// Ask FastGPT a question
    pub async fn fastgpt(
        &self,
        query: &str,
        options: FastGptOptions,
    ) -> Result<ApiResponse<FastGptData>, Error> {
        let prepared = self.prepare_fastgpt(query, options)?;
        self.send_typed(prepared).await
    }

    /// [`Kagi::fastgpt`] returning the untyped envelope
    pub async fn fastgpt_raw(&self, query: &str, options: FastGptOptions) -> Result<Value, Error> {
        let prepared = self.prepare_fastgpt(query, options)?;
        self.send(prepared).await
    }

    /// Query one of the enrichment indexes
    pub async fn enrich(
        &self,
        query: &str,
        kind: EnrichType,
    ) -> Result<ApiResponse<Vec<SearchObject>>, Error> {
        match kind {
            EnrichType::Web => self.enrich_web(query).await,
            EnrichType::News => self.enrich_news(query).await,
        }
    }

    /// [`Kagi::enrich`] returning the untyped envelope
    pub async fn enrich_raw(&self, query: &str, kind: EnrichType) -> Result<Value, Error> {
        let prepared = self.prepare_enrich(query, kind)?;
        self.send(prepared).await
    }

    /// Query the web enrichment index
    pub async fn enrich_web(&self, query: &str) -> Result<ApiResponse<Vec<SearchObject>>, Error> {
        let prepared = self.prepare_enrich(query, EnrichType::Web)?;
        self.send_typed(prepared).await
    }

    /// Query the news enrichment index
    pub async fn enrich_news(&self, query: &str) -> Result<ApiResponse<Vec<SearchObject>>, Error> {
        let prepared = self.prepare_enrich(query, EnrichType::News)?;
        self.send_typed(prepared).await
    }

    /// Build the summarize request without sending it
    pub fn prepare_summarize(
        &self,
        input: &str,
        options: SummarizeOptions,
        method: HttpMethod,
    ) -> Result<PreparedRequest, Error> {
        let input = SummaryInput::classify(input);
        let mut params = layered(
            Params::new().with(input.field(), input.value()),
            self.settings.summarizer.as_ref(),
            &options,
        )?;
        // Defaults or options may name the other input field; only the
        // classified one may reach the wire.
        params.remove(input.other_field());

        match method {
            HttpMethod::Get => Ok(PreparedRequest {
                url: self.url(&[SUMMARIZE_PATH], &params.to_query_string()?),
                request: self
                    .authorized(HttpMethod::Get)
                    .with_header("Accept", JSON_MIME),
            }),
            HttpMethod::Post => Ok(PreparedRequest {
                url: self.url(&[SUMMARIZE_PATH], ""),
                request: self
                    .authorized(HttpMethod::Post)
                    .with_header("Content-Type", JSON_MIME)
                    .with_body(params.to_json_body().to_string()),
            }),
        }
    }

    /// Build the search request without sending it
    pub fn prepare_search(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<PreparedRequest, Error> {
        let params = layered(
            Params::new().with("q", query),
            self.settings.search.as_ref(),
            &options,
        )?;

        Ok(PreparedRequest {
            url: self.url(&[SEARCH_PATH], &params.to_query_string()?),
            request: self.authorized(HttpMethod::Get),
        })
    }

    /// Build the FastGPT request without sending it
    pub fn prepare_fastgpt(
        &self,
        query: &str,
        options: FastGptOptions,
    ) -> Result<PreparedRequest, Error> {
        let params = layered(
            Params::new().with("query", query),
            self.settings.fastgpt.as_ref(),
            &options,
        )?;

        Ok(PreparedRequest {
            url: self.url(&[FASTGPT_PATH], ""),
            request: self
                .authorized(HttpMethod::Post)
                .with_header("Accept", JSON_MIME)
                .with_header("Content-Type", JSON_MIME)
                .with_body(params.to_json_body().to_string()),
        })
    }

    /// Build an enrichment request without sending it
    pub fn prepare_enrich(&self, query: &str, kind: EnrichType) -> Result<PreparedRequest, Error> {
        let params = Params::new().with("q", query);

        Ok(PreparedRequest {
            url: self.url(&[ENRICH_PATH, kind.as_str()], &params.to_query_string()?),
            request: self
                .authorized(HttpMethod::Get)
                .with_header("Accept", JSON_MIME),
        })
    }

    #[instrument(skip(self, prepared), fields(method = %prepared.request.method))]
    async fn send(&self, prepared: PreparedRequest) -> Result<Value, Error> {
        self.executor.execute(&prepared.url, prepared.request).await
    }

    async fn send_typed<T: DeserializeOwned>(
        &self,
        prepared: PreparedRequest,
    ) -> Result<ApiResponse<T>, Error> {
        let url = prepared.url.clone();
        let body = self.send(prepared).await?;

        serde_json::from_value(body).map_err(|e| Error::Parse {
            url,
            message: format!("Unexpected response shape: {e}"),
            source: Some(Box::new(e)),
        })
    }

    fn authorized(&self, method: HttpMethod) -> RequestDescriptor {
        RequestDescriptor::new(method).with_header(
            "Authorization",
            format!("{AUTH_SCHEME} {}", self.settings.token),
        )
    }

    fn url(&self, path: &[&str], query: &str) -> String {
        endpoint_url(&self.settings.base_url, self.settings.version, path, query)
    }
}

/// Overlay endpoint defaults and then call options on the required fields
fn layered<T: Serialize>(
    required: Params,
    defaults: Option<&T>,
    options: &T,
) -> Result<Params, Error> {
    let mut params = required;
    if let Some(defaults) = defaults {
        params.merge(Params::from_serialize(defaults)?);
    }
    params.merge(Params::from_serialize(options)?);
    Ok(params)
}
