//! HTTP client abstraction and utilities

use async_trait::async_trait;
use kagi_core::{Error, HttpMethod, RawResponse, RequestDescriptor};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// A transport response with its body read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Vec<(String, String)>,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Status and headers without the body
    pub fn raw(&self) -> RawResponse {
        RawResponse {
            status: self.status,
            headers: self.headers.clone(),
        }
    }
}

/// HTTP client abstraction
///
/// Implementations issue exactly one request per call and report whatever
/// status the server answered with; interpreting the status is left to the
/// caller.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request
    async fn execute(&self, url: &str, request: &RequestDescriptor)
        -> Result<HttpResponse, Error>;
}

/// Default HTTP client implementation using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("kagi-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(network_error)?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn execute(
        &self,
        url: &str,
        request: &RequestDescriptor,
    ) -> Result<HttpResponse, Error> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .client
            .request(method, url)
            .headers(create_headers(&request.headers)?);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(network_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(network_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Convert header pairs into a reqwest header map
pub fn create_headers(pairs: &[(String, String)]) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    for (name, value) in pairs {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::Configuration(format!("Invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::Configuration(format!("Invalid value for header {name}: {e}")))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

/// Convert network errors to client errors
pub fn network_error(error: reqwest::Error) -> Error {
    Error::Network {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_headers() {
        let headers = create_headers(&[
            ("Authorization".into(), "Bot abc".into()),
            ("Accept".into(), "application/json".into()),
        ])
        .unwrap();

        assert_eq!(headers.get("authorization").unwrap(), "Bot abc");
        assert_eq!(headers.get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_create_headers_rejects_invalid_value() {
        let result = create_headers(&[("Authorization".into(), "Bot a\nb".into())]);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_reqwest_client_creation() {
        assert!(ReqwestClient::new().is_ok());
    }
}
