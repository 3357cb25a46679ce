//! Shared request executor
//!
//! Every endpoint method funnels through [`RequestExecutor::execute`], which
//! turns one transport exchange into exactly one of: the parsed response
//! envelope, a transport error, an API error or a parse error.

use crate::http::HttpClient;
use kagi_core::{ApiErrorDescriptor, Error, RequestDescriptor};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, trace, warn};

/// Sends requests and normalizes their outcome
#[derive(Clone)]
pub struct RequestExecutor {
    client: Arc<dyn HttpClient>,
}

impl RequestExecutor {
    /// Create an executor over the given transport
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// Issue one request and return the parsed response body
    ///
    /// A status other than 200 fails before the body is looked at. A body
    /// whose `error` field is an object, a non-empty list or a non-empty
    /// string fails even on 200; any other `error` value is ignored.
    pub async fn execute(&self, url: &str, request: RequestDescriptor) -> Result<Value, Error> {
        debug!(url = %url, method = %request.method, "Sending request to Kagi");

        let response = self.client.execute(url, &request).await.map_err(|e| {
            error!(error = %e, "Transport failure");
            e
        })?;

        debug!(status = response.status, "Received response from Kagi");

        if response.status != 200 {
            warn!(status = response.status, url = %url, "Kagi returned a non-200 status");
            return Err(Error::Transport {
                url: url.to_string(),
                request,
                response: response.raw(),
            });
        }

        trace!(body = %response.body, "Response body");

        let body: Value = serde_json::from_str(&response.body).map_err(|e| {
            error!(error = %e, "Failed to parse Kagi response");
            Error::Parse {
                url: url.to_string(),
                message: e.to_string(),
                source: Some(Box::new(e)),
            }
        })?;

        if let Some(reported) = body.get("error").filter(|value| reports_error(value)) {
            let descriptor = ApiErrorDescriptor::from_value(reported.clone());
            warn!(
                code = ?descriptor.code(),
                message = descriptor.message().unwrap_or_default(),
                "Kagi reported an error"
            );
            return Err(Error::Api {
                url: url.to_string(),
                request,
                response: response.raw(),
                error: descriptor,
            });
        }

        Ok(body)
    }
}

fn reports_error(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(items) => !items.is_empty(),
        Value::String(message) => !message.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use async_trait::async_trait;
    use kagi_core::HttpMethod;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    /// Transport double that records requests and answers with a fixed response
    pub(crate) struct MockClient {
        status: u16,
        body: String,
        pub(crate) requests: Mutex<Vec<(String, RequestDescriptor)>>,
    }

    impl MockClient {
        pub(crate) fn new(status: u16, body: impl Into<String>) -> Arc<Self> {
            Arc::new(Self {
                status,
                body: body.into(),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn ok(body: &Value) -> Arc<Self> {
            Self::new(200, body.to_string())
        }

        pub(crate) fn last(&self) -> (String, RequestDescriptor) {
            self.requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request recorded")
        }
    }

    #[async_trait]
    impl HttpClient for MockClient {
        async fn execute(
            &self,
            url: &str,
            request: &RequestDescriptor,
        ) -> Result<HttpResponse, Error> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), request.clone()));
            Ok(HttpResponse {
                status: self.status,
                headers: vec![("content-type".into(), "application/json".into())],
                body: self.body.clone(),
            })
        }
    }

    struct FailingClient;

    #[async_trait]
    impl HttpClient for FailingClient {
        async fn execute(&self, _: &str, _: &RequestDescriptor) -> Result<HttpResponse, Error> {
            Err(Error::Network {
                message: "connection refused".into(),
                source: None,
            })
        }
    }

    fn get() -> RequestDescriptor {
        RequestDescriptor::new(HttpMethod::Get).with_header("Authorization", "Bot t")
    }

    #[test_log::test(tokio::test)]
    async fn test_success_returns_body() {
        let body = json!({"meta": {"id": "1"}, "data": {"output": "ok"}});
        let executor = RequestExecutor::new(MockClient::ok(&body));

        let result = executor.execute("https://x/v0/search", get()).await.unwrap();
        assert_eq!(result, body);
    }

    #[test_log::test(tokio::test)]
    async fn test_non_200_is_transport_error() {
        // Body is not JSON: the status check must come first.
        let executor = RequestExecutor::new(MockClient::new(404, "<html>not found</html>"));

        let error = executor.execute("https://x/v0/search", get()).await.unwrap_err();
        match error {
            Error::Transport {
                url,
                request,
                response,
            } => {
                assert_eq!(url, "https://x/v0/search");
                assert_eq!(request.method, HttpMethod::Get);
                assert_eq!(response.status, 404);
                assert_eq!(response.header("Content-Type"), Some("application/json"));
            }
            other => panic!("Expected Transport error, got: {other:?}"),
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_error_field_is_api_error() {
        let executor =
            RequestExecutor::new(MockClient::ok(&json!({"error": {"code": 1, "msg": "bad"}})));

        let error = executor.execute("https://x/v0/fastgpt", get()).await.unwrap_err();
        assert_eq!(error.status(), Some(200));
        let descriptor = error.api_error().expect("Expected Api error");
        assert_eq!(descriptor.code(), Some(1));
        assert_eq!(descriptor.message(), Some("bad"));
    }

    #[tokio::test]
    async fn test_null_error_field_is_success() {
        let body = json!({"data": [], "error": null});
        let executor = RequestExecutor::new(MockClient::ok(&body));

        assert_eq!(executor.execute("u", get()).await.unwrap(), body);
    }

    #[tokio::test]
    async fn test_empty_or_falsy_error_field_is_success() {
        for error in [json!(false), json!(""), json!(0), json!([])] {
            let body = json!({"data": [], "error": error});
            let executor = RequestExecutor::new(MockClient::ok(&body));

            assert_eq!(executor.execute("u", get()).await.unwrap(), body);
        }
    }

    #[tokio::test]
    async fn test_error_list_and_string_are_api_errors() {
        let executor = RequestExecutor::new(MockClient::ok(
            &json!({"error": [{"code": 2, "msg": "Missing query"}]}),
        ));
        let error = executor.execute("u", get()).await.unwrap_err();
        assert_eq!(error.api_error().and_then(|e| e.code()), Some(2));

        let executor = RequestExecutor::new(MockClient::ok(&json!({"error": "quota exceeded"})));
        let error = executor.execute("u", get()).await.unwrap_err();
        assert_eq!(
            error.api_error().and_then(|e| e.message()),
            Some("quota exceeded")
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let executor = RequestExecutor::new(MockClient::new(200, "{not json"));

        let error = executor.execute("u", get()).await.unwrap_err();
        assert!(matches!(error, Error::Parse { ref url, .. } if url == "u"));
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let executor = RequestExecutor::new(Arc::new(FailingClient));

        let error = executor.execute("u", get()).await.unwrap_err();
        assert!(matches!(error, Error::Network { .. }));
    }
}
