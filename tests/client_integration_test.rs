//! Integration tests for the Kagi client against a mock HTTP server

use kagi::{
    EnrichType, Engine, Error, FastGptOptions, HttpMethod, Kagi, SearchObjectKind, SearchOptions,
    Settings, SettingsBuilder, SummarizeOptions, SummaryType,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn client_for(server: &MockServer) -> Kagi {
    let settings = SettingsBuilder::new(TOKEN)
        .base_url(format!("{}/api", server.uri()))
        .build()
        .unwrap();
    Kagi::new(settings).unwrap()
}

#[test_log::test(tokio::test)]
async fn test_summarize_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/summarize"))
        .and(header("Authorization", "Bot test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "url": "https://example.com/article",
            "engine": "agnes",
            "summary_type": "takeaway"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"id": "abc", "node": "us-east4", "ms": 1200},
            "data": {"output": "Key points", "tokens": 321}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let kagi = client_for(&server);
    let response = kagi
        .summarize(
            "https://example.com/article",
            SummarizeOptions::new()
                .engine(Engine::Agnes)
                .summary_type(SummaryType::Takeaway),
            HttpMethod::Post,
        )
        .await
        .unwrap();

    assert_eq!(response.data.output, "Key points");
    assert_eq!(response.data.tokens, 321);
    assert_eq!(response.meta.node.as_deref(), Some("us-east4"));

    let received = server.received_requests().await.unwrap();
    assert!(received[0].url.query().is_none());
}

#[test_log::test(tokio::test)]
async fn test_summarize_get_sends_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v0/summarize"))
        .and(query_param("text", "hello world"))
        .and(query_param("cache", "false"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {},
            "data": {"output": "Greeting", "tokens": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let kagi = client_for(&server);
    let response = kagi
        .summarize("hello world", SummarizeOptions::new().cache(false), HttpMethod::Get)
        .await
        .unwrap();
    assert_eq!(response.data.output, "Greeting");

    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
    assert!(!received[0].url.query().unwrap_or_default().contains("url="));
}

#[test_log::test(tokio::test)]
async fn test_search_merges_defaults_and_options() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v0/search"))
        .and(query_param("q", "steve jobs"))
        .and(query_param("limit", "2"))
        .and(header("Authorization", "Bot test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"id": "s1", "ms": 40, "api_balance": 9.5},
            "data": [
                {"t": 0, "rank": 1, "url": "https://a.example", "title": "A", "snippet": "a",
                 "published": "2024-01-01T00:00:00Z",
                 "thumbnail": {"url": "https://a.example/t.png", "height": 10, "width": 20}},
                {"t": 1, "list": ["steve wozniak", "apple"]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = Settings::new(TOKEN)
        .with_base_url(format!("{}/api", server.uri()))
        .with_search_defaults(SearchOptions::new().limit(10));
    let kagi = Kagi::new(settings).unwrap();

    let response = kagi
        .search("steve jobs", SearchOptions::new().limit(2))
        .await
        .unwrap();

    assert_eq!(response.meta.api_balance, Some(9.5));
    assert_eq!(response.data[0].kind(), SearchObjectKind::Result);
    assert_eq!(
        response.data[0].thumbnail.as_ref().map(|t| t.url.as_str()),
        Some("https://a.example/t.png")
    );
    assert_eq!(response.data[1].kind(), SearchObjectKind::Related);
}

#[test_log::test(tokio::test)]
async fn test_fastgpt_posts_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/fastgpt"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"query": "Python 3.11", "web_search": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"id": "f1"},
            "data": {
                "output": "Python 3.11 is faster [1].",
                "tokens": 757,
                "references": [
                    {"title": "What's New", "snippet": "Faster CPython", "url": "https://docs.python.org"}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let kagi = client_for(&server);
    let response = kagi
        .fastgpt("Python 3.11", FastGptOptions::new().web_search(true))
        .await
        .unwrap();

    assert_eq!(response.data.tokens, 757);
    assert_eq!(response.data.references[0].title, "What's New");
}

#[test_log::test(tokio::test)]
async fn test_enrich_matches_direct_calls() {
    let server = MockServer::start().await;
    for kind in ["web", "news"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/v0/enrich/{kind}")))
            .and(query_param("q", "small web"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meta": {},
                "data": [{"t": 0, "url": "https://blog.example", "title": kind}]
            })))
            .expect(2)
            .mount(&server)
            .await;
    }

    let kagi = client_for(&server);
    let web = kagi.enrich("small web", EnrichType::Web).await.unwrap();
    let web_direct = kagi.enrich_web("small web").await.unwrap();
    let news = kagi.enrich("small web", EnrichType::News).await.unwrap();
    let news_direct = kagi.enrich_news("small web").await.unwrap();

    assert_eq!(web, web_direct);
    assert_eq!(news, news_direct);
    assert_eq!(web.data[0].title.as_deref(), Some("web"));
    assert_eq!(news.data[0].title.as_deref(), Some("news"));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 4);
    assert_eq!(received[0].url, received[1].url);
    assert_eq!(received[2].url, received[3].url);
}

#[test_log::test(tokio::test)]
async fn test_not_found_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let kagi = client_for(&server);
    let error = kagi
        .search("missing", SearchOptions::default())
        .await
        .unwrap_err();

    match &error {
        Error::Transport { url, response, .. } => {
            assert_eq!(url, &format!("{}/api/v0/search?q=missing", server.uri()));
            assert_eq!(response.status, 404);
        }
        other => panic!("Expected Transport error, got: {other:?}"),
    }
}

#[test_log::test(tokio::test)]
async fn test_error_envelope_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v0/fastgpt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"id": "e1"},
            "data": null,
            "error": [{"code": 1, "msg": "Insufficient credit", "ref": null}]
        })))
        .mount(&server)
        .await;

    let kagi = client_for(&server);
    let error = kagi
        .fastgpt("anything", FastGptOptions::default())
        .await
        .unwrap_err();

    let descriptor = error.api_error().expect("Expected Api error");
    assert_eq!(descriptor.code(), Some(1));
    assert_eq!(descriptor.message(), Some("Insufficient credit"));
    assert_eq!(error.status(), Some(200));
}

#[test_log::test(tokio::test)]
async fn test_non_json_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let kagi = client_for(&server);
    let error = kagi.enrich_news("x").await.unwrap_err();
    assert!(matches!(error, Error::Parse { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let settings = Settings::new(TOKEN).with_base_url("http://127.0.0.1:1/api");
    let kagi = Kagi::new(settings).unwrap();

    let error = kagi.enrich_web("x").await.unwrap_err();
    assert!(matches!(error, Error::Network { .. }));
}
