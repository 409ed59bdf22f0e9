mod harness;

use harness::config::ConfigBuilder;
use harness::mock_gemini::{MockGemini, Reply};
use harness::server::TestServer;
use maggid_config::{AnyOrArray, CorsConfig};
use serde_json::json;

async fn server_with(reply: Reply) -> (MockGemini, TestServer) {
    let mock = MockGemini::start(reply).await.unwrap();
    let config = ConfigBuilder::new().with_gemini(&mock.base_url()).build();
    let server = TestServer::start(config).await.unwrap();
    (mock, server)
}

// -- Method handling --

#[tokio::test]
async fn options_returns_no_content_on_every_route() {
    let (mock, server) = server_with(Reply::text("unused")).await;

    for route in ["rabbi", "daily", "translate", "recommend", "tts"] {
        let resp = server
            .client()
            .request(reqwest::Method::OPTIONS, server.url(&format!("/api/{route}")))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 204, "route {route}");
    }
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let (mock, server) = server_with(Reply::text("unused")).await;

    let resp = server.client().get(server.url("/api/daily")).send().await.unwrap();

    assert_eq!(resp.status(), 405);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Method not allowed" }));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn custom_route_prefix() {
    let mock = MockGemini::start(Reply::text("{\"english\":\"peace\"}")).await.unwrap();
    let config = ConfigBuilder::new()
        .with_gemini(&mock.base_url())
        .with_route_prefix("/.netlify/functions")
        .build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .post_json("/.netlify/functions/translate", &json!({ "text": "shalom" }))
        .await;
    assert_eq!(resp.status(), 200);

    let resp = server.post_json("/api/translate", &json!({ "text": "shalom" })).await;
    assert_eq!(resp.status(), 404);
}

// -- Body handling --

#[tokio::test]
async fn non_json_content_type_is_rejected() {
    let (mock, server) = server_with(Reply::text("unused")).await;

    let resp = server
        .client()
        .post(server.url("/api/daily"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("type=verse")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 415);
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (_mock, server) = server_with(Reply::text("unused")).await;

    let resp = server
        .client()
        .post(server.url("/api/translate"))
        .header("content-type", "application/json")
        .body("{\"text\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Failed to parse request body"));
}

#[tokio::test]
async fn empty_body_counts_as_empty_object() {
    let (_mock, server) = server_with(Reply::text("unused")).await;

    let resp = server
        .client()
        .post(server.url("/api/daily"))
        .header("content-type", "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid type. Use: blessing, verse, or pathway" }));
}

// -- CORS --

#[tokio::test]
async fn default_cors_allows_any_origin() {
    let (_mock, server) = server_with(Reply::text("{\"hebrew\":\"Modeh ani\"}")).await;

    let resp = server
        .client()
        .post(server.url("/api/daily"))
        .header("origin", "https://maggid.example")
        .json(&json!({ "type": "blessing" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn default_cors_preflight() {
    let (_mock, server) = server_with(Reply::text("unused")).await;

    let resp = server
        .client()
        .request(reqwest::Method::OPTIONS, server.url("/api/rabbi"))
        .header("origin", "https://maggid.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());

    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase()
    };
    assert_eq!(header("access-control-allow-origin"), "*");
    assert!(header("access-control-allow-methods").contains("post"));
    assert!(header("access-control-allow-headers").contains("content-type"));
    assert!(header("access-control-allow-headers").contains("authorization"));
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let mock = MockGemini::start(Reply::text("unused")).await.unwrap();
    let config = ConfigBuilder::new()
        .with_gemini(&mock.base_url())
        .with_cors(CorsConfig {
            origins: AnyOrArray::List(vec!["http://example.com".to_owned()]),
            ..CorsConfig::default()
        })
        .build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .get(server.url("/health"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://example.com")
    );

    let resp = server
        .client()
        .get(server.url("/health"))
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();

    assert!(resp.headers().get("access-control-allow-origin").is_none());
}
