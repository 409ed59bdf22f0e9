mod harness;

use harness::config::ConfigBuilder;
use harness::mock_gemini::{MockGemini, Reply};
use harness::server::TestServer;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let mock = MockGemini::start(Reply::text("unused")).await.unwrap();
    let config = ConfigBuilder::new().with_gemini(&mock.base_url()).build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 200);

    let body = resp.text().await.unwrap();
    assert_eq!(body, "ok");
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn health_endpoint_disabled() {
    let mock = MockGemini::start(Reply::text("unused")).await.unwrap();
    let config = ConfigBuilder::new()
        .with_gemini(&mock.base_url())
        .without_health()
        .build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn health_does_not_need_an_api_key() {
    let config = ConfigBuilder::new().without_api_key().build();

    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
}
