use std::time::Duration;

use reqwest::{
    Client,
    header::{CONNECTION, HeaderMap, HeaderValue},
};

/// HTTP client shared by every upstream call
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized
pub fn http_client(timeout: Duration) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
}
