//! HTTP transport used by the client
//!
//! [`Transport`] is the seam between request construction and the network.
//! [`HttpTransport`] is the reqwest-backed implementation used by default;
//! tests substitute their own to observe or script gateway traffic.

use crate::{Result, ZarinpalError};
use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Issues a single JSON POST and returns the raw response body
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with `Content-Type: application/json`.
    ///
    /// The HTTP status is not inspected; whatever body comes back is returned.
    async fn post(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>>;
}

/// reqwest-backed [`Transport`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport, applying `timeout` when given
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut client_builder = Client::builder();

        if let Some(timeout) = timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| ZarinpalError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        debug!(url, bytes = body.len(), "sending gateway request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        debug!(http_status = %response.status(), "received gateway response");

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/echo")
            .match_header("content-type", "application/json")
            .match_body(Matcher::JsonString(r#"{"merchant_id":"abc"}"#.to_string()))
            .with_status(200)
            .with_body(r#"{"data":{"code":100}}"#)
            .create_async()
            .await;

        let transport = HttpTransport::new(None).unwrap();
        let body = transport
            .post(
                &format!("{}/echo", server.url()),
                br#"{"merchant_id":"abc"}"#.to_vec(),
            )
            .await
            .unwrap();

        assert_eq!(body, br#"{"data":{"code":100}}"#.to_vec());
    }

    #[tokio::test]
    async fn test_post_ignores_http_status() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/rejected")
            .with_status(422)
            .with_body(r#"{"data":[],"errors":{"code":-9}}"#)
            .create_async()
            .await;

        let transport = HttpTransport::new(None).unwrap();
        let body = transport
            .post(&format!("{}/rejected", server.url()), b"{}".to_vec())
            .await
            .unwrap();

        assert_eq!(body, br#"{"data":[],"errors":{"code":-9}}"#.to_vec());
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let transport = HttpTransport::new(Some(Duration::from_millis(200))).unwrap();
        let result = transport
            .post("http://127.0.0.1:1/request.json", b"{}".to_vec())
            .await;

        assert!(matches!(result, Err(ZarinpalError::Transport(_))));
    }
}
