//! Dashboard API Client
//!
//! A client for the fund's reporting server, fetching dashboard snapshots and health status.

use crate::api::DashboardApi;
use crate::api::error::FetchError;
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::snapshot::{DashboardSnapshot, HealthStatus};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("zakat-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    environment: Environment,
}

impl DashboardClient {
    /// Build a client with the connect and request timeouts applied.
    ///
    /// # Errors
    /// Fails if the TLS backend cannot be initialised.
    pub fn new(environment: Environment) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, FetchError> {
        if !response.status().is_success() {
            return Err(FetchError::from_status(response.status()));
        }
        Ok(response)
    }

    async fn get_bytes(&self, endpoint: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header(http::TUNNEL_WARNING_HEADER, http::TUNNEL_WARNING_VALUE)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let bytes = self.get_bytes(endpoint).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Turn a successful `/dashboard` body into a snapshot, honouring the `error` field.
    pub fn decode_snapshot(bytes: &[u8]) -> Result<DashboardSnapshot, FetchError> {
        let snapshot: DashboardSnapshot = serde_json::from_slice(bytes)?;
        if let Some(message) = snapshot.server_error() {
            return Err(FetchError::Server(message.to_string()));
        }
        Ok(snapshot)
    }
}

#[async_trait::async_trait]
impl DashboardApi for DashboardClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot, FetchError> {
        let bytes = self.get_bytes("dashboard").await?;
        Self::decode_snapshot(&bytes)
    }

    async fn health(&self) -> Result<HealthStatus, FetchError> {
        self.get_json("health").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_without_double_slash() {
        let client = DashboardClient::new(Environment::Custom {
            api_url: "http://127.0.0.1:5000/".to_string(),
        })
        .unwrap();
        assert_eq!(client.build_url("/dashboard"), "http://127.0.0.1:5000/dashboard");
        assert_eq!(client.build_url("health"), "http://127.0.0.1:5000/health");
    }

    #[test]
    fn test_decode_snapshot_success() {
        let body = br#"{"total_collections": 10, "roi": 1, "total_expenses": 2, "account_balance": 3}"#;
        let snapshot = DashboardClient::decode_snapshot(body).unwrap();
        assert_eq!(snapshot.total_collections.value(), 10.0);
    }

    #[test]
    // A body with an `error` field fails with that message.
    fn test_decode_snapshot_server_error() {
        let body = br#"{"error": "Sheet not found: 'Summary'"}"#;
        let err = DashboardClient::decode_snapshot(body).unwrap_err();
        assert!(matches!(err, FetchError::Server(_)));
        assert_eq!(err.to_string(), "Sheet not found: 'Summary'");
    }

    #[test]
    fn test_decode_snapshot_rejects_non_json() {
        let err = DashboardClient::decode_snapshot(b"<html>tunnel warning</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    /// Serve a single canned HTTP response on a local port. The handle yields
    /// the raw request head, lowercased.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (DashboardClient, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).to_lowercase()
        });

        let client = DashboardClient::new(Environment::Custom {
            api_url: format!("http://{}", addr),
        })
        .unwrap();
        (client, handle)
    }

    #[tokio::test]
    async fn test_fetch_snapshot_sends_tunnel_header() {
        let (client, server) = serve_once(
            "200 OK",
            r#"{"total_collections": 10, "roi": 1, "total_expenses": 2, "account_balance": 3}"#,
        )
        .await;

        let snapshot = client.fetch_snapshot().await.unwrap();
        assert_eq!(snapshot.total_collections.value(), 10.0);

        let request = server.await.unwrap();
        assert!(request.starts_with("get /dashboard "));
        assert!(request.contains("ngrok-skip-browser-warning: true"));
        assert!(request.contains("user-agent: zakat-dashboard/"));
    }

    #[tokio::test]
    // The status code wins over an `error` message in the body of a failed response.
    async fn test_fetch_snapshot_non_success_status_wins_over_body() {
        let (client, server) =
            serve_once("500 Internal Server Error", r#"{"error":"x"}"#).await;

        let err = client.fetch_snapshot().await.unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 500 }));
        assert_eq!(err.to_string(), "HTTP 500");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_health_over_http() {
        let (client, server) = serve_once(
            "200 OK",
            r#"{"status": "unhealthy", "file_exists": false, "cache_active": false}"#,
        )
        .await;

        let health = client.health().await.unwrap();
        assert!(!health.is_healthy());
        assert!(server.await.unwrap().starts_with("get /health "));
    }
}
