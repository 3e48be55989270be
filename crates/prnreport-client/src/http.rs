//! HTTPS transport for the monitoring API

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::envelope::{RpcRequest, RpcResponse};
use crate::error::{ClientError, Result};
use crate::traits::RpcTransport;

/// Content type the JSON-RPC endpoint expects
pub const JSON_RPC_CONTENT_TYPE: &str = "application/json-rpc";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport settings for [`RpcClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full endpoint URL, e.g. `https://zabbix.example.org/api_jsonrpc.php`
    pub url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Create a config with the default timeout and TLS verification disabled
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: true,
        }
    }

    /// Set request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Toggle TLS certificate verification
    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

/// JSON-RPC client for the monitoring API
///
/// Stateless apart from the request id counter: the session token is passed
/// in on every call.
#[derive(Debug)]
pub struct RpcClient {
    client: Client,
    endpoint: Url,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a new client
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    ///
    /// # Example
    /// ```no_run
    /// use prnreport_client::{ClientConfig, RpcClient};
    ///
    /// let client = RpcClient::new(&ClientConfig::new("https://zabbix.local/api_jsonrpc.php"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.timeout)
            .build()?;
        Self::with_client(&config.url, client)
    }

    /// Create a new client with custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the URL is invalid.
    pub fn with_client(url: impl AsRef<str>, client: Client) -> Result<Self> {
        let endpoint = Url::parse(url.as_ref())?;
        Ok(Self {
            client,
            endpoint,
            next_id: AtomicU64::new(1),
        })
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl RpcTransport for RpcClient {
    async fn call(&self, method: &str, params: Value, auth: Option<&str>) -> Result<Value> {
        let id = self.next_id();
        debug!(method, id, "rpc call");

        let body = serde_json::to_vec(&RpcRequest::new(method, params, id, auth))?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_RPC_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        let envelope: RpcResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                ClientError::InvalidResponse(e.to_string())
            } else {
                map_send_error(e)
            }
        })?;

        envelope.into_result()
    }
}

fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RpcClient::new(&ClientConfig::new("https://zabbix.local/api_jsonrpc.php"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = RpcClient::new(&ClientConfig::new("not a url"));
        assert!(matches!(client, Err(ClientError::Url(_))));
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("https://zabbix.local/api_jsonrpc.php");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.accept_invalid_certs);

        let config = config
            .with_timeout(Duration::from_secs(5))
            .with_accept_invalid_certs(false);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_request_ids_increment() {
        let client =
            RpcClient::new(&ClientConfig::new("https://zabbix.local/api_jsonrpc.php")).unwrap();
        assert_eq!(client.next_id(), 1);
        assert_eq!(client.next_id(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let config = ClientConfig::new("http://127.0.0.1:9/api_jsonrpc.php")
            .with_timeout(Duration::from_secs(2));
        let client = RpcClient::new(&config).unwrap();

        let err = client
            .call("hostgroup.get", serde_json::json!({}), Some("t"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Http(_) | ClientError::Timeout));
    }
}
