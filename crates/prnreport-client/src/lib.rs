//! prnreport-client: JSON-RPC client for the monitoring API
//!
//! Wraps the remote endpoint behind the [`RpcTransport`] trait. The HTTPS
//! implementation owns the transport concerns: TLS trust override, request
//! timeout and normalization of failures into [`ClientError`].
//!
//! # Example
//!
//! ```no_run
//! use prnreport_client::{ClientConfig, RpcClient, RpcTransport};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RpcClient::new(&ClientConfig::new("https://zabbix.local/api_jsonrpc.php"))?;
//! let token = client
//!     .call("user.login", json!({"user": "Admin", "password": "zabbix"}), None)
//!     .await?;
//! println!("token: {token}");
//! # Ok(())
//! # }
//! ```

pub mod envelope;
pub mod error;
pub mod http;
pub mod traits;

pub use error::{ClientError, Result};
pub use http::{ClientConfig, RpcClient};
pub use traits::RpcTransport;
