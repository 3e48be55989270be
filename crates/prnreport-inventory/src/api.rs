//! Monitoring API boundary
//!
//! Every remote failure is caught here: transport errors, JSON-RPC error
//! objects, missing results and undecodable payloads all become `None` with a
//! logged diagnostic. Callers decide whether absence is fatal.

use std::sync::Arc;

use prnreport_client::RpcTransport;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::request::ApiRequest;

/// Typed access to the monitoring API over any [`RpcTransport`]
#[derive(Clone)]
pub struct MonitoringApi {
    transport: Arc<dyn RpcTransport>,
}

impl MonitoringApi {
    /// Wrap a transport
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        Self { transport }
    }

    /// Execute a request and decode its result
    ///
    /// # Returns
    /// * `Some(T)` - decoded `result` member
    /// * `None` - the call failed or the payload did not decode
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        auth: Option<&str>,
    ) -> Option<T> {
        let method = request.method();

        let value = match self.transport.call(method, request.build(), auth).await {
            Ok(value) => value,
            Err(e) => {
                warn!(method, error = %e, "request failed");
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(decoded) => {
                debug!(method, "request completed");
                Some(decoded)
            }
            Err(e) => {
                warn!(method, error = %e, "malformed result");
                None
            }
        }
    }
}
