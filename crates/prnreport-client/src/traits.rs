//! Transport trait

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Something that can execute a JSON-RPC method call
///
/// Implemented by [`crate::RpcClient`] over HTTPS; tests provide in-memory
/// implementations.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Call `method` with `params`, returning the `result` member
    async fn call(&self, method: &str, params: Value, auth: Option<&str>) -> Result<Value>;
}
