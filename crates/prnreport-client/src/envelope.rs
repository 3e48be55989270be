//! JSON-RPC 2.0 request and response envelopes

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Outgoing JSON-RPC request
///
/// `auth` is serialized even when absent, the API expects an explicit
/// `null` on `user.login`.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: Value,
    pub id: u64,
    pub auth: Option<&'a str>,
}

impl<'a> RpcRequest<'a> {
    #[must_use]
    pub fn new(method: &'a str, params: Value, id: u64, auth: Option<&'a str>) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id,
            auth,
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
}

/// Incoming JSON-RPC response
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// Extract the `result` member
    ///
    /// # Errors
    /// Returns [`ClientError::Rpc`] when the server answered with an error
    /// object and [`ClientError::MissingResult`] when neither member is set.
    pub fn into_result(self) -> Result<Value> {
        if let Some(err) = self.error {
            return Err(ClientError::Rpc {
                code: err.code,
                message: err.message,
                data: err.data.unwrap_or_default(),
            });
        }

        match self.result {
            Some(Value::Null) | None => Err(ClientError::MissingResult),
            Some(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_null_auth() {
        let request = RpcRequest::new("user.login", json!({"user": "Admin"}), 1, None);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "user.login");
        assert_eq!(value["id"], 1);
        assert!(value["auth"].is_null());
        assert!(value.as_object().unwrap().contains_key("auth"));
    }

    #[test]
    fn test_request_carries_token() {
        let request = RpcRequest::new("host.get", json!({}), 7, Some("abc"));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["auth"], "abc");
    }

    #[test]
    fn test_response_result() {
        let response: RpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "result": "token", "id": 1}))
                .unwrap();
        assert_eq!(response.into_result().unwrap(), json!("token"));
    }

    #[test]
    fn test_response_error_object() {
        let response: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "error": {
                "code": -32602,
                "message": "Invalid params.",
                "data": "Login name or password is incorrect."
            },
            "id": 1
        }))
        .unwrap();

        match response.into_result() {
            Err(ClientError::Rpc { code, data, .. }) => {
                assert_eq!(code, -32602);
                assert!(data.contains("incorrect"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_response_missing_result() {
        let response: RpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1})).unwrap();
        assert!(matches!(
            response.into_result(),
            Err(ClientError::MissingResult)
        ));
    }
}
