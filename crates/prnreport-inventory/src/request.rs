//! Parameter builder for monitoring API methods

use serde_json::{Map, Value};

/// API method call under construction
///
/// Provides type-safe construction of the `params` object sent with a
/// JSON-RPC method.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// JSON-RPC method name
    method: &'static str,
    /// `output` field list
    output: Option<Vec<String>>,
    /// `filter` object, exact-match semantics on the server
    filter: Map<String, Value>,
    /// Remaining top-level parameters
    params: Map<String, Value>,
}

impl ApiRequest {
    /// Create a new request for a method
    #[must_use]
    pub fn new(method: &'static str) -> Self {
        Self {
            method,
            output: None,
            filter: Map::new(),
            params: Map::new(),
        }
    }

    /// Restrict returned fields
    #[must_use]
    pub fn output(mut self, fields: &[&str]) -> Self {
        self.output = Some(fields.iter().map(|f| (*f).to_string()).collect());
        self
    }

    /// Add an exact-match filter
    #[must_use]
    pub fn filter(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filter.insert(field.to_string(), value.into());
        self
    }

    /// Add a top-level parameter
    #[must_use]
    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    /// Method name
    #[must_use]
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Build the `params` object
    #[must_use]
    pub fn build(&self) -> Value {
        let mut params = self.params.clone();

        if let Some(ref output) = self.output {
            params.insert("output".to_string(), Value::from(output.clone()));
        }

        if !self.filter.is_empty() {
            params.insert("filter".to_string(), Value::Object(self.filter.clone()));
        }

        Value::Object(params)
    }
}

/// Predefined requests used by the collection run
pub mod requests {
    use super::ApiRequest;

    /// `user.login` with plain credentials
    #[must_use]
    pub fn login(user: &str, password: &str) -> ApiRequest {
        ApiRequest::new("user.login")
            .param("user", user)
            .param("password", password)
    }

    /// Host group lookup by exact name
    #[must_use]
    pub fn host_group_by_name(name: &str) -> ApiRequest {
        ApiRequest::new("hostgroup.get").filter("name", name)
    }

    /// Active (status 0) hosts of a group with their interface IPs
    #[must_use]
    pub fn active_hosts(group_id: &str) -> ApiRequest {
        ApiRequest::new("host.get")
            .param("groupids", group_id)
            .param("selectInterfaces", vec!["ip"])
            .output(&["hostid", "host", "name"])
            .filter("status", "0")
    }

    /// Latest values of exact keys on a set of hosts
    #[must_use]
    pub fn items(host_ids: &[String], keys: &[&str]) -> ApiRequest {
        ApiRequest::new("item.get")
            .param("hostids", host_ids.to_vec())
            .output(&["lastvalue", "key_", "hostid"])
            .filter("key_", keys.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::new("host.get")
            .output(&["hostid"])
            .filter("status", "0")
            .param("groupids", "7");

        assert_eq!(request.method(), "host.get");
        assert_eq!(
            request.build(),
            json!({"groupids": "7", "output": ["hostid"], "filter": {"status": "0"}})
        );
    }

    #[test]
    fn test_empty_filter_omitted() {
        let params = ApiRequest::new("hostgroup.get").build();
        assert_eq!(params, json!({}));
    }

    #[test]
    fn test_login_params() {
        let request = requests::login("Admin", "secret");
        assert_eq!(request.method(), "user.login");
        assert_eq!(
            request.build(),
            json!({"user": "Admin", "password": "secret"})
        );
    }

    #[test]
    fn test_host_group_by_name() {
        let params = requests::host_group_by_name("_Printers").build();
        assert_eq!(params, json!({"filter": {"name": "_Printers"}}));
    }

    #[test]
    fn test_active_hosts() {
        let params = requests::active_hosts("15").build();
        assert_eq!(
            params,
            json!({
                "groupids": "15",
                "output": ["hostid", "host", "name"],
                "selectInterfaces": ["ip"],
                "filter": {"status": "0"}
            })
        );
    }

    #[test]
    fn test_items() {
        let hosts = vec!["10101".to_string(), "10102".to_string()];
        let params = requests::items(&hosts, &["sn.device", "a4.device"]).build();
        assert_eq!(
            params,
            json!({
                "hostids": ["10101", "10102"],
                "output": ["lastvalue", "key_", "hostid"],
                "filter": {"key_": ["sn.device", "a4.device"]}
            })
        );
    }
}
