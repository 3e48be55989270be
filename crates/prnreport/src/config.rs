//! Configuration loading and types

use std::path::{Path, PathBuf};
use std::time::Duration;

use prnreport_client::ClientConfig;
use prnreport_inventory::Credentials;
use serde::{Deserialize, Serialize};

/// Top-level configuration for a report run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Monitoring API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            api: ApiConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Monitoring API settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// JSON-RPC endpoint URL
    #[serde(default)]
    pub url: String,
    /// Login name
    #[serde(default = "default_user")]
    pub user: String,
    /// Login password
    #[serde(default)]
    pub password: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Skip TLS certificate verification
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            user: default_user(),
            password: String::new(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: default_accept_invalid_certs(),
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory the workbook is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Column width cap in characters
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            max_column_width: default_max_column_width(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_user() -> String {
    "Admin".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_accept_invalid_certs() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_column_width() -> usize {
    prnreport_report::layout::DEFAULT_MAX_COLUMN_WIDTH
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Find the config file to use
    ///
    /// `PRNREPORT_CONFIG` wins, then the first existing file among the
    /// working directory, `/etc/prnreport` and the user config directory.
    #[must_use]
    pub fn locate() -> Option<PathBuf> {
        // Check environment variable
        if let Ok(path) = std::env::var("PRNREPORT_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // Try common paths
        let paths = [
            Some(PathBuf::from("prnreport.toml")),
            Some(PathBuf::from("/etc/prnreport/prnreport.toml")),
            dirs::config_dir().map(|p| p.join("prnreport/prnreport.toml")),
        ];

        paths.into_iter().flatten().find(|path| path.is_file())
    }

    /// Apply `PRNREPORT_URL`, `PRNREPORT_USER` and `PRNREPORT_PASSWORD`
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("PRNREPORT_URL") {
            self.api.url = url;
        }
        if let Some(user) = lookup("PRNREPORT_USER") {
            self.api.user = user;
        }
        if let Some(password) = lookup("PRNREPORT_PASSWORD") {
            self.api.password = password;
        }
    }

    /// Check settings that have no usable default
    ///
    /// # Errors
    /// Returns error if the endpoint URL or user is missing
    pub fn validate(&self) -> eyre::Result<()> {
        if self.api.url.trim().is_empty() {
            eyre::bail!("api.url is not set (config file or PRNREPORT_URL)");
        }
        if self.api.user.trim().is_empty() {
            eyre::bail!("api.user is empty");
        }
        Ok(())
    }

    /// Transport settings for the RPC client
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.url.clone())
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
            .with_accept_invalid_certs(self.api.accept_invalid_certs)
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api.user.clone(), self.api.password.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.accept_invalid_certs);
        assert_eq!(config.report.max_column_width, 50);
        assert_eq!(config.report.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            log_level = "debug"

            [api]
            url = "https://zabbix.example.org/api_jsonrpc.php"
            user = "report"
            password = "secret"
            timeout_secs = 10

            [report]
            output_dir = "/srv/reports"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api.user, "report");
        assert_eq!(config.api.timeout_secs, 10);
        assert!(config.api.accept_invalid_certs);
        assert_eq!(config.report.output_dir, PathBuf::from("/srv/reports"));
        assert_eq!(config.report.max_column_width, 50);

        let client = config.client_config();
        assert_eq!(client.timeout, Duration::from_secs(10));
        assert_eq!(client.url, "https://zabbix.example.org/api_jsonrpc.php");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.user, "Admin");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_overrides() {
        let env = HashMap::from([
            ("PRNREPORT_URL", "https://override/api_jsonrpc.php"),
            ("PRNREPORT_PASSWORD", "from-env"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|name| env.get(name).map(|v| (*v).to_string()));

        assert_eq!(config.api.url, "https://override/api_jsonrpc.php");
        assert_eq!(config.api.password, "from-env");
        assert_eq!(config.api.user, "Admin");
    }

    #[test]
    fn test_validate_requires_url() {
        let mut config = Config::default();
        assert!(config.validate().is_err());

        config.api.url = "https://zabbix.local/api_jsonrpc.php".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_hides_password() {
        let mut config = Config::default();
        config.api.password = "hunter2".into();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
