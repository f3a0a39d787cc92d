//! Client configuration shared by the async and blocking clients.

use std::collections::BTreeMap;
use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://www.futbin.org/futbin/api";

/// Host the upstream expects in `Referer`/`Origin`.
pub const FUTBIN_WEB_BASE: &str = "https://www.futbin.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub proxy: Option<String>,
    /// Sent on every request; overrides a default header of the same name.
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy: None,
            headers: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Reads `FUTBIN_BASE_URL`, `FUTBIN_TIMEOUT` (seconds) and `FUTBIN_PROXY`.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("FUTBIN_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(raw) = env::var("FUTBIN_TIMEOUT") {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::EnvVar {
                var: "FUTBIN_TIMEOUT",
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(proxy) = env::var("FUTBIN_PROXY") {
            if !proxy.is_empty() {
                config.proxy = Some(proxy);
            }
        }

        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_timeout_secs(self, secs: u64) -> Self {
        self.with_timeout(Duration::from_secs(secs))
    }

    #[must_use]
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::BaseUrl(self.base_url.clone()));
        }
        Ok(())
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.proxy.is_none());
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://127.0.0.1:8080/")
            .with_timeout_secs(5)
            .with_proxy("http://proxy.local:3128")
            .with_header("X-Trace", "abc");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.proxy.as_deref(), Some("http://proxy.local:3128"));
        assert_eq!(config.headers.get("X-Trace").map(String::as_str), Some("abc"));
        assert_eq!(
            config.url("/getPopularPlayers"),
            "http://127.0.0.1:8080/getPopularPlayers"
        );
    }

    // The only test touching FUTBIN_* variables, so it can own them.
    #[test]
    fn test_config_from_env() {
        const VARS: [&str; 3] = ["FUTBIN_BASE_URL", "FUTBIN_TIMEOUT", "FUTBIN_PROXY"];
        for var in VARS {
            env::remove_var(var);
        }
        assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());

        env::set_var("FUTBIN_BASE_URL", "http://127.0.0.1:9000/api");
        env::set_var("FUTBIN_TIMEOUT", " 7 ");
        env::set_var("FUTBIN_PROXY", "http://proxy.local:3128");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.proxy.as_deref(), Some("http://proxy.local:3128"));

        env::set_var("FUTBIN_PROXY", "");
        assert_eq!(ClientConfig::from_env().unwrap().proxy, None);

        env::set_var("FUTBIN_TIMEOUT", "soon");
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ConfigError::EnvVar { var: "FUTBIN_TIMEOUT", .. })
        ));

        env::set_var("FUTBIN_TIMEOUT", "7");
        env::set_var("FUTBIN_BASE_URL", "futbin.org");
        assert!(matches!(ClientConfig::from_env(), Err(ConfigError::BaseUrl(_))));

        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_config_validate() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(matches!(
            ClientConfig::new("www.futbin.org").validate(),
            Err(ConfigError::BaseUrl(_))
        ));
    }
}
