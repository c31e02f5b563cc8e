//! Process configuration, read once from the environment at startup.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::gamma::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GAMMA_API_KEY environment variable is required")]
    MissingApiKey,
    #[error("invalid value '{value}' for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Which transport the binary serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Stdio,
    Http,
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            other => Err(format!("expected 'stdio' or 'http', got '{other}'")),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub transport: Transport,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("transport", &self.transport)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = var("GAMMA_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let base_url = var("GAMMA_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                name: "GAMMA_API_BASE_URL",
                value: base_url,
                reason: "must be an http(s) URL".to_string(),
            });
        }

        let transport = parse_or("MCP_TRANSPORT", var("MCP_TRANSPORT"), Transport::Stdio)?;
        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;
        let timeout_secs = parse_or(
            "GAMMA_HTTP_TIMEOUT_SECS",
            var("GAMMA_HTTP_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT.as_secs(),
        )?;

        Ok(Self {
            api_key,
            base_url,
            transport,
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// A transport named on the command line wins over `MCP_TRANSPORT`.
    pub fn with_transport_arg(mut self, arg: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = arg {
            self.transport = parse_or("transport argument", Some(raw.to_string()), self.transport)?;
        }
        Ok(self)
    }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|err: T::Err| ConfigError::Invalid {
            name,
            reason: err.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));

        let err = Config::from_lookup(lookup(&[("GAMMA_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("GAMMA_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.transport, Transport::Stdio);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GAMMA_API_KEY", "sk-test"),
            ("GAMMA_API_BASE_URL", "http://localhost:8081/v1.0"),
            ("MCP_TRANSPORT", "HTTP"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("GAMMA_HTTP_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8081/v1.0");
        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_invalid_port_names_variable() {
        let err = Config::from_lookup(lookup(&[("GAMMA_API_KEY", "k"), ("PORT", "eighty")]))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("PORT"));
        assert!(message.contains("eighty"));
    }

    #[test]
    fn test_transport_argument_overrides_env() {
        let config = Config::from_lookup(lookup(&[("GAMMA_API_KEY", "k")]))
            .unwrap()
            .with_transport_arg(Some("http"))
            .unwrap();
        assert_eq!(config.transport, Transport::Http);

        let err = Config::from_lookup(lookup(&[("GAMMA_API_KEY", "k")]))
            .unwrap()
            .with_transport_arg(Some("sse"))
            .unwrap_err();
        assert!(err.to_string().contains("sse"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::from_lookup(lookup(&[("GAMMA_API_KEY", "sk-live-123")])).unwrap();
        assert!(!format!("{config:?}").contains("sk-live-123"));
    }
}
