use crate::{env_or_default, env_parse_or, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Server configuration for the HTTP function host
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum number of requests processed at the same time
    pub max_concurrent_requests: usize,
    /// Seconds granted to cleanup tasks on shutdown
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            ..Self::default()
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to Ipv4Addr::UNSPECIFIED (0.0.0.0 - all interfaces)
    /// - PORT: defaults to 8080
    /// - MAX_CONCURRENT_REQUESTS: defaults to 10
    /// - SHUTDOWN_TIMEOUT_SECS: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", "8080").parse().map_err(|e| {
            ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            }
        })?;
        let max_concurrent_requests = env_parse_or("MAX_CONCURRENT_REQUESTS", 10usize)?;
        if max_concurrent_requests == 0 {
            return Err(ConfigError::ParseError {
                key: "MAX_CONCURRENT_REQUESTS".to_string(),
                details: "must be greater than 0".to_string(),
            });
        }
        let shutdown_timeout_secs = env_parse_or("SHUTDOWN_TIMEOUT_SECS", 30u64)?;

        Ok(Self {
            host,
            port,
            max_concurrent_requests,
            shutdown_timeout_secs,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
            max_concurrent_requests: 10,
            shutdown_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "HOST",
        "PORT",
        "MAX_CONCURRENT_REQUESTS",
        "SHUTDOWN_TIMEOUT_SECS",
    ];

    #[test]
    fn test_server_config_from_env_with_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8080);
            assert_eq!(config.max_concurrent_requests, 10);
            assert_eq!(config.shutdown_timeout_secs, 30);
            assert_eq!(config.address(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn test_server_config_from_env_with_custom_values() {
        temp_env::with_vars(
            [
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("3000")),
                ("MAX_CONCURRENT_REQUESTS", Some("64")),
                ("SHUTDOWN_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:3000");
                assert_eq!(config.max_concurrent_requests, 64);
                assert_eq!(config.shutdown_timeout_secs, 5);
            },
        );
    }

    #[test]
    fn test_server_config_from_env_invalid_port() {
        temp_env::with_var("PORT", Some("99999"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }

    #[test]
    fn test_server_config_rejects_zero_concurrency() {
        temp_env::with_vars(
            [("PORT", None::<&str>), ("MAX_CONCURRENT_REQUESTS", Some("0"))],
            || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MAX_CONCURRENT_REQUESTS"));
            },
        );
    }

    #[test]
    fn test_server_config_new_keeps_defaults() {
        let config = ServerConfig::new("localhost".to_string(), 5000);
        assert_eq!(config.address(), "localhost:5000");
        assert_eq!(config.max_concurrent_requests, 10);
    }
}
