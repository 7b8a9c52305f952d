use std::env;

use super::app_config::ConfigError;

/// HTTP listener address
///
/// Environment variables:
/// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
/// - SERVICE_PORT: Port to bind (default: 8080)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("SERVICE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVariable("SERVICE_PORT"))?,
            None => 8080,
        };

        Ok(Self { ip, port })
    }

    /// "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
