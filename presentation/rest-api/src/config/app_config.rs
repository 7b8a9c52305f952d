use super::{cors_config, database_config::DatabaseSettings, server_config::ServerConfig};
use poem::middleware::Cors;
use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_variable: {0}")]
    InvalidVariable(&'static str),
}

/// Settings built once at start-up and handed to database and server setup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    /// Prefix every API route is nested under, e.g. `/api/v1`.
    pub api_prefix: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            api_prefix: api_prefix(env::var("API_V1_STR").ok()),
        })
    }
}

/// Normalises the route prefix to a leading slash and no trailing slash.
pub fn api_prefix(raw: Option<String>) -> String {
    let raw = raw.unwrap_or_else(|| "/api/v1".to_string());
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_prefix_to_api_v1() {
        assert_eq!(api_prefix(None), "/api/v1");
    }

    #[test]
    fn should_normalise_custom_prefix() {
        assert_eq!(api_prefix(Some("inventory/v2/".to_string())), "/inventory/v2");
        assert_eq!(api_prefix(Some("/v3".to_string())), "/v3");
    }
}
