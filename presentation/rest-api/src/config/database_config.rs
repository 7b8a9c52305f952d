use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::app_config::ConfigError;

/// Database connection settings
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: migrations directory
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::MissingVariable("DATABASE_URL"))?;
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVariable("DATABASE_MAX_CONNECTIONS"))?,
            None => 5,
        };
        let migrations_path = lookup("DATABASE_MIGRATIONS_PATH")
            .unwrap_or_else(|| "infrastructure/persistence/migrations".to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

/// Connects the pool and applies pending migrations.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let mut config = DatabaseConfig::new(settings.url.clone());
    config.max_connections = settings.max_connections;

    let pool = create_postgres_pool(&config)
        .await
        .context("failed to connect to the database")?;
    run_migrations(&pool, &settings.migrations_path)
        .await
        .with_context(|| format!("failed to run migrations from {}", settings.migrations_path))?;

    tracing::info!(
        max_connections = settings.max_connections,
        "database ready"
    );
    Ok(pool)
}
