use std::time::Duration;

use secrecy::Secret;
use serde::Deserialize;

use super::constants::{defaults, env};
use crate::auth::jwt::JwtConfig;

/// Process configuration, loaded once at startup. Everything here is
/// read-only afterwards; components receive the pieces they need by
/// explicit dependency passing.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub postgres: PostgresSettings,
    pub auth: AuthSettings,
    pub hasher: HasherConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
}

impl AppSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
    /// Upper bound for any single store round-trip.
    pub timeout_millis: u64,
}

impl PostgresSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    pub token_ttl_seconds: i64,
}

impl AuthSettings {
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            token_ttl_seconds: self.token_ttl_seconds,
        }
    }
}

/// Argon2id work factor. Copy on purpose: the hasher moves it into
/// blocking tasks.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HasherConfig {
    pub m_cost: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

impl Settings {
    /// Layered load: defaults, then an optional TOML file (path via
    /// `MARQUEE_CONFIG`), then `MARQUEE__*` environment overrides.
    /// Secrets (`postgres.url`, `auth.jwt_secret`) have no default and
    /// must come from the file or the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let config_file = std::env::var(env::CONFIG_FILE_ENV_VAR)
            .unwrap_or_else(|_| "marquee.toml".to_string());

        config::Config::builder()
            .set_default("app.host", defaults::APP_HOST)?
            .set_default("app.port", defaults::APP_PORT as i64)?
            .set_default("postgres.max_connections", defaults::PG_MAX_CONNECTIONS as i64)?
            .set_default("postgres.timeout_millis", defaults::PG_TIMEOUT_MILLIS as i64)?
            .set_default("auth.token_ttl_seconds", defaults::TOKEN_TTL_SECONDS)?
            .set_default("hasher.m_cost", defaults::HASHER_M_COST as i64)?
            .set_default("hasher.t_cost", defaults::HASHER_T_COST as i64)?
            .set_default("hasher.p_cost", defaults::HASHER_P_COST as i64)?
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(
                config::Environment::with_prefix(env::SETTINGS_PREFIX)
                    .separator(env::SETTINGS_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }
}
