use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use config::{Config, Environment};
use crud::AuthConfig;
use sea_orm::Database;
use serde::Deserialize;
use tracing::{debug, info};

use crate::schemas::AppState;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://seasaba.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
/// bcrypt's own default cost.
pub const DEFAULT_HASH_COST: i64 = 12;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub bind_address: String,
    pub secret_key: Option<String>,
    pub algorithm: String,
    pub access_token_expire_minutes: i64,
    pub password_hash_cost: u32,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("bind_address", &self.bind_address)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("algorithm", &self.algorithm)
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .field("password_hash_cost", &self.password_hash_cost)
            .finish()
    }
}

impl Settings {
    /// Loads defaults overlaid with environment variables such as
    /// `DATABASE_URL` or `ACCESS_TOKEN_EXPIRE_MINUTES`.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_config(Self::builder().add_source(Environment::default().try_parsing(true)))
    }

    fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder()
    }

    fn from_config(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        let settings = builder
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("algorithm", "HS256")?
            .set_default("access_token_expire_minutes", 60_i64)?
            .set_default("password_hash_cost", DEFAULT_HASH_COST)?
            .build()
            .context("Failed to read configuration")?;
        let settings: Settings = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        debug!(?settings, "Configuration loaded");
        Ok(settings)
    }

    /// Credential settings. Fails when `SECRET_KEY` is missing or the
    /// algorithm is not an HMAC one.
    pub fn auth_config(&self) -> Result<AuthConfig> {
        let secret = self
            .secret_key
            .as_deref()
            .ok_or_else(|| anyhow!("SECRET_KEY must be set"))?;
        Ok(AuthConfig::new(
            secret,
            &self.algorithm,
            self.access_token_expire_minutes,
            self.password_hash_cost,
        )?)
    }
}

/// Connects to the database and assembles the shared handler state.
pub async fn initialize_app_state(settings: &Settings) -> Result<AppState> {
    let auth = settings.auth_config()?;

    info!("Connecting to database: {}", settings.database_url);
    let db = Database::connect(&settings.database_url).await?;

    Ok(AppState {
        db,
        auth: Arc::new(auth),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(overrides: &[(&str, &str)]) -> Result<Settings> {
        let mut builder = Settings::builder();
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }
        Settings::from_config(builder)
    }

    #[test]
    fn test_defaults() {
        let settings = load(&[]).unwrap();
        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(settings.algorithm, "HS256");
        assert_eq!(settings.access_token_expire_minutes, 60);
        assert_eq!(settings.password_hash_cost, 12);
        assert!(settings.auth_config().is_err());
    }

    #[test]
    fn test_auth_config_from_settings() {
        let settings = load(&[
            ("secret_key", "s3cret"),
            ("algorithm", "HS512"),
            ("access_token_expire_minutes", "15"),
            ("password_hash_cost", "4"),
        ])
        .unwrap();
        let auth = settings.auth_config().unwrap();
        assert_eq!(auth.token_ttl().num_minutes(), 15);
        assert!(!format!("{:?}", settings).contains("s3cret"));

        let rsa = load(&[("secret_key", "s3cret"), ("algorithm", "RS256")]).unwrap();
        assert!(rsa.auth_config().is_err());
    }
}
