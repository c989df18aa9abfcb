use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

use super::constants;

/// Service configuration, loaded from the environment with `AUTH__` prefixed
/// variables (e.g. `AUTH__JWT__SECRET`, `AUTH__POSTGRES__URL`).
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub postgres: PostgresSettings,
    pub jwt: JwtSettings,
    pub email_client: EmailClientSettings,
    pub reset: ResetSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PostgresSettings {
    pub url: Secret<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub access_ttl_in_seconds: i64,
    pub refresh_ttl_in_seconds: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    pub timeout_in_millis: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResetSettings {
    /// Frontend base URL the emailed reset link points at
    pub link_base_url: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 3000)?
            .set_default("app.allowed_origins", "")?
            // simplejwt-compatible lifetimes: 5 minutes / 1 day
            .set_default("jwt.access_ttl_in_seconds", 300)?
            .set_default("jwt.refresh_ttl_in_seconds", 86_400)?
            .set_default(
                "email_client.base_url",
                constants::prod::email_client::BASE_URL,
            )?
            .set_default("email_client.sender", constants::prod::email_client::SENDER)?
            .set_default("email_client.timeout_in_millis", 10_000)?
            .set_default("reset.link_base_url", "http://localhost:3000")?
            .add_source(
                Environment::with_prefix("AUTH")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

/// CORS allowlist, configured as a comma-separated origin list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "String")]
pub struct AllowedOrigins(Vec<String>);

impl From<String> for AllowedOrigins {
    fn from(value: String) -> Self {
        Self(
            value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0
            .iter()
            .any(|allowed| allowed.as_bytes() == origin.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
