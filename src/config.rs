//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid CLIENT_ORIGIN: {0}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Connection string for the chat database. Never logged.
    pub mongo_uri: Option<String>,
    /// Browser origin allowed to make credentialed requests.
    pub client_origin: Option<HeaderValue>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MONGO_URI`
    /// - `CLIENT_ORIGIN`: enables credentialed CORS for that origin
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let mongo_uri = non_empty(lookup("MONGO_URI"));
        let client_origin = non_empty(lookup("CLIENT_ORIGIN"))
            .map(|raw| {
                let trimmed = raw.trim_end_matches('/');
                HeaderValue::from_str(trimmed).map_err(|_| ConfigError::InvalidOrigin(raw.clone()))
            })
            .transpose()?;

        Ok(Self { port, mongo_uri, client_origin })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
