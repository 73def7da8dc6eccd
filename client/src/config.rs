//! Build-time client configuration.
//!
//! Development builds talk to `CHATTER_API_BASE_URL`, release builds to
//! `CHATTER_API_BACKEND_URL`. Both are read with `option_env!` when the crate
//! is compiled and fall back to the same-origin `/api` prefix.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Which backend URL a build should target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn current() -> Self {
        if cfg!(debug_assertions) { Self::Development } else { Self::Production }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash.
    pub base_url: String,
    /// Send cookies with cross-origin API requests.
    pub with_credentials: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), with_credentials: true }
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::select(
            BuildMode::current(),
            option_env!("CHATTER_API_BASE_URL"),
            option_env!("CHATTER_API_BACKEND_URL"),
        )
    }

    /// Pick the base URL for `mode` from the development/production candidates.
    pub fn select(mode: BuildMode, dev_url: Option<&str>, prod_url: Option<&str>) -> Self {
        let chosen = match mode {
            BuildMode::Development => dev_url,
            BuildMode::Production => prod_url,
        };
        let base_url = chosen
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url, ..Self::default() }
    }
}
