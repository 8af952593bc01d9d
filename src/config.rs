// src/config.rs
//
// Runtime configuration
//
// Every value has a default; environment variables override them.
// Unparsable overrides are logged and ignored.

use std::path::PathBuf;
use std::time::Duration;

use crate::db::get_database_path;

/// Upstream catalog root
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Storage slot holding the serialized favorites
pub const FAVORITES_KEY: &str = "rickAndMortyFavorites";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub search_debounce: Duration,
    pub toast_duration: Duration,
    pub favorites_key: String,
    /// `None` keeps favorites in memory only
    pub database_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            favorites_key: FAVORITES_KEY.to_string(),
            database_path: get_database_path().ok(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                        | Default                               |
    /// |--------------------------------|---------------------------------------|
    /// | `RICKDEX_API_BASE_URL`         | `https://rickandmortyapi.com/api`     |
    /// | `RICKDEX_REQUEST_TIMEOUT_SECS` | `30`                                  |
    /// | `RICKDEX_SEARCH_DEBOUNCE_MS`   | `300`                                 |
    /// | `RICKDEX_TOAST_DURATION_MS`    | `3000`                                |
    /// | `RICKDEX_DATABASE_PATH`        | `{DATA_DIR}/rickdex/rickdex.db`       |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("RICKDEX_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = parse_u64(&lookup, "RICKDEX_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = parse_u64(&lookup, "RICKDEX_SEARCH_DEBOUNCE_MS") {
            config.search_debounce = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_u64(&lookup, "RICKDEX_TOAST_DURATION_MS") {
            config.toast_duration = Duration::from_millis(ms);
        }
        if let Some(path) = lookup("RICKDEX_DATABASE_PATH").filter(|v| !v.trim().is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        config
    }
}

fn parse_u64<F>(lookup: &F, name: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a non-negative integer", name, raw);
            None
        }
    }
}
