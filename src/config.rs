use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use crate::error::{AppError, Result};

/// Cache file, relative to the working directory.
pub const NEWS_DATA_FILE_NAME: &str = "news-data.json";

pub const DEFAULT_NEWSAPI_URL: &str = "https://newsapi.org/v2/everything";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub news_api_key: String,
    pub news_api_url: String,
    pub cache_path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An unset key is passed through; the upstream rejects the request itself
        let news_api_key = lookup("NEWSAPI_API_KEY").unwrap_or_default();
        let news_api_url = lookup("NEWSAPI_URL").unwrap_or_else(|| DEFAULT_NEWSAPI_URL.to_string());

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            news_api_key,
            news_api_url,
            cache_path: PathBuf::from(NEWS_DATA_FILE_NAME),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_addr.port(), 3000);
        assert_eq!(config.news_api_key, "");
        assert_eq!(config.news_api_url, DEFAULT_NEWSAPI_URL);
        assert_eq!(config.cache_path, PathBuf::from("news-data.json"));
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("NEWSAPI_API_KEY", "secret"),
            ("NEWSAPI_URL", "http://localhost:9999/v2/everything"),
        ])
        .unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.news_api_key, "secret");
        assert_eq!(config.news_api_url, "http://localhost:9999/v2/everything");
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(msg) if msg.starts_with("Invalid port")));
    }

    #[test]
    fn invalid_host_is_a_config_error() {
        let err = config_from(&[("HOST", "localhost:3000")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(msg) if msg.starts_with("Invalid host address")));
    }
}
