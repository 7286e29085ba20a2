pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod news;

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use cache::CacheStore;
use clock::{Clock, SystemClock};
use config::Config;
use news::NewsClient;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: CacheStore,
    pub news: NewsClient,
    pub clock: Arc<dyn Clock>,
    pub request_count: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: CacheStore::new(config.cache_path.clone()),
            news: NewsClient::new(config.news_api_url.clone(), config.news_api_key.clone()),
            clock,
            request_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }
}
