use reqwest::{Client, ClientBuilder};
use once_cell::sync::Lazy;
use serde_json::Value;
use log::info;

use crate::api::models::{CachedNewsPayload, NewsQuery};
use crate::error::Result;

pub const NEWS_TOPIC: &str = "bitcoin";
pub const PAGE_SIZE: u32 = 8;
pub const SORT_BY: &str = "relevancy";
pub const LANGUAGE: &str = "en";

// Shared client so connections are reused across requests.
// The upstream refuses requests that carry no User-Agent.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .build()
        .unwrap_or_else(|_| Client::new())
});

#[derive(Debug, Clone)]
pub struct NewsClient {
    endpoint: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Searches for articles published since `from` (`YYYY-MM-DD`).
    ///
    /// The body is returned whatever the status code, as long as it is JSON;
    /// API error payloads are therefore cached like results.
    pub async fn fetch_news(&self, from: &str) -> Result<CachedNewsPayload> {
        let query = NewsQuery {
            q: NEWS_TOPIC,
            from,
            page_size: PAGE_SIZE,
            sort_by: SORT_BY,
            language: LANGUAGE,
            api_key: &self.api_key,
        };

        let res = CLIENT.get(&self.endpoint).query(&query).send().await?;
        info!("News API responded with {}", res.status());

        let data: Value = res.json().await?;

        Ok(CachedNewsPayload {
            date: from.to_string(),
            data,
        })
    }
}
