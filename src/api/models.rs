use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What lives in the cache file: the date the data was fetched for and the
/// upstream body, kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedNewsPayload {
    pub date: String,
    pub data: Value,
}

/// Query string sent to the news search endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsQuery<'a> {
    pub q: &'a str,
    pub from: &'a str,
    pub page_size: u32,
    pub sort_by: &'a str,
    pub language: &'a str,
    pub api_key: &'a str,
}
