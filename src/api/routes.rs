use axum::{
    routing::get,
    Router,
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use log::{debug, error, info};
use serde_json::Value;
use std::sync::atomic::Ordering;

use crate::error::Result;
use crate::clock::yesterday;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/news-data", get(news_data_handler))
        .with_state(app_state)
}

async fn news_data_handler(State(state): State<AppState>) -> Response {
    let count = state.request_count.fetch_add(1, Ordering::Relaxed) + 1;
    debug!("news-data request #{}", count);
    let start_time = std::time::Instant::now();

    let result = process_news_request(&state).await;
    debug!("Request processing took: {:?}", start_time.elapsed());

    match result {
        Ok(data) => Json(data).into_response(),
        Err(err) => {
            error!("Error serving news data: {}", err);
            err.into_response()
        }
    }
}

/// Serves the cached upstream body when it was fetched for the current
/// "yesterday", otherwise fetches, persists and serves a fresh one.
async fn process_news_request(state: &AppState) -> Result<Value> {
    let from = yesterday(state.clock.as_ref());

    if let Some(cached) = state.cache.read().await {
        if cached.date == from {
            info!("Cache hit for {}", from);
            return Ok(cached.data);
        }
        info!("Cache is stale ({}), refreshing for {}", cached.date, from);
    } else {
        info!("No usable cache, fetching for {}", from);
    }

    let payload = state.news.fetch_news(&from).await?;
    state.cache.write(&payload).await?;

    Ok(payload.data)
}
