use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch news data: {0}")]
    FetchError(String),

    #[error("Failed to write cache file: {0}")]
    CacheError(String),

    #[error("Error serializing cache payload: {0}")]
    SerializeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    // Callers only ever see a generic 500; the detail stays in the server log.
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::CacheError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializeError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_internal_server_error() {
        let errors = vec![
            AppError::FetchError("connection refused".to_string()),
            AppError::CacheError("permission denied".to_string()),
            AppError::SerializeError("bad value".to_string()),
            AppError::ConfigError("bad port".to_string()),
        ];

        for err in errors {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let content_type = response.headers().get("content-type").unwrap();
            assert!(content_type.to_str().unwrap().starts_with("text/plain"));
        }
    }

    #[test]
    fn io_errors_become_cache_errors() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, AppError::CacheError(_)));
        assert!(err.to_string().contains("denied"));
    }
}
