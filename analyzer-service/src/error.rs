use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sermon text is required")]
    MissingInput,

    #[error("Anthropic API key is not configured")]
    MissingApiKey,

    #[error("Upstream rejected the request with status {0}")]
    UpstreamRejected(u16),

    #[error("Network error reaching the analysis provider: {0}")]
    Network(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(_) => AppError::MissingApiKey,
            ProviderError::UpstreamStatus(status) => AppError::UpstreamRejected(status),
            ProviderError::NetworkError(msg) => AppError::Network(msg),
            ProviderError::ApiError(msg) => AppError::InternalError(anyhow::anyhow!(msg)),
        }
    }
}

/// User-facing message for a non-success upstream status code.
pub fn upstream_error_message(status: u16) -> String {
    match status {
        401 => {
            "Authentication with the analysis provider failed. The configured API key was rejected."
                .to_string()
        }
        429 => "The analysis provider is rate limiting requests. Please wait a moment and try again."
            .to_string(),
        502 | 503 | 504 => {
            "The analysis provider is temporarily unavailable. Please try again later.".to_string()
        }
        _ => format!(
            "The analysis provider returned an unexpected error (status {}).",
            status
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let (status, error_message) = match self {
            AppError::MissingInput => (
                StatusCode::BAD_REQUEST,
                "Sermon text is required".to_string(),
            ),
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The analysis service has no API key configured. Contact the site operator."
                    .to_string(),
            ),
            AppError::UpstreamRejected(code) => (
                StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
                upstream_error_message(code),
            ),
            AppError::Network(_) => (
                StatusCode::BAD_GATEWAY,
                "Could not reach the analysis provider. Please try again.".to_string(),
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to analyze sermon".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_status_gets_dedicated_message() {
        let message = upstream_error_message(429);
        assert!(message.contains("rate limiting"));
    }

    #[test]
    fn auth_failure_status_gets_dedicated_message() {
        let message = upstream_error_message(401);
        assert!(message.contains("Authentication"));
        assert!(message.contains("API key"));
    }

    #[test]
    fn gateway_statuses_map_to_unavailable_message() {
        for status in [502, 503, 504] {
            let message = upstream_error_message(status);
            assert!(
                message.contains("temporarily unavailable"),
                "status {} mapped to {:?}",
                status,
                message
            );
        }
    }

    #[test]
    fn unlisted_status_embeds_the_numeric_code() {
        let message = upstream_error_message(418);
        assert!(message.contains("418"));
    }
}
