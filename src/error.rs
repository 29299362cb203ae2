use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failure talking to the scheduling provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to provider failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("provider returned an unexpected body: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("request timed out")]
    Timeout,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // upstream detail stays in the logs
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Timeout => "Request timed out",
            AppError::Upstream(_) => "Failed to fetch availability",
            AppError::Internal(_) => "Internal server error",
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
