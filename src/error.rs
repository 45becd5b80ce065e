use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Request-fatal failures. Neither is caught or retried anywhere;
/// both surface as a generic server-error response.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("record store failure: {0}")]
    Store(#[from] anyhow::Error),

    #[error("template failure: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Template { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!(error = %self, "request failed");
        (status, self.to_string()).into_response()
    }
}
