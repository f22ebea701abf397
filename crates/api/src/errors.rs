use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use blockcheck_domain::DomainError;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            // Descriptive body for the caller's own mistake.
            DomainError::InvalidQuery(message) => (StatusCode::BAD_REQUEST, message.clone()),

            // The fetch detail is logged; the caller only learns that no
            // usable list exists right now.
            DomainError::FetchFailed { .. } => {
                error!(error = %self.0, "Lookup failed: no blocklist available");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Blocklist unavailable".to_string(),
                )
            }

            _ => {
                error!(error = %self.0, "Unexpected error handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}
