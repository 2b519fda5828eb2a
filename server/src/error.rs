use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use pricing::error::QuoteError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error(transparent)]
    Quote(#[from] QuoteError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MalformedPayload => StatusCode::BAD_REQUEST,
            AppError::Quote(QuoteError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Quote(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (status, self.to_string()).into_response()
    }
}
