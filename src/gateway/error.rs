use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::provider::ProviderError;

/// Errors surfaced at the endpoint boundary.
///
/// Every variant maps to an HTTP status here rather than via exception
/// propagation, so the status-code mapping is explicit and testable.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The `prompt` field was absent or empty.
    #[error("Missing 'prompt'")]
    MissingPrompt,

    /// The `image` file part was absent.
    #[error("Missing 'image' file")]
    MissingImage,

    /// The multipart body itself could not be read.
    #[error("invalid multipart body: {0}")]
    Multipart(String),

    /// The uploaded bytes are not a decodable raster image.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// The model provider call failed; no retry is attempted.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::MissingPrompt
            | GatewayError::MissingImage
            | GatewayError::Multipart(_) => StatusCode::BAD_REQUEST,
            // Decode failures are deliberately not distinguished from generic
            // processing failures.
            GatewayError::Decode(_) | GatewayError::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
