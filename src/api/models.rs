use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SpendlensError;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ScanRequest {
    /// Base64 JPEG, with or without a `data:image/jpeg;base64,` header.
    pub image: String,
    /// Optional client-side reference to the source photo.
    pub source_ref: Option<String>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SpendlensError to implement IntoResponse
pub struct ApiError(pub SpendlensError);

impl From<SpendlensError> for ApiError {
    fn from(err: SpendlensError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            SpendlensError::MissingEmail | SpendlensError::InvalidImagePayload => {
                StatusCode::BAD_REQUEST
            }
            SpendlensError::EmailAlreadyRegistered(_) => StatusCode::CONFLICT,
            SpendlensError::UserNotFound(_) | SpendlensError::ReceiptNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            SpendlensError::InvalidCredentials | SpendlensError::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            SpendlensError::NotReceiptOwner(_) => StatusCode::FORBIDDEN,
            SpendlensError::NegativeTotal(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SpendlensError::ModelUnavailable(_)
            | SpendlensError::EmptyModelReply
            | SpendlensError::MalformedModelReply(_) => StatusCode::BAD_GATEWAY,
            SpendlensError::StorageError(_)
            | SpendlensError::CacheError(_)
            | SpendlensError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
