// HTTP API Error Types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::auth::TokenError;
use crate::services::{AuthError, FieldErrors};

pub const TOKEN_EXPIRED_MESSAGE: &str = "Token has expired and can no longer be refreshed";
pub const RESOURCE_NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const UNAUTHENTICATED_MESSAGE: &str = "Unauthenticated.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Error body, as documented in the OpenAPI spec
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Resource not found")]
    pub message: String,
}

/// 422 body with per-field messages
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = "The email has already been taken.")]
    pub message: String,
    pub errors: FieldErrors,
}

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    InvalidJson(String),

    // 401 Unauthorized
    Unauthorized(String),
    TokenExpired,

    // 404 Not Found
    NotFound(String),

    // 422 Unprocessable Entity
    ValidationError {
        message: String,
        field_errors: FieldErrors,
    },

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) | ApiError::TokenExpired => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::InvalidJson(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::ServiceUnavailable(msg) => msg,
            ApiError::TokenExpired => TOKEN_EXPIRED_MESSAGE,
            ApiError::ValidationError { message, .. } => message,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::ValidationError { message, field_errors } => json!({
                "message": message,
                "errors": field_errors,
            }),
            _ => json!({ "message": self.message() }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn unauthenticated() -> Self {
        ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string())
    }

    pub fn resource_not_found() -> Self {
        ApiError::NotFound(RESOURCE_NOT_FOUND_MESSAGE.to_string())
    }

    pub fn validation_error(field_errors: FieldErrors) -> Self {
        let message = field_errors
            .values()
            .flatten()
            .next()
            .cloned()
            .unwrap_or_else(|| "The given data was invalid.".to_string());

        ApiError::ValidationError { message, field_errors }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert other error types to ApiError
impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => ApiError::TokenExpired,
            TokenError::Invalid(msg) => {
                tracing::debug!("Rejected bearer token: {}", msg);
                ApiError::unauthenticated()
            }
            other @ (TokenError::InvalidSecret | TokenError::Generation(_)) => {
                tracing::error!("Token issuer error: {}", other);
                ApiError::internal_server_error("Could not create token")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(field_errors) => ApiError::validation_error(field_errors),
            AuthError::InvalidCredentials => ApiError::unauthorized(INVALID_CREDENTIALS_MESSAGE),
            AuthError::Token(token_err) => token_err.into(),
            AuthError::Password(e) => {
                tracing::error!("Password hashing error: {}", e);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
            AuthError::Store(crate::database::StoreError::Unavailable(msg)) => {
                tracing::error!("Credential store unavailable: {}", msg);
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            AuthError::Store(e) => {
                // Don't expose internal SQL errors to clients
                tracing::error!("Credential store error: {}", e);
                ApiError::internal_server_error("Database error occurred")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::bad_request("Expected request with `Content-Type: application/json`")
            }
            other => ApiError::InvalidJson(other.body_text()),
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
