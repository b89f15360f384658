use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::IssuedToken;

pub const TOKEN_TYPE: &str = "bearer";

/// Access token issued by a successful login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    #[schema(example = "bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 3600)]
    pub expires_in: u64,
}

impl From<IssuedToken> for TokenResponse {
    fn from(token: IssuedToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: token.expires_in,
        }
    }
}

/// Get the token array structure.
pub fn respond_with_token(token: IssuedToken) -> impl IntoResponse {
    (StatusCode::OK, Json(TokenResponse::from(token)))
}
