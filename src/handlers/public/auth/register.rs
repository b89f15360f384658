use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::User;
use crate::error::ApiError;
use crate::services::Credentials;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub user: User,
}

/// POST /api/register - Create a user account
///
/// Stores the user with a hashed password. No token is issued; clients
/// log in separately.
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = Credentials,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Malformed JSON body", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid or duplicate email, weak password", body = crate::error::ValidationErrorResponse),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(credentials) = payload?;
    let user = state.auth.register(credentials).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { user })))
}
