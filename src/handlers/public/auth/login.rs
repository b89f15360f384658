use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use super::utils::respond_with_token;
use crate::error::ApiError;
use crate::services::Credentials;
use crate::state::AppState;

/// POST /api/login - Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "Token issued", body = crate::handlers::public::auth::utils::TokenResponse),
        (status = 400, description = "Malformed JSON body", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(credentials) = payload?;
    let token = state.auth.login(credentials).await?;

    Ok(respond_with_token(token))
}
