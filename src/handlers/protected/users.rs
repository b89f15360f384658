use axum::{extract::State, Extension, Json};

use crate::database::User;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/users - List every registered user
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 401, description = "Missing, invalid or expired token", body = crate::error::ErrorResponse),
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.auth.list_users().await?;
    tracing::debug!("User {} listed {} users", auth_user.user_id, users.len());

    Ok(Json(users))
}
