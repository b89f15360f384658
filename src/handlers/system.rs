use axum::{http::StatusCode, extract::State, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - Service banner and endpoint map
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Demo API",
        "version": version,
        "description": "Demo API, secured with JWT and documented with OpenAPI.",
        "endpoints": {
            "register": "POST /api/register (public)",
            "login": "POST /api/login (public - token acquisition)",
            "users": "GET /api/users (bearer token)",
            "docs": "GET /api/documentation (public)",
            "health": "GET /up (public)",
        }
    }))
}

/// GET /up - Liveness plus credential store connectivity
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.auth.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
