use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{fallback, protected, public, system};
use crate::middleware::jwt_auth_middleware;
use crate::openapi::openapi_json;
use crate::state::AppState;

/// Build the full router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let max_body = state.config.api.max_request_size_bytes;
    let cors = cors_layer(&state.config.security);

    Router::new()
        // Public
        .route("/", get(system::root))
        .route("/up", get(system::health))
        .nest(fallback::API_PREFIX, api_routes(state.clone()))
        .fallback(fallback::not_found)
        // Global middleware
        .layer(DefaultBodyLimit::max(max_body))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/users", get(protected::list_users))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware));

    Router::new()
        .route("/register", post(public::register))
        .route("/login", post(public::login))
        .route("/documentation", get(openapi_json))
        .merge(protected)
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::{PasswordHasher, TokenIssuer};
    use crate::config::AppConfig;
    use crate::database::MemoryUserRepository;
    use crate::services::AuthService;

    fn test_app() -> Router {
        let config = AppConfig::development();
        let issuer = TokenIssuer::from_config(&config.security).unwrap();
        let auth = AuthService::new(
            Arc::new(MemoryUserRepository::new()),
            PasswordHasher::new(),
            issuer,
        );
        app(AppState::new(config, auth))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn register_login_and_list() {
        let app = test_app();
        let creds = json!({ "email": "jane@example.com", "password": "password123" });

        let (status, body) = send(&app, post_json("/api/register", creds.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user"]["email"], "jane@example.com");
        assert!(body["user"].get("password_hash").is_none());

        let (status, body) = send(&app, post_json("/api/login", creds)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "bearer");
        assert_eq!(body["expires_in"], 3600);
        let token = body["access_token"].as_str().unwrap().to_string();

        let request = Request::get("/api/users")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn users_requires_token() {
        let app = test_app();
        let request = Request::get("/api/users").body(Body::empty()).unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Unauthenticated.");
    }

    #[tokio::test]
    async fn unknown_api_path_is_json_404() {
        let app = test_app();
        let request = Request::get("/api/does-not-exist").body(Body::empty()).unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Resource not found" }));
    }

    #[tokio::test]
    async fn unknown_non_api_path_is_bare_404() {
        let app = test_app();
        let request = Request::get("/does-not-exist").body(Body::empty()).unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn missing_register_field_is_422() {
        let app = test_app();

        let (status, body) =
            send(&app, post_json("/api/register", json!({ "password": "password123" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["email"][0], "The email field is required.");
        assert!(body["errors"].get("password").is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let app = test_app();
        let request = Request::post("/api/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn health_and_docs_respond() {
        let app = test_app();

        let (status, body) = send(&app, Request::get("/up").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = send(
            &app,
            Request::get("/api/documentation").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Demo API");
    }
}
