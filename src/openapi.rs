use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Demo API",
        version = "1.0.0",
        description = "Demo API, secured with JWT and documented with OpenAPI.",
        contact(email = "info@testsmith.io")
    ),
    servers(
        (url = "/api", description = "Local API server")
    ),
    paths(
        crate::handlers::public::auth::register::register,
        crate::handlers::public::auth::login::login,
        crate::handlers::protected::users::list_users,
    ),
    components(schemas(
        crate::services::Credentials,
        crate::database::User,
        crate::handlers::public::auth::RegisterResponse,
        crate::handlers::public::auth::TokenResponse,
        crate::error::ErrorResponse,
        crate::error::ValidationErrorResponse,
    )),
    tags(
        (name = "auth", description = "Registration and token acquisition"),
        (name = "users", description = "User listing (bearer token required)"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds the `bearerAuth` JWT security scheme to the OpenAPI spec.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// GET /api/documentation
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
