use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

pub const API_PREFIX: &str = "/api";

/// True for `/api` and anything below it
pub fn is_api_path(path: &str) -> bool {
    path.strip_prefix(API_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Router fallback: unmatched API paths get the JSON not-found body, everything
/// else gets the bare 404.
pub async fn not_found(uri: Uri) -> Response {
    if is_api_path(uri.path()) {
        tracing::debug!("No API route for {}", uri.path());
        ApiError::resource_not_found().into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_path_matching() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/"));
        assert!(is_api_path("/api/nope"));
        assert!(!is_api_path("/apis"));
        assert!(!is_api_path("/application/api"));
        assert!(!is_api_path("/"));
    }
}
