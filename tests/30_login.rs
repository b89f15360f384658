mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn login_issues_bearer_token() -> Result<()> {
    let server = common::spawn_server().await?;
    let email = common::unique_email("login");
    common::register(&server, &email).await?;

    let res = reqwest::Client::new()
        .post(server.url("/api/login"))
        .json(&json!({ "email": email, "password": common::PASSWORD }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["expires_in"], 3600);
    assert_eq!(body["access_token"].as_str().map(|t| t.split('.').count()), Some(3));

    Ok(())
}

#[tokio::test]
async fn wrong_password_is_unauthorized() -> Result<()> {
    let server = common::spawn_server().await?;
    let email = common::unique_email("wrong-password");
    common::register(&server, &email).await?;

    let res = reqwest::Client::new()
        .post(server.url("/api/login"))
        .json(&json!({ "email": email, "password": "not-the-password" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Invalid credentials");

    Ok(())
}

#[tokio::test]
async fn unknown_email_is_unauthorized() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::Client::new()
        .post(server.url("/api/login"))
        .json(&json!({ "email": common::unique_email("nobody"), "password": common::PASSWORD }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn malformed_body_is_bad_request() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::Client::new()
        .post(server.url("/api/login"))
        .header("content-type", "application/json")
        .body("{\"email\":")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
