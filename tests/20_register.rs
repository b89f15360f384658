mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn register_returns_created_user() -> Result<()> {
    let server = common::spawn_server().await?;
    let email = common::unique_email("register");

    let res = common::register(&server, &email).await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = res.json().await?;
    assert_eq!(body["user"]["email"], email.as_str());
    assert!(body["user"]["id"].is_string());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    Ok(())
}

#[tokio::test]
async fn register_normalizes_email() -> Result<()> {
    let server = common::spawn_server().await?;
    let email = common::unique_email("mixed");

    let res = common::register(&server, &format!("  {}  ", email.to_uppercase())).await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = res.json().await?;
    assert_eq!(body["user"]["email"], email.as_str());

    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_rejected() -> Result<()> {
    let server = common::spawn_server().await?;
    let email = common::unique_email("duplicate");

    assert_eq!(common::register(&server, &email).await?.status(), StatusCode::CREATED);

    let res = common::register(&server, &email).await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = res.json().await?;
    assert!(body["errors"]["email"].is_array(), "expected email error: {}", body);

    Ok(())
}

#[tokio::test]
async fn invalid_input_lists_field_errors() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::Client::new()
        .post(server.url("/api/register"))
        .json(&json!({ "email": "not-an-email", "password": "short" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = res.json().await?;
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());

    Ok(())
}
