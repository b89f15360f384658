mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn users_requires_bearer_token() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::get(server.url("/api/users")).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Unauthenticated.");

    Ok(())
}

#[tokio::test]
async fn users_rejects_garbage_token() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = reqwest::Client::new()
        .get(server.url("/api/users"))
        .bearer_auth("not.a.jwt")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn users_lists_registered_accounts() -> Result<()> {
    let server = common::spawn_server().await?;
    let email = common::unique_email("lister");
    let other = common::unique_email("listed");

    let token = common::token_for(&server, &email).await?;
    common::register(&server, &other).await?;

    let res = reqwest::Client::new()
        .get(server.url("/api/users"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let users: Vec<Value> = res.json().await?;
    let emails: Vec<&str> = users.iter().filter_map(|u| u["email"].as_str()).collect();
    assert!(emails.contains(&email.as_str()));
    assert!(emails.contains(&other.as_str()));
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));

    Ok(())
}
