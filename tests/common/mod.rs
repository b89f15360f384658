#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

pub const JWT_SECRET: &str = "integration-test-secret";
pub const JWT_ISSUER: &str = "demo-api";
pub const PASSWORD: &str = "correct-horse-battery";

/// Server process owned by one test, killed when dropped.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // In-memory user store, fixed secret so tests can mint their own tokens
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_demo-api-rust"));
        cmd.env("APP_ENV", "development")
            .env("DEMO_API_PORT", port.to_string())
            .env("DATABASE_URL", "")
            .env("JWT_SECRET", JWT_SECRET)
            .env("JWT_ISSUER", JWT_ISSUER)
            .env("JWT_TTL", "60")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/up", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn spawn_server() -> Result<TestServer> {
    let server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Email that no other test will register.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, uuid::Uuid::new_v4().simple())
}

pub async fn register(server: &TestServer, email: &str) -> Result<reqwest::Response> {
    let res = reqwest::Client::new()
        .post(server.url("/api/register"))
        .json(&json!({ "email": email, "password": PASSWORD }))
        .send()
        .await?;
    Ok(res)
}

/// Register and log in, returning the access token.
pub async fn token_for(server: &TestServer, email: &str) -> Result<String> {
    let res = register(server, email).await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "register failed: {}", res.status());

    let body: Value = reqwest::Client::new()
        .post(server.url("/api/login"))
        .json(&json!({ "email": email, "password": PASSWORD }))
        .send()
        .await?
        .json()
        .await?;

    body["access_token"]
        .as_str()
        .map(str::to_string)
        .context("login response has no access_token")
}
