use anyhow::Context;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Thin JSON client over the Demo API
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

/// Non-2xx reply from the server
#[derive(Debug, thiserror::Error)]
#[error("{status}: {message}")]
pub struct ApiFailure {
    pub status: StatusCode,
    pub message: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let mut base_url =
            Url::parse(base_url).with_context(|| format!("invalid server URL: {}", base_url))?;
        // Url::join drops the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("invalid request path: {}", path))
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> anyhow::Result<Value> {
        let request = self.request(Method::GET, path, token)?;
        Self::send(request).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<Value> {
        let request = self.request(Method::POST, path, None)?.json(body);
        Self::send(request).await
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> anyhow::Result<RequestBuilder> {
        let mut request = self.http.request(method, self.url(path)?);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Ok(request)
    }

    async fn send(request: RequestBuilder) -> anyhow::Result<Value> {
        let response = request.send().await.context("request failed")?;
        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"))
                .to_string();
            return Err(ApiFailure { status, message }.into());
        }

        Ok(body)
    }
}
