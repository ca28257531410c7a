use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde_json::Value;

use crate::api::{ApiError, ApiMethod, ApiRequest, ApiResult, Backend};

/// HTTP implementation of [`Backend`] built on a shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn read_json(request: &ApiRequest, response: Response) -> ApiResult<Value> {
        let bytes = response.bytes().await.map_err(|e| {
            log::error!(
                "API error reading {} {}: {e}",
                request.method,
                request.endpoint
            );
            ApiError::Transport(e.to_string())
        })?;

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            log::error!(
                "API error decoding {} {}: {e}",
                request.method,
                request.endpoint
            );
            ApiError::Decode(e.to_string())
        })
    }
}

impl From<ApiMethod> for Method {
    fn from(method: ApiMethod) -> Self {
        match method {
            ApiMethod::Get => Method::GET,
            ApiMethod::Post => Method::POST,
            ApiMethod::Put => Method::PUT,
            ApiMethod::Delete => Method::DELETE,
        }
    }
}

impl Backend for ApiClient {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let mut builder = self
            .http
            .request(Method::from(request.method), self.url(&request.endpoint));
        if let Some(token) = &request.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::error!("API error on {} {}: {e}", request.method, request.endpoint);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!(
                "API error on {} {}: status {status}: {body}",
                request.method,
                request.endpoint
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Self::read_json(&request, response).await
    }
}
