//! HTTP Deployment API client
//!
//! Blocking `reqwest` client for the deployment API. Endpoint paths are
//! absolute (`/deploy`, `/deployed/...`) and are resolved against the base
//! URL with RFC 3986 reference joining, so they replace any base path.

use reqwest::blocking::{Client, Response};
use serde_json::Value;
use url::Url;

use crate::domain::ports::{ApiResponse, DeploymentApi, StatusQuery};
use crate::error::{PygridError, PygridResult};

/// `DeploymentApi` over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpDeploymentApi {
    /// URL as the user typed it, recorded in the configuration document
    api_url: String,
    base: Url,
    client: Client,
}

impl HttpDeploymentApi {
    /// Build a client for `api_url`. Only `http` and `https` URLs are accepted.
    pub fn new(api_url: &str) -> PygridResult<Self> {
        let base = Url::parse(api_url.trim()).map_err(|e| PygridError::InvalidApiUrl {
            url: api_url.to_string(),
            message: e.to_string(),
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(PygridError::InvalidApiUrl {
                url: api_url.to_string(),
                message: format!("unsupported scheme '{}'", base.scheme()),
            });
        }

        Ok(Self {
            api_url: api_url.trim().to_string(),
            base,
            client: Client::new(),
        })
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> PygridResult<Url> {
        self.base
            .join(path)
            .map_err(|e| PygridError::InvalidApiUrl {
                url: format!("{}{}", self.base, path),
                message: e.to_string(),
            })
    }

    fn unreachable(&self, reason: impl Into<String>) -> PygridError {
        PygridError::ApiUnreachable {
            url: self.base.to_string(),
            reason: reason.into(),
        }
    }
}

fn read_response(response: Response) -> PygridResult<ApiResponse> {
    let status = response.status().as_u16();
    let text = response.text()?;
    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
    Ok(ApiResponse { status, body })
}

impl DeploymentApi for HttpDeploymentApi {
    fn base_url(&self) -> &str {
        &self.api_url
    }

    fn health(&self) -> PygridResult<String> {
        tracing::debug!(url = %self.base, "probing deployment API");

        let response = self
            .client
            .get(self.base.clone())
            .send()
            .map_err(|e| self.unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(self.unreachable(format!("health check returned HTTP {}", status)));
        }

        let body: Value = response
            .json()
            .map_err(|e| self.unreachable(format!("health check body is not JSON: {}", e)))?;

        body.get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| self.unreachable("health check response has no 'message' field"))
    }

    fn deploy(&self, body: &Value) -> PygridResult<ApiResponse> {
        let url = self.endpoint("/deploy")?;
        tracing::info!(%url, "submitting deployment");

        let response = self.client.post(url).json(body).send()?;
        let answer = read_response(response)?;
        tracing::debug!(status = answer.status, "deploy answered");
        Ok(answer)
    }

    fn status(&self, query: StatusQuery) -> PygridResult<ApiResponse> {
        let url = self.endpoint(&query.path())?;
        tracing::info!(%url, "querying deployment status");

        let response = self.client.get(url).send()?;
        let answer = read_response(response)?;
        tracing::debug!(status = answer.status, body = %answer.body, "status answered");
        Ok(answer)
    }
}
