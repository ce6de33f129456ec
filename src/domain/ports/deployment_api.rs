//! Deployment API Port
//!
//! The remote service that accepts deployments and reports on deployed
//! instances. Treated as plain request/response JSON over HTTP.

use serde_json::Value;

use crate::domain::value_objects::StatusApp;
use crate::error::PygridResult;

/// Status code and parsed body of an API answer
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body; non-JSON bodies are kept as a JSON string
    pub body: Value,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// What the status command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusQuery {
    /// Every deployed instance of an application kind
    All(StatusApp),
    /// One instance by id
    One(StatusApp, u64),
}

impl StatusQuery {
    pub fn new(app: StatusApp, id: Option<u64>) -> Self {
        match id {
            Some(id) => StatusQuery::One(app, id),
            None => StatusQuery::All(app),
        }
    }

    /// Absolute path of the endpoint, relative to the API host
    pub fn path(&self) -> String {
        match self {
            StatusQuery::All(app) => format!("/deployed/{}s", app.as_str()),
            StatusQuery::One(app, id) => format!("/deployed/{}/{}", app.as_str(), id),
        }
    }
}

/// Trait for talking to the deployment API.
pub trait DeploymentApi {
    /// Base URL the client was built for
    fn base_url(&self) -> &str;

    /// Probe the API root; returns the welcome `message` on HTTP 200.
    fn health(&self) -> PygridResult<String>;

    /// `POST /deploy` with an already-encoded body.
    fn deploy(&self, body: &Value) -> PygridResult<ApiResponse>;

    /// `GET /deployed/...`
    fn status(&self, query: StatusQuery) -> PygridResult<ApiResponse>;
}
