//! Test fixtures and mock API helpers.

#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::json;

/// Minimal service-account style credentials
pub const CREDENTIALS_JSON: &str = r#"{"client_id": "abc", "client_secret": "s3cr3t"}"#;

/// Welcome message returned by the mock API root
pub const WELCOME_MESSAGE: &str = "Welcome to the PyGrid deployment API";

/// `GET /` answering 200 with a welcome message
pub fn mock_healthy_root(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "message": WELCOME_MESSAGE }));
    })
}
