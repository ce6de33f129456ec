//! Scenario: asking the API what is deployed.

use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use pygrid_cli::domain::ports::{Answer, ScriptedPrompter, StatusQuery};
use pygrid_cli::{finalize, ConfigDocument, HttpDeploymentApi, Session, StatusApp, StatusUseCase};

use crate::common::mock_healthy_root;

#[test]
fn prompted_app_lists_all_networks() {
    let server = MockServer::start();
    mock_healthy_root(&server);
    let networks = server.mock(|when, then| {
        when.method(GET).path("/deployed/networks");
        then.status(200)
            .json_body(json!([{ "id": 1, "status": "running" }]));
    });

    let api = HttpDeploymentApi::new(&server.base_url()).unwrap();
    let prompter = ScriptedPrompter::new([Answer::Select(1)]);

    let (query, response) = StatusUseCase::new(&prompter, &api).execute(None, None).unwrap();

    networks.assert();
    assert_eq!(query, StatusQuery::All(StatusApp::Network));
    assert!(response.is_ok());
    assert_eq!(response.body[0]["status"], "running");
}

#[test]
fn single_node_by_id() {
    let server = MockServer::start();
    let node = server.mock(|when, then| {
        when.method(GET).path("/deployed/node/42");
        then.status(200).json_body(json!({ "id": 42 }));
    });

    let api = HttpDeploymentApi::new(&server.base_url()).unwrap();
    let prompter = ScriptedPrompter::new(Vec::<Answer>::new());

    let (query, response) = StatusUseCase::new(&prompter, &api)
        .execute(Some(StatusApp::Node), Some(42))
        .unwrap();

    node.assert();
    assert_eq!(query.path(), "/deployed/node/42");
    assert_eq!(response.body["id"], 42);
    assert!(prompter.asked().is_empty());
}

#[test]
fn failed_query_is_returned_not_raised() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/deployed/nodes");
        then.status(503).body("maintenance");
    });

    let api = HttpDeploymentApi::new(&server.base_url()).unwrap();
    let prompter = ScriptedPrompter::new(Vec::<Answer>::new());

    let (_, response) = StatusUseCase::new(&prompter, &api)
        .execute(Some(StatusApp::Node), None)
        .unwrap();

    assert_eq!(response.status, 503);
    assert!(!response.is_ok());
}

#[test]
fn status_session_records_only_session_fields() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    mock_healthy_root(&server);
    server.mock(|when, then| {
        when.method(GET).path("/deployed/nodes");
        then.status(200).json_body(json!([]));
    });

    let api = HttpDeploymentApi::new(&server.base_url()).unwrap();
    let root = home.path().join(".pygrid/cli");
    let (session, document) = Session::init(&api, &root, "status.json").unwrap();
    assert!(!session.welcome.is_empty());

    let prompter = ScriptedPrompter::new(Vec::<Answer>::new());
    StatusUseCase::new(&prompter, &api)
        .execute(Some(StatusApp::Node), None)
        .unwrap();

    finalize(&document, &session.output_path).unwrap();
    let content = std::fs::read_to_string(&session.output_path).unwrap();
    let (_, persisted) = ConfigDocument::from_persisted_json(&content).unwrap();

    assert_eq!(persisted.api_url(), server.base_url());
    assert_eq!(persisted.output_file(), session.output_path.display().to_string());
    assert!(persisted.provider().is_none());
    assert!(persisted.app().is_none());
}
