//! Scenario: first deployment of a node on AWS.

use httpmock::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

use pygrid_cli::domain::ports::{Answer, ScriptedPrompter};
use pygrid_cli::{
    finalize, ConfigDocument, DeployOptions, DeployOutcome, DeployUseCase, EnvDefaults,
    HttpDeploymentApi, PayloadEncoding, Session, SCHEMA_VERSION,
};

use crate::common::{mock_healthy_root, CREDENTIALS_JSON};

struct Fixture {
    home: TempDir,
    server: MockServer,
}

impl Fixture {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        let creds = home.path().join(".aws");
        std::fs::create_dir_all(&creds).unwrap();
        std::fs::write(creds.join("credentials.json"), CREDENTIALS_JSON).unwrap();

        let server = MockServer::start();
        mock_healthy_root(&server);
        Self { home, server }
    }

    fn root(&self) -> std::path::PathBuf {
        self.home.path().join(".pygrid/cli")
    }
}

fn scripted_node_answers(confirm: bool) -> Vec<Answer> {
    vec![
        Answer::Select(0), // AWS
        Answer::Default,   // ~/.aws/credentials.json
        Answer::Select(0), // Node
        Answer::Confirm(false),
        Answer::Confirm(false),
        Answer::text("n1"),
        Answer::text("5000"),
        Answer::text("0.0.0.0"),
        Answer::text("0.0.0.0:7000"),
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::Default,
        Answer::text("db-password"),
        Answer::Confirm(confirm),
    ]
}

#[test]
fn aws_node_is_submitted_and_recorded() {
    let fx = Fixture::new();
    let deploy = fx.server.mock(|when, then| {
        when.method(POST).path("/deploy");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "message": "Deployment in progress" }));
    });

    let api = HttpDeploymentApi::new(&fx.server.base_url()).unwrap();
    let (session, mut document) = Session::init(&api, &fx.root(), "aws-node.json").unwrap();

    let prompter = ScriptedPrompter::new(scripted_node_answers(true));
    let options = DeployOptions::new(fx.home.path()).with_env(EnvDefaults::default());
    let outcome = DeployUseCase::new(&prompter, &api)
        .execute(&mut document, &options)
        .unwrap();

    deploy.assert();
    assert!(outcome.is_success());
    let DeployOutcome::Submitted { response, .. } = &outcome else {
        panic!("expected a submission");
    };
    assert_eq!(response.body["message"], "Deployment in progress");

    finalize(&document, &session.output_path).unwrap();

    let content = std::fs::read_to_string(&session.output_path).unwrap();
    let (version, persisted) = ConfigDocument::from_persisted_json(&content).unwrap();
    assert_eq!(version, SCHEMA_VERSION);
    assert_eq!(persisted, document);

    let written: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(written["provider"], "aws");
    assert_eq!(
        written["app"],
        json!({
            "name": "node",
            "id": "n1",
            "port": "5000",
            "host": "0.0.0.0",
            "network": "0.0.0.0:7000"
        })
    );
    assert_eq!(written["serverless"], false);
    assert_eq!(written["websockets"], false);
    assert_eq!(
        written["vpc"],
        json!({
            "region": "us-east-1",
            "cidr_block": "10.0.0.0/16",
            "availability_zones": ["us-east-1a", "us-east-1b"]
        })
    );
    assert_eq!(written["credentials"]["cloud"]["client_id"], "abc");
    assert_eq!(written["credentials"]["db"]["engine"], "postgresql");
    assert_eq!(written["api_url"], fx.server.base_url());
}

#[test]
fn default_payload_posts_json_encoded_string() {
    let fx = Fixture::new();
    let deploy = fx.server.mock(|when, then| {
        when.method(POST)
            .path("/deploy")
            .header("content-type", "application/json")
            .body_contains(r#"\"provider\": \"aws\""#);
        then.status(200).json_body(json!({ "ok": true }));
    });

    let api = HttpDeploymentApi::new(&fx.server.base_url()).unwrap();
    let (_, mut document) = Session::init(&api, &fx.root(), "string.json").unwrap();

    let prompter = ScriptedPrompter::new(scripted_node_answers(true));
    DeployUseCase::new(&prompter, &api)
        .execute(&mut document, &DeployOptions::new(fx.home.path()))
        .unwrap();

    deploy.assert();
}

#[test]
fn object_payload_posts_structured_body() {
    let fx = Fixture::new();
    let deploy = fx.server.mock(|when, then| {
        when.method(POST)
            .path("/deploy")
            .json_body_partial(r#"{ "provider": "aws", "app": { "name": "node", "id": "n1" } }"#);
        then.status(200).json_body(json!({ "ok": true }));
    });

    let api = HttpDeploymentApi::new(&fx.server.base_url()).unwrap();
    let (_, mut document) = Session::init(&api, &fx.root(), "object.json").unwrap();

    let prompter = ScriptedPrompter::new(scripted_node_answers(true));
    DeployUseCase::new(&prompter, &api)
        .execute(
            &mut document,
            &DeployOptions::new(fx.home.path()).with_payload(PayloadEncoding::Object),
        )
        .unwrap();

    deploy.assert();
}

#[test]
fn declined_submission_is_recorded_without_credentials() {
    let fx = Fixture::new();
    let deploy = fx.server.mock(|when, then| {
        when.method(POST).path("/deploy");
        then.status(200);
    });

    let api = HttpDeploymentApi::new(&fx.server.base_url()).unwrap();
    let (session, mut document) = Session::init(&api, &fx.root(), "declined.json").unwrap();

    let prompter = ScriptedPrompter::new(scripted_node_answers(false));
    let outcome = DeployUseCase::new(&prompter, &api)
        .execute(&mut document, &DeployOptions::new(fx.home.path()))
        .unwrap();

    assert!(matches!(outcome, DeployOutcome::Declined { .. }));
    deploy.assert_hits(0);

    finalize(&document, &session.output_path).unwrap();
    let content = std::fs::read_to_string(&session.output_path).unwrap();
    let written: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(written["app"]["id"], "n1");
    assert!(written.get("vpc").is_some());
    assert!(written.get("credentials").is_none());
    assert!(!content.contains("db-password"));
}
