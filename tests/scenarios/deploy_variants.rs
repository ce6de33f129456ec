//! Scenario: deployments that do not end in an accepted submission.

use httpmock::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

use pygrid_cli::domain::ports::{Answer, ScriptedPrompter};
use pygrid_cli::{
    finalize, AppName, DeployOptions, DeployOutcome, DeployUseCase, HttpDeploymentApi,
    PygridError, Provider, Session,
};

use crate::common::{mock_healthy_root, CREDENTIALS_JSON};

fn home_with(provider: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(format!(".{provider}"));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("credentials.json"), CREDENTIALS_JSON).unwrap();
    home
}

#[test]
fn rejected_deployment_still_leaves_full_record() {
    let home = home_with("gcp");
    let server = MockServer::start();
    mock_healthy_root(&server);
    let deploy = server.mock(|when, then| {
        when.method(POST).path("/deploy");
        then.status(500).body("quota exceeded");
    });

    let api = HttpDeploymentApi::new(&server.base_url()).unwrap();
    let root = home.path().join(".pygrid/cli");
    let (session, mut document) = Session::init(&api, &root, "rejected.json").unwrap();

    // credentials path, serverless, websockets, db engine, db user, db password
    let prompter = ScriptedPrompter::new([
        Answer::Default,
        Answer::Confirm(true),
        Answer::Confirm(false),
        Answer::Default,
        Answer::Default,
        Answer::text("pw"),
    ]);
    let options = DeployOptions::new(home.path())
        .with_provider(Some(Provider::Gcp))
        .with_app(Some(AppName::Worker))
        .with_assume_yes(true);

    let outcome = DeployUseCase::new(&prompter, &api)
        .execute(&mut document, &options)
        .unwrap();

    deploy.assert();
    assert!(!outcome.is_success());
    let DeployOutcome::Submitted { response, .. } = outcome else {
        panic!("expected a submission");
    };
    assert_eq!(response.status, 500);
    assert_eq!(response.body, json!("quota exceeded"));

    finalize(&document, &session.output_path).unwrap();
    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&session.output_path).unwrap()).unwrap();
    assert_eq!(written["provider"], "gcp");
    assert_eq!(written["app"], json!({ "name": "worker" }));
    assert_eq!(written["serverless"], true);
    assert_eq!(written["credentials"]["db"]["password"], "pw");
}

#[test]
fn dry_run_never_reaches_deploy_endpoint() {
    let home = home_with("azure");
    let server = MockServer::start();
    mock_healthy_root(&server);
    let deploy = server.mock(|when, then| {
        when.method(POST).path("/deploy");
        then.status(200);
    });

    let api = HttpDeploymentApi::new(&server.base_url()).unwrap();
    let root = home.path().join(".pygrid/cli");
    let (session, mut document) = Session::init(&api, &root, "dry.json").unwrap();

    // credentials, serverless, websockets, port, host, db engine, db user, db password
    let prompter = ScriptedPrompter::new([
        Answer::Default,
        Answer::Confirm(false),
        Answer::Confirm(true),
        Answer::text("7001"),
        Answer::Default,
        Answer::Select(1),
        Answer::Default,
        Answer::text("pw"),
    ]);
    let options = DeployOptions::new(home.path())
        .with_provider(Some(Provider::Azure))
        .with_app(Some(AppName::Network))
        .with_dry_run(true);

    let outcome = DeployUseCase::new(&prompter, &api)
        .execute(&mut document, &options)
        .unwrap();

    deploy.assert_hits(0);
    assert!(matches!(outcome, DeployOutcome::DryRun { .. }));
    let preview: Value = serde_json::from_str(outcome.preview()).unwrap();
    assert_eq!(
        preview["app"],
        json!({ "name": "network", "port": "7001", "host": "0.0.0.0" })
    );
    assert!(preview.get("credentials").is_none());

    finalize(&document, &session.output_path).unwrap();
    assert!(session.output_path.exists());
}

#[test]
fn unreadable_credentials_stop_before_any_submission() {
    let home = TempDir::new().unwrap();
    let bad = home.path().join("broken.json");
    std::fs::write(&bad, "not json").unwrap();

    let server = MockServer::start();
    mock_healthy_root(&server);
    let deploy = server.mock(|when, then| {
        when.method(POST).path("/deploy");
        then.status(200);
    });

    let api = HttpDeploymentApi::new(&server.base_url()).unwrap();
    let root = home.path().join(".pygrid/cli");
    let (session, mut document) = Session::init(&api, &root, "broken.json").unwrap();

    let prompter = ScriptedPrompter::new([Answer::text(bad.display().to_string())]);
    let err = DeployUseCase::new(&prompter, &api)
        .execute(
            &mut document,
            &DeployOptions::new(home.path()).with_provider(Some(Provider::Aws)),
        )
        .unwrap_err();

    assert!(matches!(err, PygridError::InvalidCredentials { .. }));
    deploy.assert_hits(0);

    finalize(&document, &session.output_path).unwrap();
    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&session.output_path).unwrap()).unwrap();
    assert_eq!(written["provider"], "aws");
    assert!(written.get("app").is_none());
}
