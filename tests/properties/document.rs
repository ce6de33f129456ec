//! Properties of the configuration document and the values derived from it.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use pygrid_cli::domain::entities::{AppConfig, NodeArgs};
use pygrid_cli::domain::ports::StatusQuery;
use pygrid_cli::{default_output_file_name, ConfigDocument, PygridError, StatusApp};

fn document() -> ConfigDocument {
    ConfigDocument::new(
        "http://localhost:5000",
        "/home/me/.pygrid/cli",
        "/home/me/.pygrid/cli/out.json",
    )
}

proptest! {
    #[test]
    fn output_file_name_has_fixed_shape(secs in 0i64..4_102_444_800) {
        let now = Utc.timestamp_opt(secs, 0).unwrap();
        let name = default_output_file_name(now);

        prop_assert!(name.starts_with("config_"));
        prop_assert!(name.ends_with(".json"));
        // config_YYYY-MM-DD_HHMMSS.json
        prop_assert_eq!(name.len(), 29);
        prop_assert_eq!(&name[17..18], "_");
    }

    #[test]
    fn status_path_embeds_id(id in any::<u64>(), network in any::<bool>()) {
        let app = if network { StatusApp::Network } else { StatusApp::Node };
        let path = StatusQuery::new(app, Some(id)).path();
        prop_assert_eq!(path, format!("/deployed/{}/{}", app.as_str(), id));
    }

    #[test]
    fn node_answers_survive_persistence(
        id in ".{0,16}",
        port in "[0-9]{1,5}",
        host in "[a-z0-9.]{1,20}",
        network in "[a-z0-9.:]{1,24}",
    ) {
        let mut doc = document();
        doc.set_serverless(false).unwrap();
        doc.set_app(AppConfig::Node(NodeArgs { id, port, host, network })).unwrap();

        let (_, restored) =
            ConfigDocument::from_persisted_json(&doc.to_persisted_json().unwrap()).unwrap();
        prop_assert_eq!(restored, doc);
    }

    #[test]
    fn fields_are_never_overwritten(first in any::<bool>(), second in any::<bool>()) {
        let mut doc = document();
        doc.set_websockets(first).unwrap();

        let err = doc.set_websockets(second).unwrap_err();
        let is_already_set = matches!(err, PygridError::FieldAlreadySet { .. });
        prop_assert!(is_already_set);
        prop_assert_eq!(doc.websockets(), Some(first));
    }
}
