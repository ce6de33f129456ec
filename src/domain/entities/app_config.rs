//! AppConfig entity - the `app` record of a deployment
//!
//! The field set of the record is a function of the application name
//! (and, for networks, of the serverless flag). The enum makes illegal
//! combinations unrepresentable; the flat wire form is validated on the
//! way back in.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AppName;

/// Arguments collected for a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeArgs {
    pub id: String,
    pub port: String,
    pub host: String,
    /// Address of the network the node joins (e.g. `0.0.0.0:7000`)
    pub network: String,
}

/// Listen address for a hosted (non-serverless) network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPort {
    pub port: String,
    pub host: String,
}

/// Application identity plus its role-specific fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AppRecord", into = "AppRecord")]
pub enum AppConfig {
    Node(NodeArgs),
    /// `None` for serverless networks
    Network(Option<HostPort>),
    Worker,
}

impl AppConfig {
    pub fn name(&self) -> AppName {
        match self {
            AppConfig::Node(_) => AppName::Node,
            AppConfig::Network(_) => AppName::Network,
            AppConfig::Worker => AppName::Worker,
        }
    }

    /// Whether this record's field set is valid for the given deployment mode.
    ///
    /// Only networks depend on the mode: hosted networks carry a listen
    /// address, serverless ones do not.
    pub fn matches_serverless(&self, serverless: bool) -> bool {
        match self {
            AppConfig::Network(Some(_)) => !serverless,
            AppConfig::Network(None) => serverless,
            AppConfig::Node(_) | AppConfig::Worker => true,
        }
    }
}

/// Flat JSON shape of the `app` record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppRecord {
    name: AppName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    network: Option<String>,
}

impl From<AppConfig> for AppRecord {
    fn from(app: AppConfig) -> Self {
        let name = app.name();
        let mut record = AppRecord {
            name,
            id: None,
            port: None,
            host: None,
            network: None,
        };
        match app {
            AppConfig::Node(args) => {
                record.id = Some(args.id);
                record.port = Some(args.port);
                record.host = Some(args.host);
                record.network = Some(args.network);
            }
            AppConfig::Network(Some(listen)) => {
                record.port = Some(listen.port);
                record.host = Some(listen.host);
            }
            AppConfig::Network(None) | AppConfig::Worker => {}
        }
        record
    }
}

impl TryFrom<AppRecord> for AppConfig {
    type Error = String;

    fn try_from(record: AppRecord) -> Result<Self, Self::Error> {
        match (record.name, record.id, record.port, record.host, record.network) {
            (AppName::Node, Some(id), Some(port), Some(host), Some(network)) => {
                Ok(AppConfig::Node(NodeArgs {
                    id,
                    port,
                    host,
                    network,
                }))
            }
            (AppName::Node, ..) => Err("node requires id, port, host and network".to_string()),
            (AppName::Network, None, Some(port), Some(host), None) => {
                Ok(AppConfig::Network(Some(HostPort { port, host })))
            }
            (AppName::Network, None, None, None, None) => Ok(AppConfig::Network(None)),
            (AppName::Network, ..) => {
                Err("network takes either both port and host, or neither".to_string())
            }
            (AppName::Worker, None, None, None, None) => Ok(AppConfig::Worker),
            (AppName::Worker, ..) => Err("worker takes no arguments".to_string()),
        }
    }
}
