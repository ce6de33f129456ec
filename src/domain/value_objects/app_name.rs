//! Application value objects - which PyGrid role is deployed or queried

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// PyGrid application role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AppName {
    /// Data-hosting/compute instance
    Node,
    /// Coordinator brokering between nodes
    Network,
    /// Worker (no arguments collected yet)
    Worker,
}

impl AppName {
    /// All applications in prompt order (the first is the default)
    pub const ALL: [AppName; 3] = [AppName::Node, AppName::Network, AppName::Worker];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppName::Node => "node",
            AppName::Network => "network",
            AppName::Worker => "worker",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AppName::Node => "Node",
            AppName::Network => "Network",
            AppName::Worker => "Worker",
        }
    }
}

impl FromStr for AppName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown app '{}' (expected Node, Network or Worker)", s))
    }
}

impl std::fmt::Display for AppName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application kinds the status endpoint knows about.
///
/// Workers are not tracked by the deployment API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatusApp {
    Node,
    Network,
}

impl StatusApp {
    pub const ALL: [StatusApp; 2] = [StatusApp::Node, StatusApp::Network];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusApp::Node => "node",
            StatusApp::Network => "network",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusApp::Node => "Node",
            StatusApp::Network => "Network",
        }
    }
}

impl From<StatusApp> for AppName {
    fn from(app: StatusApp) -> Self {
        match app {
            StatusApp::Node => AppName::Node,
            StatusApp::Network => AppName::Network,
        }
    }
}
