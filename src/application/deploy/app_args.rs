//! Application-argument step
//!
//! Collects the role-specific fields of the `app` record. Which questions
//! are asked depends on the application and, for networks, on whether the
//! deployment is serverless.

use crate::config::EnvDefaults;
use crate::domain::entities::{AppConfig, HostPort, NodeArgs};
use crate::domain::ports::Prompter;
use crate::domain::value_objects::AppName;
use crate::error::PygridResult;

pub const NODE_ID_PROMPT: &str = "PyGrid Node ID";
pub const PORT_PROMPT: &str = "Port number of the socket.io server";
pub const NODE_HOST_PROMPT: &str = "Grid node host";
pub const NETWORK_ADDRESS_PROMPT: &str = "Grid Network address (e.g. --network=0.0.0.0:7000)";
pub const NETWORK_HOST_PROMPT: &str = "Grid Network host";

/// Ask for the fields `app` needs and build its record.
pub fn collect_app_args(
    app: AppName,
    serverless: bool,
    prompter: &dyn Prompter,
    env: &EnvDefaults,
) -> PygridResult<AppConfig> {
    match app {
        AppName::Node => {
            let id = prompter.input(NODE_ID_PROMPT, env.node_id.as_deref())?;
            let port = prompter.input(PORT_PROMPT, Some(&env.node_port))?;
            let host = prompter.input(NODE_HOST_PROMPT, Some(&env.node_host))?;
            let network = prompter.input(NETWORK_ADDRESS_PROMPT, env.network.as_deref())?;
            Ok(AppConfig::Node(NodeArgs {
                id,
                port,
                host,
                network,
            }))
        }
        AppName::Network if serverless => Ok(AppConfig::Network(None)),
        AppName::Network => {
            let port = prompter.input(PORT_PROMPT, Some(&env.network_port))?;
            let host = prompter.input(NETWORK_HOST_PROMPT, Some(&env.network_host))?;
            Ok(AppConfig::Network(Some(HostPort { port, host })))
        }
        AppName::Worker => Ok(AppConfig::Worker),
    }
}
