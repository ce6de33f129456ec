//! Domain Ports
//!
//! Interfaces that infrastructure implements and use cases depend on.

mod deployment_api;
mod prompter;

pub use deployment_api::{ApiResponse, DeploymentApi, StatusQuery};
pub use prompter::{Answer, Prompter, ScriptedPrompter};
