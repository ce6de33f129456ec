//! Domain Entities
//!
//! - `ConfigDocument` - the deployment configuration a command accumulates
//! - `AppConfig` - the role-specific `app` record
//! - `VpcConfig` / `DbConfig` - provider-side fragments

mod app_config;
mod config_document;
mod provider_config;

pub use app_config::{AppConfig, HostPort, NodeArgs};
pub use config_document::{ConfigDocument, Credentials, Submission, SCHEMA_VERSION};
pub use provider_config::{DbConfig, DbEngine, VpcConfig};
