//! PyGrid CLI - provisioning front-end for PyGrid deployments
//!
//! Collects the parameters of a node, network or worker deployment on AWS,
//! GCP or Azure, submits them to a PyGrid deployment API, queries deployed
//! instances, and keeps a local JSON record of every run.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    default_output_file_name, finalize, DeployOptions, DeployOutcome, DeployUseCase, Session,
    StatusUseCase, WELCOME_BANNER,
};
pub use config::{EnvDefaults, Settings};
pub use domain::entities::{AppConfig, ConfigDocument, SCHEMA_VERSION};
pub use domain::ports::{ApiResponse, DeploymentApi, Prompter, StatusQuery};
pub use domain::value_objects::{AppName, PayloadEncoding, Provider, StatusApp};
pub use error::{PygridError, PygridResult};
pub use infrastructure::{DialoguerPrompter, HttpDeploymentApi};
