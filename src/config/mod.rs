//! Configuration module for the PyGrid CLI
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (PYGRID_*)
//! 3. Settings file (~/.pygrid/cli/config.toml)
//! 4. Built-in defaults
//!
//! Prompt defaults for the deploy workflow (`NODE_ID`, `GRID_NODE_PORT`, ...)
//! live in [`EnvDefaults`].

mod env_defaults;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_defaults::{
    EnvDefaults, DEFAULT_AWS_REGION, DEFAULT_HOST, DEFAULT_NETWORK_PORT, DEFAULT_NODE_PORT,
};
pub use loader::{load_or_default, load_with_warnings, with_env_overrides, SETTINGS_FILE};
pub use types::{ColorMode, DeploySettings, OutputSettings, Settings};
