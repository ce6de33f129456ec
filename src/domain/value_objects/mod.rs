//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod app_name;
mod config_warning;
mod payload_encoding;
mod provider;

pub use app_name::{AppName, StatusApp};
pub use config_warning::ConfigWarning;
pub use payload_encoding::PayloadEncoding;
pub use provider::Provider;
