//! Settings type definitions

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PayloadEncoding;

/// Color mode for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// `[deploy]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploySettings {
    /// Shape of the `/deploy` request body
    #[serde(default)]
    pub payload: PayloadEncoding,
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub color: ColorMode,
}

/// CLI settings, read from `~/.pygrid/cli/config.toml`
///
/// ```toml
/// api_url = "http://localhost:5000"
///
/// [deploy]
/// payload = "string"   # or "object"
///
/// [output]
/// color = "auto"       # "always" | "never"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Deployment API base URL used when `--api-url` is not given
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(default)]
    pub deploy: DeploySettings,

    #[serde(default)]
    pub output: OutputSettings,
}
