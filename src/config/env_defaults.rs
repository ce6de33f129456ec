//! Prompt defaults taken from the environment
//!
//! The application-argument step offers these as defaults; absent
//! variables fall back to the built-in values below, or leave the
//! question without a default.

/// Built-in node port when `GRID_NODE_PORT` is unset
pub const DEFAULT_NODE_PORT: &str = "5000";
/// Built-in network port when `GRID_NETWORK_PORT` is unset
pub const DEFAULT_NETWORK_PORT: &str = "7000";
/// Built-in listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Built-in AWS region when `AWS_REGION` is unset
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Environment-derived defaults for the deploy prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvDefaults {
    /// `NODE_ID`
    pub node_id: Option<String>,
    /// `GRID_NODE_PORT`
    pub node_port: String,
    /// `GRID_NODE_HOST`
    pub node_host: String,
    /// `NETWORK`
    pub network: Option<String>,
    /// `GRID_NETWORK_PORT`
    pub network_port: String,
    /// `GRID_NETWORK_HOST`
    pub network_host: String,
    /// `AWS_REGION`
    pub aws_region: String,
}

impl EnvDefaults {
    /// Read from the process environment
    pub fn from_env() -> Self {
        Self::from_getter(|key| std::env::var(key).ok())
    }

    /// Read through `get_env`; empty values count as unset.
    pub fn from_getter(get_env: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| get_env(key).filter(|v| !v.is_empty());

        Self {
            node_id: get("NODE_ID"),
            node_port: get("GRID_NODE_PORT").unwrap_or_else(|| DEFAULT_NODE_PORT.to_string()),
            node_host: get("GRID_NODE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            network: get("NETWORK"),
            network_port: get("GRID_NETWORK_PORT")
                .unwrap_or_else(|| DEFAULT_NETWORK_PORT.to_string()),
            network_host: get("GRID_NETWORK_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            aws_region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
        }
    }
}

impl Default for EnvDefaults {
    fn default() -> Self {
        Self::from_getter(|_| None)
    }
}
