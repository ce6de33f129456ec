//! Cloud credentials file loader

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::value_objects::Provider;
use crate::error::{PygridError, PygridResult};

/// `<home>/.<provider>/credentials.json`
pub fn default_credentials_path(home: &Path, provider: Provider) -> PathBuf {
    home.join(format!(".{}", provider.as_str()))
        .join("credentials.json")
}

/// Read and parse a credentials file as JSON.
///
/// Any failure (missing file, unreadable, not JSON) is reported as
/// [`PygridError::InvalidCredentials`].
pub fn load_cloud_credentials(path: &Path) -> PygridResult<Value> {
    let content =
        std::fs::read_to_string(path).map_err(|e| PygridError::InvalidCredentials {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    serde_json::from_str(&content).map_err(|e| PygridError::InvalidCredentials {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
