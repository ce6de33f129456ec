//! Session Initialization
//!
//! Runs before any subcommand:
//! 0. Check the output file name stays inside the output root
//! 1. Probe the API root (`GET {api_url}`)
//! 2. Create the output root (`~/.pygrid/cli`)
//! 3. Compute the output path from the root and the file name
//!
//! Returns the session plus the fresh configuration document the
//! subcommand will grow.

use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, TimeZone};
use tracing::{debug, info};

use crate::domain::entities::ConfigDocument;
use crate::domain::ports::DeploymentApi;
use crate::config::SETTINGS_FILE;
use crate::error::{PygridError, PygridResult};
use crate::infrastructure::fs::ensure_dir;

/// Banner printed after a successful health probe
pub const WELCOME_BANNER: &str = "Welcome to OpenMined PyGrid CLI";

/// Output file name for a run started at `now`: `config_YYYY-mm-dd_HHMMSS.json`
pub fn default_output_file_name<Tz>(now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format("config_%Y-%m-%d_%H%M%S.json").to_string()
}

/// Accept only a bare file name, so the output lands directly under the root.
///
/// The settings file shares the root and is refused as well.
pub fn validate_output_file(name: &str) -> PygridResult<()> {
    let invalid = |reason| PygridError::InvalidOutputFile {
        name: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("the name is empty"));
    }
    if name.contains(&['/', '\\'][..]) {
        return Err(invalid("expected a file name, not a path"));
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => return Err(invalid("expected a file name, not a path")),
    }
    if name == SETTINGS_FILE {
        return Err(invalid("this name is reserved for the settings file"));
    }
    Ok(())
}

/// State established by the root initializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub api_url: String,
    pub root_dir: PathBuf,
    pub output_path: PathBuf,
    /// `message` field of the health probe answer
    pub welcome: String,
}

impl Session {
    /// Probe the API, then create the output root.
    ///
    /// Nothing touches the filesystem if the file name is refused or the
    /// probe fails.
    pub fn init(
        api: &dyn DeploymentApi,
        root_dir: &Path,
        output_file: &str,
    ) -> PygridResult<(Session, ConfigDocument)> {
        validate_output_file(output_file)?;
        let welcome = api.health()?;
        info!(api_url = api.base_url(), "health probe succeeded");

        ensure_dir(root_dir)?;
        let output_path = root_dir.join(output_file);
        debug!(path = %output_path.display(), "output path resolved");

        let document = ConfigDocument::new(
            api.base_url(),
            root_dir.display().to_string(),
            output_path.display().to_string(),
        );

        let session = Session {
            api_url: api.base_url().to_string(),
            root_dir: root_dir.to_path_buf(),
            output_path,
            welcome,
        };
        Ok((session, document))
    }
}
