//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the Windows system API rather than
//! environment variables, so setting `HOME` in tests has no effect there.
//! `pygrid_home_dir()` checks `PYGRID_TEST_HOME` first and falls back to
//! `dirs::home_dir()`.
//!
//! Every path the CLI derives from the home directory goes through here:
//! the output root (`~/.pygrid/cli`), the settings file and the default
//! credentials path (`~/.<provider>/credentials.json`).

use std::path::PathBuf;

use crate::error::{PygridError, PygridResult};

/// Environment variable for test isolation of home directory.
pub const PYGRID_TEST_HOME_VAR: &str = "PYGRID_TEST_HOME";

/// Directory under home where configurations are written
pub const PYGRID_ROOT_DIR: &str = ".pygrid/cli";

/// Get the home directory for PyGrid CLI paths.
///
/// # Returns
///
/// - `Some(PathBuf)` - `PYGRID_TEST_HOME` if set, else the system home
/// - `None` - If neither can be resolved
pub fn pygrid_home_dir() -> Option<PathBuf> {
    std::env::var(PYGRID_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Like [`pygrid_home_dir`], but an unresolvable home is an error.
pub fn require_home_dir() -> PygridResult<PathBuf> {
    pygrid_home_dir().ok_or(PygridError::HomeDirUnavailable)
}

/// `~/.pygrid/cli`
pub fn pygrid_root_dir() -> PygridResult<PathBuf> {
    Ok(require_home_dir()?.join(PYGRID_ROOT_DIR))
}
