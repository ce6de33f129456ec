//! Finalizer
//!
//! Persists whatever the command collected to the output path. Runs after
//! every subcommand, whether it succeeded, was declined or failed.

use std::path::Path;

use tracing::info;

use crate::domain::entities::ConfigDocument;
use crate::error::PygridResult;
use crate::infrastructure::fs::write_private;

/// Write `document` (stamped with its schema version) to `path`.
pub fn finalize(document: &ConfigDocument, path: &Path) -> PygridResult<()> {
    let content = document.to_persisted_json()?;
    write_private(path, &content)?;
    info!(
        path = %path.display(),
        has_credentials = document.credentials().is_some(),
        "configuration written"
    );
    Ok(())
}
