//! Output file writer
//!
//! Writes the finalized configuration document. The document can contain
//! raw credential material, so on unix the file is kept owner-only, including
//! when an existing file is overwritten.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{PygridError, PygridResult};

/// Create `dir` and its parents; succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> PygridResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_private(path: &Path, content: &str) -> PygridResult<()> {
    write_private_inner(path, content).map_err(|source| PygridError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn write_private_inner(path: &Path, content: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    // `mode` only applies on creation; tighten a pre-existing file too
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()
}
