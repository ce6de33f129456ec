//! File System Implementations
//!
//! Home resolution, the output root, the output writer and the credentials
//! loader.

mod credentials;
mod home;
mod output;

pub use credentials::{default_credentials_path, load_cloud_credentials};
pub use home::{
    pygrid_home_dir, pygrid_root_dir, require_home_dir, PYGRID_ROOT_DIR, PYGRID_TEST_HOME_VAR,
};
pub use output::{ensure_dir, write_private};
