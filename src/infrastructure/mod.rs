//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Home and output directories, output writer, credentials loader
//! - `http/` - Deployment API client
//! - `prompt/` - Terminal prompter

pub mod fs;
pub mod http;
pub mod prompt;

pub use fs::{load_cloud_credentials, pygrid_home_dir, write_private};
pub use http::HttpDeploymentApi;
pub use prompt::DialoguerPrompter;
