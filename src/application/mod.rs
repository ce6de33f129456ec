//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Session` - Probes the API and prepares the output root
//! - `DeployUseCase` - Collects a deployment and submits it
//! - `StatusUseCase` - Queries deployed nodes and networks
//! - `finalize` - Persists the collected configuration

pub mod deploy;
pub mod finalize;
pub mod session;
pub mod status;

pub use deploy::{DeployOptions, DeployOutcome, DeployUseCase};
pub use finalize::finalize;
pub use session::{default_output_file_name, Session, WELCOME_BANNER};
pub use status::StatusUseCase;
