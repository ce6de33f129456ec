//! Deploy Module
//!
//! Collects a deployment interactively and submits it.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Outcome types (`DeployOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//! - `app_args` - Role-specific `app` fields
//! - `collaborators` - VPC and database questions
//!
//! ## Usage
//!
//! ```ignore
//! use pygrid_cli::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(&prompter, &api);
//! let outcome = use_case.execute(&mut document, &DeployOptions::new(home))?;
//! ```

pub mod app_args;
pub mod collaborators;
mod options;
mod result;
mod use_case;

pub use app_args::collect_app_args;
pub use collaborators::{collect_db, collect_vpc};
pub use options::DeployOptions;
pub use result::DeployOutcome;
pub use use_case::{
    confirmation_prompt, credentials_prompt, DeployUseCase, APP_PROMPT, PROVIDER_PROMPT,
    SERVERLESS_PROMPT, WEBSOCKETS_PROMPT,
};
