//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::path::PathBuf;

use crate::config::EnvDefaults;
use crate::domain::value_objects::{AppName, PayloadEncoding, Provider};

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Home directory; default credentials live at `<home>/.<provider>/credentials.json`
    pub home_dir: PathBuf,
    /// Cloud provider chosen on the command line (prompted otherwise)
    pub provider: Option<Provider>,
    /// Application chosen on the command line (prompted otherwise)
    pub app: Option<AppName>,
    /// Shape of the `POST /deploy` body
    pub payload: PayloadEncoding,
    /// Skip the final confirmation
    pub assume_yes: bool,
    /// Render the document and stop before submitting
    pub dry_run: bool,
    /// Defaults offered by the application-argument and VPC prompts
    pub env: EnvDefaults,
}

impl DeployOptions {
    pub fn new(home_dir: impl Into<PathBuf>) -> Self {
        Self {
            home_dir: home_dir.into(),
            provider: None,
            app: None,
            payload: PayloadEncoding::default(),
            assume_yes: false,
            dry_run: false,
            env: EnvDefaults::default(),
        }
    }

    pub fn with_provider(mut self, provider: Option<Provider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_app(mut self, app: Option<AppName>) -> Self {
        self.app = app;
        self
    }

    pub fn with_payload(mut self, payload: PayloadEncoding) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_env(mut self, env: EnvDefaults) -> Self {
        self.env = env;
        self
    }
}
