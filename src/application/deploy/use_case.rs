//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Choose the cloud provider
//! 2. Load the provider credentials file
//! 3. Choose the application
//! 4. Ask whether the deployment is serverless
//! 5. Ask whether websockets are needed
//! 6. Collect the application arguments
//! 7. Collect the VPC layout (AWS only)
//! 8. Collect the database settings
//! 9. Show the document and confirm
//! 10. Submit it to `POST /deploy`
//!
//! The provider and the two flags are written into the caller's document
//! as soon as they are answered. The app record is written once its
//! arguments are collected, since its field set depends on them, and the
//! VPC right after its own questions. An interrupted run leaves whatever
//! was written behind for the finalizer; an app chosen but not yet
//! configured is not recorded.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::entities::{ConfigDocument, Credentials};
use crate::domain::ports::{DeploymentApi, Prompter};
use crate::domain::value_objects::{AppName, Provider};
use crate::error::PygridResult;
use crate::infrastructure::fs::{default_credentials_path, load_cloud_credentials};

use super::app_args::collect_app_args;
use super::collaborators::{collect_db, collect_vpc};
use super::options::DeployOptions;
use super::result::DeployOutcome;

pub const PROVIDER_PROMPT: &str = "Cloud Provider";
pub const APP_PROMPT: &str = "PyGrid App";
pub const SERVERLESS_PROMPT: &str = "Do you want to deploy serverless?";
pub const WEBSOCKETS_PROMPT: &str = "Will you need to support Websockets?";

/// Question asked before submitting, with the rendered document inline
pub fn confirmation_prompt(preview: &str) -> String {
    format!("Your current configuration is:\n\n{}\n\nContinue?", preview)
}

/// Credentials path question for `provider`
pub fn credentials_prompt(provider: Provider) -> String {
    format!(
        "Please enter path to your {} credentials json file",
        provider.display_name()
    )
}

/// Deploy use case - drives the questions and the submission
pub struct DeployUseCase<'a> {
    prompter: &'a dyn Prompter,
    api: &'a dyn DeploymentApi,
}

impl<'a> DeployUseCase<'a> {
    pub fn new(prompter: &'a dyn Prompter, api: &'a dyn DeploymentApi) -> Self {
        Self { prompter, api }
    }

    /// Execute the deploy use case against `document`.
    ///
    /// A non-200 answer from the API is reported through the outcome, not
    /// as an error; see [`DeployOutcome::is_success`].
    pub fn execute(
        &self,
        document: &mut ConfigDocument,
        options: &DeployOptions,
    ) -> PygridResult<DeployOutcome> {
        let provider = match options.provider {
            Some(p) => p,
            None => self.ask_provider()?,
        };
        document.set_provider(provider)?;
        info!(%provider, "provider selected");

        let credentials_path = self.ask_credentials_path(provider, options)?;
        let mut credentials = Credentials::new(load_cloud_credentials(&credentials_path)?);
        debug!(path = %credentials_path.display(), "cloud credentials loaded");

        let app = match options.app {
            Some(a) => a,
            None => self.ask_app()?,
        };

        let serverless = self.prompter.confirm(SERVERLESS_PROMPT, false)?;
        document.set_serverless(serverless)?;
        let websockets = self.prompter.confirm(WEBSOCKETS_PROMPT, false)?;
        document.set_websockets(websockets)?;

        document.set_app(collect_app_args(app, serverless, self.prompter, &options.env)?)?;
        info!(%app, serverless, websockets, "application configured");

        if provider.requires_vpc() {
            document.attach_vpc(collect_vpc(self.prompter, &options.env)?)?;
        } else {
            debug!(%provider, "no provider-specific network step");
        }

        credentials.db = Some(collect_db(self.prompter)?);

        let preview = document.to_pretty_json()?;

        if options.dry_run {
            info!("dry run, not submitting");
            return Ok(DeployOutcome::DryRun { preview });
        }

        if !options.assume_yes
            && !self
                .prompter
                .confirm(&confirmation_prompt(&preview), false)?
        {
            info!("submission declined");
            return Ok(DeployOutcome::Declined { preview });
        }

        document.attach_credentials(credentials)?;
        let body = document.submission()?.body(options.payload)?;
        let response = self.api.deploy(&body)?;

        if !response.is_ok() {
            warn!(status = response.status, "deployment rejected");
        }

        Ok(DeployOutcome::Submitted { preview, response })
    }

    fn ask_provider(&self) -> PygridResult<Provider> {
        let names: Vec<&str> = Provider::ALL.iter().map(Provider::display_name).collect();
        let index = self.prompter.select(PROVIDER_PROMPT, &names, 0)?;
        Ok(Provider::ALL[index])
    }

    fn ask_app(&self) -> PygridResult<AppName> {
        let names: Vec<&str> = AppName::ALL.iter().map(AppName::display_name).collect();
        let index = self.prompter.select(APP_PROMPT, &names, 0)?;
        Ok(AppName::ALL[index])
    }

    fn ask_credentials_path(
        &self,
        provider: Provider,
        options: &DeployOptions,
    ) -> PygridResult<PathBuf> {
        let default = default_credentials_path(&options.home_dir, provider);
        let default = default.display().to_string();
        let answer = self
            .prompter
            .input(&credentials_prompt(provider), Some(&default))?;
        Ok(PathBuf::from(answer))
    }
}
