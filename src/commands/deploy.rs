use anyhow::Result;
use pygrid_cli::config::Settings;
use pygrid_cli::infrastructure::fs::require_home_dir;
use pygrid_cli::{
    AppName, ConfigDocument, DeployOptions, DeployOutcome, DeployUseCase, DeploymentApi,
    EnvDefaults, PayloadEncoding, Prompter, Provider, PygridError,
};

use crate::ui::context::UiContext;
use crate::ui::views::deploy::{render_deploy_header, render_deploy_outcome};

/// Flags of `pygrid deploy`
#[derive(Debug, Clone, Copy)]
pub struct DeployArgs {
    pub provider: Option<Provider>,
    pub app: Option<AppName>,
    pub payload: Option<PayloadEncoding>,
    pub yes: bool,
    pub dry_run: bool,
}

pub fn cmd_deploy(
    ui: &UiContext,
    prompter: &dyn Prompter,
    api: &dyn DeploymentApi,
    settings: &Settings,
    document: &mut ConfigDocument,
    args: DeployArgs,
) -> Result<()> {
    print!(
        "{}",
        render_deploy_header(args.provider, args.dry_run, ui.color, ui.unicode)
    );

    let options = DeployOptions::new(require_home_dir()?)
        .with_provider(args.provider)
        .with_app(args.app)
        .with_payload(args.payload.unwrap_or(settings.deploy.payload))
        .with_assume_yes(args.yes)
        .with_dry_run(args.dry_run)
        .with_env(EnvDefaults::from_env());

    let outcome = DeployUseCase::new(prompter, api).execute(document, &options)?;

    // The confirmation prompt already showed the document
    let prompted = !args.yes && !args.dry_run;
    print!(
        "{}",
        render_deploy_outcome(&outcome, !prompted, ui.color, ui.unicode)
    );

    match outcome {
        DeployOutcome::Submitted { response, .. } if !response.is_ok() => {
            Err(PygridError::DeployRejected {
                status: response.status,
            }
            .into())
        }
        _ => Ok(()),
    }
}
