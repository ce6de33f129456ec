//! PyGrid CLI - deploy and inspect PyGrid nodes, networks and workers
//!
//! Usage: pygrid [--api-url URL] [--output-file NAME] <COMMAND>
//!
//! Commands:
//!   deploy  Configure a deployment interactively and submit it
//!   status  Show deployed nodes or networks
//!
//! Every run that reaches the API writes the collected configuration to
//! `~/.pygrid/cli/<output-file>`, whatever the command's outcome.

mod cli;
mod commands;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pygrid_cli::config::{load_or_default, ColorMode, Settings, SETTINGS_FILE};
use pygrid_cli::infrastructure::fs::pygrid_root_dir;
use pygrid_cli::DialoguerPrompter;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::deploy::{cmd_deploy, DeployArgs};
use commands::session::{finish, resolve_api_url, start};
use commands::status::cmd_status;
use ui::context::UiContext;
use ui::error::print_error;
use ui::output::print_config_warnings;
use ui::theme::PygridTheme;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Settings pick the color mode, so failures before they load use auto
    let early_ui = || UiContext::new(cli.color, ColorMode::Auto);

    let root = match pygrid_root_dir() {
        Ok(root) => root,
        Err(err) => return fail(&early_ui(), err.into()),
    };

    let (settings, warnings) = match load_or_default(&root) {
        Ok(loaded) => loaded,
        Err(err) => return fail(&early_ui(), err.into()),
    };

    let ui = UiContext::new(cli.color, settings.output.color);
    print_config_warnings(&ui, &root.join(SETTINGS_FILE), &warnings);

    match run(&cli, &ui, &settings, &root) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&ui, err),
    }
}

fn fail(ui: &UiContext, err: anyhow::Error) -> ExitCode {
    print_error(ui, &err);
    ExitCode::FAILURE
}

/// `-v` info, `-vv` debug, `-vvv` trace; `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, ui: &UiContext, settings: &Settings, root: &Path) -> Result<()> {
    let prompter = DialoguerPrompter::new(Box::new(PygridTheme::new(ui.unicode)));

    let api_url = resolve_api_url(cli.api_url.as_deref(), settings, &prompter)?;
    let (api, session, mut document) =
        start(ui, &api_url, cli.output_file.as_deref(), root)?;

    let outcome = match &cli.command {
        Commands::Deploy {
            provider,
            app,
            payload,
            yes,
            dry_run,
        } => cmd_deploy(
            ui,
            &prompter,
            &api,
            settings,
            &mut document,
            DeployArgs {
                provider: *provider,
                app: *app,
                payload: *payload,
                yes: *yes,
                dry_run: *dry_run,
            },
        ),
        Commands::Status { app, id } => cmd_status(ui, &prompter, &api, *app, *id),
    };

    finish(ui, &session, &document, outcome)
}
