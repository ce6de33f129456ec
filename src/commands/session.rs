use std::path::Path;

use anyhow::Result;
use chrono::Local;
use pygrid_cli::config::Settings;
use pygrid_cli::{
    default_output_file_name, finalize, ConfigDocument, HttpDeploymentApi, Prompter, Session,
};

use crate::ui::context::UiContext;
use crate::ui::error::print_error;
use crate::ui::output::print_credentials_warning;
use crate::ui::views::session::{render_welcome, render_writing_configs};

pub const API_URL_PROMPT: &str = "API URL";

/// `--api-url`, else `PYGRID_API_URL` / settings file, else ask.
pub fn resolve_api_url(
    flag: Option<&str>,
    settings: &Settings,
    prompter: &dyn Prompter,
) -> Result<String> {
    if let Some(url) = flag.filter(|u| !u.trim().is_empty()) {
        return Ok(url.to_string());
    }
    if let Some(url) = settings.api_url.as_deref().filter(|u| !u.trim().is_empty()) {
        return Ok(url.to_string());
    }
    Ok(prompter.input(API_URL_PROMPT, None)?)
}

/// Probe the API and prepare the output root; prints the welcome banner.
pub fn start(
    ui: &UiContext,
    api_url: &str,
    output_file: Option<&str>,
    root: &Path,
) -> Result<(HttpDeploymentApi, Session, ConfigDocument)> {
    let api = HttpDeploymentApi::new(api_url)?;
    let output_file = output_file
        .map(str::to_string)
        .unwrap_or_else(|| default_output_file_name(Local::now()));

    let (session, document) = Session::init(&api, root, &output_file)?;
    print!("{}", render_welcome(&session, ui.color, ui.unicode));
    Ok((api, session, document))
}

/// Write the document, then hand back the command's own result.
///
/// A failed command still gets its document written; if both fail, the
/// write error is printed here and the command error is returned.
pub fn finish(
    ui: &UiContext,
    session: &Session,
    document: &ConfigDocument,
    outcome: Result<()>,
) -> Result<()> {
    print!("{}", render_writing_configs(&session.output_path, ui.unicode));
    let written = finalize(document, &session.output_path);

    if written.is_ok() && document.credentials().is_some() {
        print_credentials_warning(ui, &session.output_path);
    }

    match (outcome, written) {
        (Err(err), Err(write_err)) => {
            print_error(ui, &anyhow::Error::new(write_err));
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), written) => Ok(written?),
    }
}
