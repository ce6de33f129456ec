use anyhow::Result;
use pygrid_cli::{DeploymentApi, Prompter, PygridError, StatusApp, StatusUseCase};

use crate::ui::context::UiContext;
use crate::ui::views::status::render_status;

pub fn cmd_status(
    ui: &UiContext,
    prompter: &dyn Prompter,
    api: &dyn DeploymentApi,
    app: Option<StatusApp>,
    id: Option<u64>,
) -> Result<()> {
    let (query, response) = StatusUseCase::new(prompter, api).execute(app, id)?;

    if !response.is_ok() {
        return Err(PygridError::StatusUnavailable {
            status: response.status,
        }
        .into());
    }

    print!("{}", render_status(&query, &response, ui.color, ui.unicode));
    Ok(())
}
