//! Status Use Case
//!
//! Asks the deployment API about deployed nodes or networks, either all of
//! one kind or a single instance by id.

use tracing::debug;

use crate::domain::ports::{ApiResponse, DeploymentApi, Prompter, StatusQuery};
use crate::domain::value_objects::StatusApp;
use crate::error::PygridResult;

pub const STATUS_APP_PROMPT: &str = "PyGrid App";

/// Status use case
pub struct StatusUseCase<'a> {
    prompter: &'a dyn Prompter,
    api: &'a dyn DeploymentApi,
}

impl<'a> StatusUseCase<'a> {
    pub fn new(prompter: &'a dyn Prompter, api: &'a dyn DeploymentApi) -> Self {
        Self { prompter, api }
    }

    /// Query the API; `app` is asked for when not given.
    ///
    /// The raw answer is returned whatever its status code.
    pub fn execute(
        &self,
        app: Option<StatusApp>,
        id: Option<u64>,
    ) -> PygridResult<(StatusQuery, ApiResponse)> {
        let app = match app {
            Some(app) => app,
            None => {
                let names: Vec<&str> =
                    StatusApp::ALL.iter().map(StatusApp::display_name).collect();
                StatusApp::ALL[self.prompter.select(STATUS_APP_PROMPT, &names, 0)?]
            }
        };

        let query = StatusQuery::new(app, id);
        let response = self.api.status(query)?;
        if !response.is_ok() {
            debug!(status = response.status, body = %response.body, "status query failed");
        }
        Ok((query, response))
    }
}
