//! Deploy Result
//!
//! Outcome of a deploy run that got as far as the submission step.

use crate::domain::ports::ApiResponse;

/// How a deploy run ended
#[derive(Debug, Clone, PartialEq)]
pub enum DeployOutcome {
    /// The user declined the final confirmation; nothing was sent
    Declined { preview: String },
    /// `--dry-run`: the document was rendered but not sent
    DryRun { preview: String },
    /// The document was POSTed; `response` may still be an error status
    Submitted {
        preview: String,
        response: ApiResponse,
    },
}

impl DeployOutcome {
    /// Pretty JSON of the document as shown before submission
    pub fn preview(&self) -> &str {
        match self {
            DeployOutcome::Declined { preview }
            | DeployOutcome::DryRun { preview }
            | DeployOutcome::Submitted { preview, .. } => preview,
        }
    }

    /// False only when the API answered with a non-200 status
    pub fn is_success(&self) -> bool {
        match self {
            DeployOutcome::Submitted { response, .. } => response.is_ok(),
            DeployOutcome::Declined { .. } | DeployOutcome::DryRun { .. } => true,
        }
    }
}
