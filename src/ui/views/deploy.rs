use pygrid_cli::{DeployOutcome, Provider};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::json::render_body;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};

pub fn render_deploy_header(
    provider: Option<Provider>,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, "PyGrid Deploy");
    if let Some(provider) = provider {
        header.add("Provider", provider.display_name());
    }
    if dry_run {
        header.add("Mode", "dry run");
    }
    header.render(supports_color, supports_unicode)
}

/// What to print once the deploy workflow has finished.
///
/// `show_preview` is set when the document was not already displayed by
/// the confirmation prompt.
pub fn render_deploy_outcome(
    outcome: &DeployOutcome,
    show_preview: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    if show_preview {
        out.push_str(outcome.preview());
        out.push('\n');
    }

    match outcome {
        DeployOutcome::DryRun { .. } => {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Arrow.render(supports_unicode),
                "Dry run: nothing was submitted"
            ));
        }
        DeployOutcome::Declined { .. } => {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning("Deployment cancelled").render(supports_color)
            ));
        }
        DeployOutcome::Submitted { response, .. } => {
            let (icon, color) = if response.is_ok() {
                (Icon::Success, SemanticColor::Success)
            } else {
                (Icon::Error, SemanticColor::Error)
            };
            out.push_str(&format!(
                "{} HTTP {}\n",
                icon.colored(supports_color, supports_unicode),
                response.status
            ));
            out.push_str(&render_body(&response.body, color, supports_color));
            out.push('\n');
        }
    }
    out
}
