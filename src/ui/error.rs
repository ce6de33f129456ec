use pygrid_cli::PygridError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// First line of the error block for a known failure
fn headline(err: &PygridError) -> Option<&'static str> {
    match err {
        PygridError::InvalidApiUrl { .. } | PygridError::ApiUnreachable { .. } => {
            Some("Please enter a valid API URL")
        }
        PygridError::StatusUnavailable { .. } => Some("There was an error in reaching the API"),
        PygridError::InvalidCredentials { .. } => Some("Could not read your credentials file"),
        PygridError::DeployRejected { .. } => Some("The deployment was not accepted"),
        PygridError::OutputWrite { .. } => Some("Could not save the configuration"),
        PygridError::InvalidOutputFile { .. } => {
            Some("Please enter a plain file name for --output-file")
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let arrow = Icon::Arrow.render(supports_unicode);

    let known = err.downcast_ref::<PygridError>().and_then(headline);
    let mut out = match known {
        Some(title) => format!(
            "{} {}\n  {} {}\n",
            icon,
            ColoredText::error(title).bold().render(supports_color),
            arrow,
            err
        ),
        None => format!("{} {}\n", icon, ColoredText::error(err.to_string()).render(supports_color)),
    };

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  {} {}\n", arrow, cause));
    }
    out
}

pub fn print_error(ui: &UiContext, err: &anyhow::Error) {
    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
