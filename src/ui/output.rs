use std::path::Path;

use pygrid_cli::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn print_config_warnings(ui: &UiContext, path: &Path, warnings: &[ConfigWarning]) {
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", icon, w.key, path.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", icon, w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Printed once credentials have been attached to the document being written
pub fn print_credentials_warning(ui: &UiContext, path: &Path) {
    eprintln!(
        "{} {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        ColoredText::warning(format!(
            "{} contains your cloud credentials and database password. Keep it private.",
            path.display()
        ))
        .render(ui.color)
    );
}
