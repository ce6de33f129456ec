use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use pygrid_cli::config::ColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>, settings_color: ColorMode) -> Self {
        Self::from_caps(cli_color, settings_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        cli_color: Option<ColorWhen>,
        settings_color: ColorMode,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match settings_color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            color,
            unicode: caps.supports_unicode,
        }
    }
}
