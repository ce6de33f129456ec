use std::path::Path;

use pygrid_cli::{Session, WELCOME_BANNER};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_welcome(session: &Session, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Grid, WELCOME_BANNER);
    header.add("API", session.api_url.as_str());
    header.add("Message", session.welcome.as_str());
    header.render(supports_color, supports_unicode)
}

pub fn render_writing_configs(path: &Path, supports_unicode: bool) -> String {
    format!(
        "{} Writing configs to {}\n",
        Icon::Arrow.render(supports_unicode),
        path.display()
    )
}
