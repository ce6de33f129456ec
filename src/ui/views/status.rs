use pygrid_cli::{ApiResponse, StatusQuery};

use crate::ui::json::render_body;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::SemanticColor;

pub fn render_status(
    query: &StatusQuery,
    response: &ApiResponse,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} GET {}\n{}\n",
        Icon::Status.colored(supports_color, supports_unicode),
        query.path(),
        render_body(&response.body, SemanticColor::Success, supports_color)
    )
}
