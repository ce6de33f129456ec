use serde_json::Value;

use crate::ui::primitives::text::{ColoredText, SemanticColor};

/// Pretty-print an API body with 2-space indentation.
///
/// String bodies that hold JSON are decoded first, so a double-encoded
/// answer still prints as a document.
pub fn render_body(body: &Value, color: SemanticColor, supports_color: bool) -> String {
    let decoded = match body {
        Value::String(s) => serde_json::from_str::<Value>(s).ok(),
        _ => None,
    };
    let text = match decoded.as_ref().unwrap_or(body) {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    };
    ColoredText::new(text, color).render(supports_color)
}
