//! Payload encoding - shape of the `/deploy` request body

use serde::{Deserialize, Serialize};

/// How the assembled configuration is placed in the deploy request body.
///
/// - `String`: the document is pretty-printed to JSON text and that text is
///   sent as a JSON string literal. This is what the deployment API has
///   historically received.
/// - `Object`: the document is sent as a structured JSON body.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PayloadEncoding {
    #[default]
    String,
    Object,
}
