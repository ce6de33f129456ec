//! Settings loading

use std::fs;
use std::path::Path;

use crate::domain::value_objects::{ConfigWarning, PayloadEncoding};
use crate::error::{PygridError, PygridResult};

use super::types::{ColorMode, Settings};

/// Settings file name under `~/.pygrid/cli`
pub const SETTINGS_FILE: &str = "config.toml";

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PygridResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PygridError::Settings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load `<root>/config.toml` if present, else defaults; then apply env overrides.
pub fn load_or_default(root: &Path) -> PygridResult<(Settings, Vec<ConfigWarning>)> {
    let path = root.join(SETTINGS_FILE);
    let (settings, warnings) = if path.exists() {
        load_with_warnings(&path)?
    } else {
        (Settings::default(), Vec::new())
    };

    Ok((
        with_env_overrides(settings, |k| std::env::var(k).ok()),
        warnings,
    ))
}

/// Apply environment variable overrides (PYGRID_* prefix)
pub fn with_env_overrides(
    mut settings: Settings,
    get_env: impl Fn(&str) -> Option<String>,
) -> Settings {
    if let Some(url) = get_env("PYGRID_API_URL").filter(|u| !u.trim().is_empty()) {
        settings.api_url = Some(url);
    }

    if let Some(payload) = get_env("PYGRID_PAYLOAD") {
        settings.deploy.payload = match payload.to_lowercase().as_str() {
            "object" | "json" => PayloadEncoding::Object,
            _ => PayloadEncoding::String,
        };
    }

    if let Some(color) = get_env("PYGRID_COLOR") {
        settings.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    settings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["api_url", "deploy", "payload", "output", "color"];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
