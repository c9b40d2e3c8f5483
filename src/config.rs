//! Loading checker options from a JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use lamref_checker::CheckerOptions;

/// Read `CheckerOptions` from a JSON file such as
///
/// ```json
/// { "sourceVersion": "11", "rules": { "replaceLambdaWithMethodRef": true } }
/// ```
pub fn load_options(path: &Path) -> Result<CheckerOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_options(&text).with_context(|| format!("invalid config file {}", path.display()))
}

/// Parse options from JSON text. An empty (or whitespace-only) document
/// yields the defaults.
pub fn parse_options(text: &str) -> Result<CheckerOptions> {
    if text.trim().is_empty() {
        return Ok(CheckerOptions::default());
    }
    let options: CheckerOptions =
        serde_json::from_str(text).context("failed to parse checker options")?;
    tracing::debug!(source_version = %options.source_version, "loaded checker options");
    Ok(options)
}
