//! Writing rendered cards to disk

use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use super::config::GeneratorConfig;
use crate::error::GenerateError;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("whitespace pattern is valid")
});

/// Filesystem-safe base name: lowercased, whitespace runs collapsed to `_`
pub fn file_stem(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "_")
        .into_owned()
}

/// Path a card with this name is written to
pub fn card_path(name: &str, config: &GeneratorConfig) -> PathBuf {
    config
        .output_dir
        .join(format!("{}.{}", file_stem(name), config.extension))
}

/// Write rendered lines into the output directory, replacing any existing file
pub fn write_card(
    name: &str,
    lines: &[String],
    config: &GeneratorConfig,
) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(&config.output_dir).map_err(|source| GenerateError::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    let path = card_path(name, config);
    fs::write(&path, lines.join("\n")).map_err(|source| GenerateError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(event = "card_written", path = %path.display());
    Ok(path)
}
