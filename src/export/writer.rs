use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::Engine;
use tracing::debug;

use super::sanitize::sanitize;

/// Decode base64 transfer encoding, ignoring embedded line breaks
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .context("Artifact content is not valid base64")
}

/// Path an artifact is written to: `directory/sanitize(base_name).extension`
pub fn artifact_path(base_name: &str, directory: &Path, extension: &str) -> PathBuf {
    directory.join(format!("{}.{}", sanitize(base_name), extension))
}

/// Decode `encoded` and write it to `directory/sanitize(base_name).extension`.
///
/// Existing files are overwritten, so writing the same content twice yields
/// identical bytes on disk. Errors are returned for the caller to log.
pub fn write(base_name: &str, directory: &Path, extension: &str, encoded: &str) -> Result<PathBuf> {
    let path = artifact_path(base_name, directory, extension);
    let bytes = decode(encoded).with_context(|| format!("Failed to decode {}", path.display()))?;

    fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    debug!("Wrote {} ({} bytes)", path.display(), bytes.len());

    Ok(path)
}
