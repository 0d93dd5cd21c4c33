use std::path::PathBuf;

use thiserror::Error;

/// Failure retrieving a single artifact
///
/// Both variants are handled the same way by the exporter (log, mark the
/// artifact absent, move on); they are kept apart so logs can tell an empty
/// export from a broken request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("remote returned no content")]
    Empty,
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

/// Failures that abort the whole run
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),
    #[error("not authenticated; call authenticate first")]
    NotAuthenticated,
    #[error("cannot create download directory {}: {source}", .path.display())]
    RootDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to list {what}: {source}")]
    Listing {
        what: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
