use anyhow::Result;

use super::messages::{Recording, Tag};
use crate::artifact::ArtifactFormat;
use crate::error::FetchError;

/// Access-token exchange
///
/// Must succeed before any listing or retrieval call is made.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync {
    /// Exchange credentials for an access token
    async fn authenticate(&mut self, username: &str, password: &str) -> Result<String>;
}

/// Account-wide listings
///
/// Each call returns the full snapshot; pagination, if any, stays inside the
/// implementation.
#[async_trait::async_trait]
pub trait RecordingDirectory: Send + Sync {
    async fn list_recordings(&self) -> Result<Vec<Recording>>;

    async fn list_tags(&self) -> Result<Vec<Tag>>;
}

/// Per-artifact retrieval
///
/// Every method returns base64 content. Calls are independent: one failing
/// must not affect the next.
#[async_trait::async_trait]
pub trait ArtifactSource: Send + Sync {
    async fn fetch_audio(&self, recording_id: &str) -> Result<String, FetchError>;

    async fn fetch_transcript(
        &self,
        recording_id: &str,
        format: ArtifactFormat,
    ) -> Result<String, FetchError>;

    async fn fetch_summary(
        &self,
        recording_id: &str,
        format: ArtifactFormat,
    ) -> Result<String, FetchError>;
}
