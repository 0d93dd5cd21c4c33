// Shared fixtures for integration tests: an in-memory recording service with
// per-artifact failure injection.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use base64::Engine;
use chrono::DateTime;
use plaud_bulk_export::{
    ArtifactFormat, ArtifactKind, ArtifactSource, FetchError, Recording, RecordingDirectory, Tag,
};

pub fn encode(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

pub fn millis(rfc3339: &str) -> i64 {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid timestamp")
        .timestamp_millis()
}

/// Content the fake serves for an artifact
pub fn content_for(recording_id: &str, kind: ArtifactKind, format: ArtifactFormat) -> Vec<u8> {
    format!("{}:{}:{}", recording_id, kind, format).into_bytes()
}

#[derive(Default)]
pub struct FakeService {
    pub recordings: Vec<Recording>,
    pub tags: Vec<Tag>,
    /// (recording id, kind, format) that fail with a transport error
    pub failing: HashSet<(String, ArtifactKind, ArtifactFormat)>,
    /// (recording id, kind, format) that return no content
    pub empty: HashSet<(String, ArtifactKind, ArtifactFormat)>,
    /// Content overrides
    pub overrides: HashMap<(String, ArtifactKind, ArtifactFormat), String>,
    pub fail_listing: bool,
    pub calls: Mutex<Vec<(String, ArtifactKind, ArtifactFormat)>>,
}

impl FakeService {
    pub fn new(recordings: Vec<Recording>, tags: Vec<Tag>) -> Self {
        Self {
            recordings,
            tags,
            ..Self::default()
        }
    }

    pub fn fail(mut self, id: &str, kind: ArtifactKind, format: ArtifactFormat) -> Self {
        self.failing.insert((id.to_string(), kind, format));
        self
    }

    pub fn return_empty(mut self, id: &str, kind: ArtifactKind, format: ArtifactFormat) -> Self {
        self.empty.insert((id.to_string(), kind, format));
        self
    }

    pub fn with_content(
        mut self,
        id: &str,
        kind: ArtifactKind,
        format: ArtifactFormat,
        encoded: &str,
    ) -> Self {
        self.overrides
            .insert((id.to_string(), kind, format), encoded.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, ArtifactKind, ArtifactFormat)> {
        self.calls.lock().unwrap().clone()
    }

    fn serve(
        &self,
        id: &str,
        kind: ArtifactKind,
        format: ArtifactFormat,
    ) -> Result<String, FetchError> {
        let key = (id.to_string(), kind, format);
        self.calls.lock().unwrap().push(key.clone());

        if self.failing.contains(&key) {
            return Err(anyhow!("simulated 500 for {} {} {}", id, kind, format).into());
        }
        if self.empty.contains(&key) {
            return Ok(String::new());
        }
        if let Some(encoded) = self.overrides.get(&key) {
            return Ok(encoded.clone());
        }

        Ok(encode(&content_for(id, kind, format)))
    }
}

#[async_trait::async_trait]
impl RecordingDirectory for FakeService {
    async fn list_recordings(&self) -> Result<Vec<Recording>> {
        if self.fail_listing {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.recordings.clone())
    }

    async fn list_tags(&self) -> Result<Vec<Tag>> {
        if self.fail_listing {
            return Err(anyhow!("connection refused"));
        }
        Ok(self.tags.clone())
    }
}

#[async_trait::async_trait]
impl ArtifactSource for FakeService {
    async fn fetch_audio(&self, recording_id: &str) -> Result<String, FetchError> {
        self.serve(recording_id, ArtifactKind::Audio, ArtifactFormat::Mp3)
    }

    async fn fetch_transcript(
        &self,
        recording_id: &str,
        format: ArtifactFormat,
    ) -> Result<String, FetchError> {
        self.serve(recording_id, ArtifactKind::Transcript, format)
    }

    async fn fetch_summary(
        &self,
        recording_id: &str,
        format: ArtifactFormat,
    ) -> Result<String, FetchError> {
        self.serve(recording_id, ArtifactKind::Summary, format)
    }
}
