use serde::{Deserialize, Serialize};

use crate::artifact::{ArtifactFormat, ArtifactKind};

/// Counters and failures collected over one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Recordings returned by the remote listing
    pub recordings_listed: usize,

    /// Recordings left after the start-date filter
    pub recordings_selected: usize,

    /// Recordings skipped because their folder already existed
    pub recordings_skipped: usize,

    /// Recordings whose artifacts were attempted
    pub recordings_exported: usize,

    /// Recordings for which no folder could be created
    pub recordings_failed: usize,

    /// Artifact files written to disk
    pub artifacts_written: usize,

    /// Artifacts that could not be fetched or written
    pub failures: Vec<ArtifactFailure>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.recordings_failed > 0 || !self.failures.is_empty()
    }
}

/// One artifact that is missing from the export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactFailure {
    pub recording_id: String,
    pub recording_name: String,
    pub kind: ArtifactKind,
    pub format: ArtifactFormat,
    pub reason: String,
}
