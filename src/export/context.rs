use std::path::PathBuf;

use super::tags::TagIndex;

/// Per-run settings, fixed once the run starts
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Download root; created if missing
    pub root: PathBuf,
    /// Optional `yyyy-MM-dd` lower bound on recording start dates
    pub start_date: Option<String>,
    /// Skip recordings whose folder already exists
    pub skip_existing: bool,
}

impl RunConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            start_date: None,
            skip_existing: true,
        }
    }
}

/// Read-only state shared by every recording in a run
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: RunConfig,
    pub tags: TagIndex,
}

impl RunContext {
    pub fn new(config: RunConfig, tags: TagIndex) -> Self {
        Self { config, tags }
    }
}
