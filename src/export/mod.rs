//! Download orchestration and on-disk layout
//!
//! This module turns the flat recording and tag listings into a folder tree:
//! - `sanitize`: untrusted names to path segments
//! - `tags`: tag lookup and tag folders
//! - `filter`: optional start-date restriction
//! - `layout`: per-recording target folder and skip decision
//! - `fetcher`: isolated per-artifact retrieval
//! - `writer`: base64 decode and file write
//! - `orchestrator`: the sequential run over all recordings

mod context;
pub mod fetcher;
pub mod filter;
pub mod layout;
mod orchestrator;
mod report;
pub mod sanitize;
mod tags;
pub mod writer;

pub use context::{RunConfig, RunContext};
pub use fetcher::FetchOutcome;
pub use layout::RecordingPlan;
pub use orchestrator::Exporter;
pub use report::{ArtifactFailure, RunReport};
pub use sanitize::sanitize;
pub use tags::TagIndex;
