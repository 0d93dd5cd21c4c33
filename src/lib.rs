pub mod api;
pub mod artifact;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;

pub use api::{ArtifactSource, PlaudClient, Recording, RecordingDirectory, SessionProvider, Tag};
pub use artifact::{ArtifactFormat, ArtifactKind, ArtifactPayload, ArtifactRequest};
pub use config::Config;
pub use error::{ExportError, FetchError};
pub use export::{Exporter, RunConfig, RunContext, RunReport, TagIndex};
