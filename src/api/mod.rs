//! Remote recording service
//!
//! The exporter only sees the traits in [`service`]; [`PlaudClient`] is the
//! HTTP implementation used by the binary.

pub mod client;
pub mod messages;
pub mod service;

pub use client::PlaudClient;
pub use messages::{Recording, Tag};
pub use service::{ArtifactSource, RecordingDirectory, SessionProvider};
