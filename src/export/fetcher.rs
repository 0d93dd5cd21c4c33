use tracing::{debug, warn};

use crate::api::{ArtifactSource, Recording};
use crate::artifact::{ArtifactFormat, ArtifactKind, ArtifactPayload, ArtifactRequest};
use crate::error::FetchError;

/// Result of one isolated fetch attempt
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: ArtifactRequest,
    /// `None` when the fetch failed or returned nothing
    pub payload: Option<ArtifactPayload>,
    /// Failure detail for absent payloads
    pub error: Option<String>,
}

impl FetchOutcome {
    pub fn is_present(&self) -> bool {
        self.payload.is_some()
    }
}

/// Retrieve a single artifact. Blank content counts as [`FetchError::Empty`].
pub async fn fetch(
    source: &dyn ArtifactSource,
    request: &ArtifactRequest,
) -> Result<ArtifactPayload, FetchError> {
    let id = request.recording_id.as_str();
    let content = match request.kind {
        ArtifactKind::Audio => source.fetch_audio(id).await?,
        ArtifactKind::Transcript => source.fetch_transcript(id, request.format).await?,
        ArtifactKind::Summary => source.fetch_summary(id, request.format).await?,
    };

    if content.trim().is_empty() {
        return Err(FetchError::Empty);
    }

    Ok(ArtifactPayload {
        format: request.format,
        content,
    })
}

/// Fetch every `(kind, format)` pair for `recording`, one after another.
///
/// A failure is logged and captured in its own outcome; it never stops the
/// remaining pairs. Pairs whose format does not exist for the kind are
/// reported absent without a remote call.
pub async fn fetch_all(
    source: &dyn ArtifactSource,
    recording: &Recording,
    pairs: &[(ArtifactKind, ArtifactFormat)],
) -> Vec<FetchOutcome> {
    let recording_id = recording.id.as_str();
    let mut outcomes = Vec::with_capacity(pairs.len());

    for &(kind, format) in pairs {
        let Some(request) = ArtifactRequest::new(recording_id, kind, format) else {
            warn!(
                "{} of {} ({}) is not available as {}; skipped",
                kind, recording.name, recording_id, format
            );
            outcomes.push(FetchOutcome {
                request: ArtifactRequest {
                    recording_id: recording_id.to_string(),
                    kind,
                    format,
                },
                payload: None,
                error: Some(format!("{} has no {} format", kind, format)),
            });
            continue;
        };

        let outcome = match fetch(source, &request).await {
            Ok(payload) => {
                debug!("Fetched {}", request);
                FetchOutcome {
                    request,
                    payload: Some(payload),
                    error: None,
                }
            }
            Err(e) => {
                warn!(
                    "Failed to fetch {} {} of {} ({}): {:#}",
                    kind, format, recording.name, recording_id, e
                );
                FetchOutcome {
                    request,
                    payload: None,
                    error: Some(format!("{:#}", e)),
                }
            }
        };

        outcomes.push(outcome);
    }

    outcomes
}

/// The fixed `(kind, format)` pairs for one kind
pub fn pairs_for(kind: ArtifactKind) -> Vec<(ArtifactKind, ArtifactFormat)> {
    kind.formats().iter().map(|&format| (kind, format)).collect()
}
