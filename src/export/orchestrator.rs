use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{error, info, warn};

use super::context::{RunConfig, RunContext};
use super::fetcher::{self, FetchOutcome};
use super::filter;
use super::layout::{self, RecordingPlan};
use super::report::{ArtifactFailure, RunReport};
use super::tags::TagIndex;
use super::writer;
use crate::api::{ArtifactSource, Recording, RecordingDirectory};
use crate::artifact::ArtifactKind;
use crate::error::ExportError;

/// Drives a full export: tag folders first, then every recording in turn
pub struct Exporter<'a> {
    directory: &'a dyn RecordingDirectory,
    source: &'a dyn ArtifactSource,
}

impl<'a> Exporter<'a> {
    pub fn new(directory: &'a dyn RecordingDirectory, source: &'a dyn ArtifactSource) -> Self {
        Self { directory, source }
    }

    /// Run the export.
    ///
    /// Only listing failures and an unusable root directory are returned as
    /// errors; everything else ends up in the [`RunReport`].
    pub async fn run(&self, config: RunConfig) -> Result<RunReport> {
        let recordings = self
            .directory
            .list_recordings()
            .await
            .map_err(|source| ExportError::Listing {
                what: "recordings",
                source,
            })?;
        info!("Retrieved {} recordings", recordings.len());

        let tags = self
            .directory
            .list_tags()
            .await
            .map_err(|source| ExportError::Listing {
                what: "tags",
                source,
            })?;
        info!("Retrieved {} tags", tags.len());

        let tag_index = TagIndex::build_and_materialize(&tags, &config.root)?;

        let mut report = RunReport {
            recordings_listed: recordings.len(),
            ..RunReport::default()
        };

        let selected = filter::apply(Some(recordings), config.start_date.as_deref());
        report.recordings_selected = selected.len();

        let ctx = RunContext::new(config, tag_index);
        self.export_recordings(&ctx, &selected, &mut report).await;

        info!(
            "Export complete: {} exported, {} skipped, {} failed, {} files written, {} artifacts missing",
            report.recordings_exported,
            report.recordings_skipped,
            report.recordings_failed,
            report.artifacts_written,
            report.failures.len()
        );

        Ok(report)
    }

    /// Process recordings sequentially, in order
    pub async fn export_recordings(
        &self,
        ctx: &RunContext,
        recordings: &[Recording],
        report: &mut RunReport,
    ) {
        if recordings.is_empty() {
            info!("No recordings to download");
            return;
        }

        for (index, recording) in recordings.iter().enumerate() {
            info!(
                "[{}/{}] {} ({})",
                index + 1,
                recordings.len(),
                recording.name,
                recording.id
            );
            self.export_recording(ctx, recording, report).await;
        }
    }

    /// Plan, create the folder, then fetch and write audio, transcripts and summaries
    pub async fn export_recording(
        &self,
        ctx: &RunContext,
        recording: &Recording,
        report: &mut RunReport,
    ) {
        let root = ctx.config.root.as_path();
        let plan = layout::plan(recording, &ctx.tags, root, ctx.config.skip_existing);

        if plan.skip {
            let existing = plan.existing_dir(root).unwrap_or_else(|| plan.leaf_dir());
            info!("Skipping {}: {} already exists", recording.name, existing.display());
            report.recordings_skipped += 1;
            return;
        }

        let Some(leaf) = ensure_leaf_dir(&plan, root) else {
            report.recordings_failed += 1;
            return;
        };

        for kind in ArtifactKind::ALL {
            let outcomes =
                fetcher::fetch_all(self.source, recording, &fetcher::pairs_for(kind)).await;

            for outcome in outcomes {
                write_outcome(recording, &plan.folder_name, &leaf, outcome, report);
            }
        }

        report.recordings_exported += 1;
    }
}

/// Create the recording folder, falling back to the root when the tag folder is unusable
fn ensure_leaf_dir(plan: &RecordingPlan, root: &Path) -> Option<PathBuf> {
    let leaf = plan.leaf_dir();
    let err = match fs::create_dir_all(&leaf) {
        Ok(()) => return Some(leaf),
        Err(e) => e,
    };
    error!("Failed to create {}: {}", leaf.display(), err);

    let fallback = plan.root_fallback(root)?;
    match fs::create_dir_all(&fallback) {
        Ok(()) => {
            warn!("Placing recording under {} instead", fallback.display());
            Some(fallback)
        }
        Err(e) => {
            error!("Failed to create {}: {}", fallback.display(), e);
            None
        }
    }
}

fn write_outcome(
    recording: &Recording,
    folder_name: &str,
    dir: &Path,
    outcome: FetchOutcome,
    report: &mut RunReport,
) {
    let FetchOutcome {
        request,
        payload,
        error,
    } = outcome;

    let failure = |reason: String| ArtifactFailure {
        recording_id: recording.id.clone(),
        recording_name: recording.name.clone(),
        kind: request.kind,
        format: request.format,
        reason,
    };

    let Some(payload) = payload else {
        report
            .failures
            .push(failure(error.unwrap_or_else(|| "no content".to_string())));
        return;
    };

    let stem = request.kind.file_stem(folder_name);
    match writer::write(&stem, dir, payload.format.extension(), &payload.content) {
        Ok(path) => {
            info!("Saved {} {} to {}", request.kind, request.format, path.display());
            report.artifacts_written += 1;
        }
        Err(e) => {
            warn!(
                "Failed to save {} {} of {} ({}): {:#}",
                request.kind, request.format, recording.name, recording.id, e
            );
            report.failures.push(failure(format!("{:#}", e)));
        }
    }
}
