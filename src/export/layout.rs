use std::path::{Path, PathBuf};

use super::sanitize::{is_usable_segment, sanitize};
use super::tags::TagIndex;
use crate::api::Recording;

/// Where a recording goes and whether it needs downloading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingPlan {
    /// `root` or `root/<tag>`
    pub target_dir: PathBuf,
    /// Sanitized recording name, used for the leaf folder and file names
    pub folder_name: String,
    /// Leaf already exists and skip-existing is on
    pub skip: bool,
}

impl RecordingPlan {
    /// `target_dir/folder_name`
    pub fn leaf_dir(&self) -> PathBuf {
        self.target_dir.join(&self.folder_name)
    }

    /// Folder already holding this recording: the planned leaf, or its root fallback
    pub fn existing_dir(&self, root: &Path) -> Option<PathBuf> {
        let leaf = self.leaf_dir();
        if leaf.is_dir() {
            return Some(leaf);
        }
        if leaf.exists() {
            return None;
        }
        self.root_fallback(root).filter(|fallback| fallback.is_dir())
    }

    /// Same leaf directly under `root`, used when the tag directory is unusable
    pub fn root_fallback(&self, root: &Path) -> Option<PathBuf> {
        (self.target_dir != root).then(|| root.join(&self.folder_name))
    }
}

/// Sanitized leaf name; recordings without a usable name fall back to their id
pub fn folder_name(recording: &Recording) -> String {
    let name = sanitize(&recording.name);
    if is_usable_segment(&name) {
        return name;
    }

    let id = sanitize(&recording.id);
    if is_usable_segment(&id) {
        id
    } else {
        format!("_{}", id)
    }
}

/// Decide the target directory and skip status of a recording.
///
/// Only the first tag counts. An unknown first tag, or none, places the
/// recording directly under `root`. Skip is presence-based: an existing leaf
/// directory is never inspected for completeness. A leaf left at the root by
/// an earlier run whose tag folder was unusable also counts as present.
pub fn plan(
    recording: &Recording,
    tags: &TagIndex,
    root: &Path,
    skip_existing: bool,
) -> RecordingPlan {
    let target_dir = match recording.first_tag().and_then(|id| tags.resolve(id)) {
        Some(tag_dir) => root.join(tag_dir),
        None => root.to_path_buf(),
    };
    let folder_name = folder_name(recording);

    let mut plan = RecordingPlan {
        target_dir,
        folder_name,
        skip: false,
    };
    plan.skip = skip_existing && plan.existing_dir(root).is_some();

    plan
}
