use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{error, info, warn};

use super::sanitize::{is_usable_segment, sanitize};
use crate::api::Tag;
use crate::error::ExportError;

/// Tag id → sanitized tag directory name, built once per run
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    names: HashMap<String, String>,
}

impl TagIndex {
    /// Ensure `root` exists, then create one directory per tag under it.
    ///
    /// Failing to create `root` aborts the run. A tag directory that cannot be
    /// created is logged and skipped; the tag still resolves so placement can
    /// retry creation per recording.
    pub fn build_and_materialize(tags: &[Tag], root: &Path) -> Result<Self, ExportError> {
        fs::create_dir_all(root).map_err(|source| ExportError::RootDirectory {
            path: root.to_path_buf(),
            source,
        })?;

        if tags.is_empty() {
            info!(
                "No tags found; recordings will be placed directly under {}",
                root.display()
            );
            return Ok(Self::default());
        }

        let mut names = HashMap::with_capacity(tags.len());

        for tag in tags {
            let name = sanitize(&tag.name);
            if !is_usable_segment(&name) {
                warn!("Tag {} has no usable folder name; its recordings go to the root", tag.id);
                continue;
            }

            let dir = root.join(&name);
            if let Err(e) = fs::create_dir_all(&dir) {
                error!("Failed to create tag directory {}: {}", dir.display(), e);
            }

            names.insert(tag.id.clone(), name);
        }

        info!("Prepared {} tag directories under {}", names.len(), root.display());

        Ok(Self { names })
    }

    /// Build the lookup without touching the filesystem
    pub fn from_tags(tags: &[Tag]) -> Self {
        let names = tags
            .iter()
            .map(|tag| (tag.id.clone(), sanitize(&tag.name)))
            .filter(|(_, name)| is_usable_segment(name))
            .collect();

        Self { names }
    }

    /// Sanitized directory name for a tag id
    pub fn resolve(&self, tag_id: &str) -> Option<&str> {
        self.names.get(tag_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
