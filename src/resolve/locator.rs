//! Parent manifest location
//!
//! Bridges local filesystem state and remote repository state: a parent
//! declared with a relative path that exists on disk is read locally,
//! anything else is fetched through the artifact-resolution
//! collaborator.

use crate::error::{LocateError, ManifestError};
use crate::manifest::{absolute, reader, ParentRef, Project, MANIFEST_FILENAME};
use crate::resolve::provider::ArtifactResolver;
use std::path::{Path, PathBuf};

/// Fixed upper bound on ancestor directories searched during manifest
/// creation
pub const MAX_ANCESTOR_DIRS: usize = 5;

/// A located parent manifest
#[derive(Debug)]
pub struct LocatedParent {
    /// The parent model
    pub project: Project,
    /// True when the parent was resolved from the remote repository
    pub remote: bool,
}

/// An aggregator manifest found in an ancestor directory
#[derive(Debug)]
pub struct AncestorManifest {
    /// Path of the found manifest
    pub path: PathBuf,
    /// The manifest model
    pub project: Project,
}

/// Locator for a manifest's declared parent
pub struct ParentLocator<'a> {
    resolver: &'a dyn ArtifactResolver,
}

impl<'a> ParentLocator<'a> {
    /// Create a locator using the given collaborator for remote parents
    pub fn new(resolver: &'a dyn ArtifactResolver) -> Self {
        Self { resolver }
    }

    /// Locate the parent manifest declared by `parent`
    ///
    /// The relative path (default `..`) is resolved against the
    /// directory containing `owner_path`, with the manifest filename
    /// appended when missing. A file that exists there is read locally;
    /// otherwise the parent is fetched remotely. Failures are always
    /// surfaced, never treated as "no parent".
    pub async fn locate(
        &self,
        owner_path: &Path,
        parent: &ParentRef,
    ) -> Result<LocatedParent, LocateError> {
        let owner_dir = absolute(owner_path)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let relative = parent.relative_path.as_deref().unwrap_or("..");
        let mut candidate = owner_dir.join(relative);
        if candidate.file_name().and_then(|n| n.to_str()) != Some(MANIFEST_FILENAME) {
            candidate.push(MANIFEST_FILENAME);
        }

        if candidate.exists() {
            let project = reader::read(&candidate)?;
            return Ok(LocatedParent {
                project,
                remote: false,
            });
        }

        // The relative path does not exist, so the parent is remote.
        let project = self
            .resolver
            .read_model(&parent.group_id, &parent.artifact_id, &parent.version)
            .await
            .map_err(|e| LocateError::Remote {
                coordinate: format!(
                    "{}:{}:pom:{}",
                    parent.group_id, parent.artifact_id, parent.version
                ),
                message: e.to_string(),
            })?;

        Ok(LocatedParent {
            project,
            remote: true,
        })
    }
}

/// Searches ancestor directories for an aggregator manifest
///
/// Used when creating a brand-new manifest: starting from the directory
/// above the new manifest's own, at most `MAX_ANCESTOR_DIRS` ancestors
/// are examined; the first whose manifest has `pom` packaging wins.
/// Manifests with other packaging are skipped, not an error.
pub fn find_aggregator_ancestor(
    pom_path: &Path,
) -> Result<Option<AncestorManifest>, ManifestError> {
    let abs = absolute(pom_path);
    let mut dir = abs.parent();

    for _ in 0..MAX_ANCESTOR_DIRS {
        dir = dir.and_then(Path::parent);
        let Some(current) = dir else {
            return Ok(None);
        };

        let candidate = current.join(MANIFEST_FILENAME);
        if candidate.exists() {
            let project = reader::read(&candidate)?;
            if project.is_aggregator() {
                return Ok(Some(AncestorManifest {
                    path: candidate,
                    project,
                }));
            }
        }
    }

    Ok(None)
}
