//! Managed-dependency resolution
//!
//! Answers "is this artifact's version already pinned somewhere
//! reachable from the manifest being edited?". Search order, first
//! match wins:
//! 1. BOM-style imports in the manifest's own managed set, in
//!    declaration order
//! 2. The declared parent's managed set, when the parent is local
//! 3. The remote chain: the remote parent directly, or the local
//!    parent's own parent (one local hop, then delegate)
//!
//! A group-less target matches entries of any group; the matched
//! entry carries the group the caller needs. Managed versions that are
//! property placeholders are returned as found; substitution belongs
//! to the manifest model, not this resolver.

use crate::domain::{Coordinate, Dependency};
use crate::error::ResolveError;
use crate::manifest::Project;
use crate::resolve::locator::ParentLocator;
use crate::resolve::provider::ArtifactResolver;
use std::path::Path;

/// Resolver over a manifest's managed-dependency universe
pub struct ManagedResolver<'a> {
    resolver: &'a dyn ArtifactResolver,
}

impl<'a> ManagedResolver<'a> {
    /// Create a resolver using the given collaborator
    pub fn new(resolver: &'a dyn ArtifactResolver) -> Self {
        Self { resolver }
    }

    /// Search the managed universe of `root` for the target
    ///
    /// `Ok(None)` means no entry pins the target; collaborator and
    /// locator failures are errors, never "no match".
    pub async fn resolve(
        &self,
        root: &Project,
        root_path: &Path,
        target: &Coordinate,
        scope: &str,
    ) -> Result<Option<Dependency>, ResolveError> {
        // 1. BOM imports declared by the root manifest itself
        for import in root.managed_dependencies().iter().filter(|d| d.is_import()) {
            let (Some(group_id), Some(version)) = (&import.group_id, &import.version) else {
                // an import without pinned coordinates cannot be fetched
                continue;
            };
            let bom = self
                .resolver
                .read_model(group_id, &import.artifact_id, version)
                .await?;
            if let Some(found) = find_in_managed(&bom, target) {
                return Ok(Some(found.clone()));
            }
        }

        // 2. the declared parent, local first
        let Some(parent_ref) = root.parent.as_ref() else {
            return Ok(None);
        };
        let located = ParentLocator::new(self.resolver)
            .locate(root_path, parent_ref)
            .await?;

        if !located.remote {
            if let Some(found) = find_in_managed(&located.project, target) {
                return Ok(Some(found.clone()));
            }
        }

        // 3. remote fallback: the remote parent itself, or the local
        // parent's own parent
        let remote_descriptor = if located.remote {
            Some(Coordinate::new(
                Some(parent_ref.group_id.clone()),
                parent_ref.artifact_id.clone(),
                Some(parent_ref.version.clone()),
            ))
        } else {
            located.project.parent.as_ref().map(|grandparent| {
                Coordinate::new(
                    Some(grandparent.group_id.clone()),
                    grandparent.artifact_id.clone(),
                    Some(grandparent.version.clone()),
                )
            })
        };

        if let Some(descriptor) = remote_descriptor {
            if let Some(found) = self
                .resolver
                .find_managed(&descriptor, target, scope)
                .await?
            {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}

/// First managed entry matching the target
fn find_in_managed<'p>(project: &'p Project, target: &Coordinate) -> Option<&'p Dependency> {
    project
        .managed_dependencies()
        .iter()
        .find(|d| d.matches(target))
}
