//! Resolution orchestration
//!
//! Fans one resolution task out per input coordinate onto the runtime's
//! worker pool and reassembles the results in input order. Per-target
//! strategy chain:
//! 1. A coordinate that already has a version passes through untouched
//!    (no network traffic at all)
//! 2. The managed-dependency resolver
//! 3. A fresh release lookup against the repository's version metadata
//!
//! A target that survives all three is reported as `VersionNotFound`
//! naming the coordinate. Sibling tasks run to completion; the error
//! reported is the first failure in input order, which is deterministic
//! regardless of completion order.

use crate::domain::{Coordinate, Dependency};
use crate::error::ResolveError;
use crate::manifest::Project;
use crate::registry::{VersionLookup, VersionTarget};
use crate::resolve::managed::ManagedResolver;
use crate::resolve::provider::ArtifactResolver;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Default concurrency limit for resolution tasks
const DEFAULT_CONCURRENCY: usize = 10;

/// Orchestrator for resolving a batch of coordinates
pub struct Orchestrator {
    resolver: Arc<dyn ArtifactResolver>,
    lookup: Arc<dyn VersionLookup>,
    semaphore: Arc<Semaphore>,
}

impl Orchestrator {
    /// Create an orchestrator with the given collaborators
    pub fn new(resolver: Arc<dyn ArtifactResolver>, lookup: Arc<dyn VersionLookup>) -> Self {
        Self {
            resolver,
            lookup,
            semaphore: Arc::new(Semaphore::new(DEFAULT_CONCURRENCY)),
        }
    }

    /// Set the concurrency limit
    pub fn with_concurrency(mut self, permits: usize) -> Self {
        self.semaphore = Arc::new(Semaphore::new(permits));
        self
    }

    /// Resolve every target, returning fully-specified dependencies in
    /// the original input order
    pub async fn resolve_all(
        &self,
        root: Arc<Project>,
        root_path: Arc<PathBuf>,
        targets: Vec<Coordinate>,
        scope: &str,
    ) -> Result<Vec<Dependency>, ResolveError> {
        let mut slots: Vec<Option<Result<Dependency, ResolveError>>> =
            (0..targets.len()).map(|_| None).collect();
        let mut tasks = JoinSet::new();

        for (index, target) in targets.into_iter().enumerate() {
            let root = Arc::clone(&root);
            let root_path = Arc::clone(&root_path);
            let resolver = Arc::clone(&self.resolver);
            let lookup = Arc::clone(&self.lookup);
            let semaphore = Arc::clone(&self.semaphore);
            let scope = scope.to_string();

            tasks.spawn(async move {
                let result =
                    resolve_one(root, root_path, resolver, lookup, semaphore, target, &scope)
                        .await;
                (index, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(e) => {
                    return Err(ResolveError::collaborator("resolution task", e.to_string()))
                }
            }
        }

        let mut resolved = Vec::with_capacity(slots.len());
        for slot in slots {
            match slot {
                Some(Ok(dependency)) => resolved.push(dependency),
                Some(Err(error)) => return Err(error),
                None => {
                    return Err(ResolveError::collaborator(
                        "resolution task",
                        "task finished without reporting a result",
                    ))
                }
            }
        }
        Ok(resolved)
    }
}

async fn resolve_one(
    root: Arc<Project>,
    root_path: Arc<PathBuf>,
    resolver: Arc<dyn ArtifactResolver>,
    lookup: Arc<dyn VersionLookup>,
    semaphore: Arc<Semaphore>,
    target: Coordinate,
    scope: &str,
) -> Result<Dependency, ResolveError> {
    // already fully specified: nothing to look up
    if target.version.is_some() {
        return Ok(Dependency::from_coordinate(&target));
    }

    let _permit = semaphore.acquire().await.unwrap();

    let managed = ManagedResolver::new(resolver.as_ref())
        .resolve(&root, &root_path, &target, scope)
        .await?;
    if let Some(entry) = managed {
        return Ok(complete_from_managed(target, entry));
    }

    // a fresh metadata lookup needs a group id; a group-less target
    // that missed the managed chain cannot be resolved
    let Some(group_id) = target.group_id.clone() else {
        return Err(ResolveError::VersionNotFound { coordinate: target });
    };

    match lookup
        .pick_version(&group_id, &target.artifact_id, VersionTarget::Release)
        .await?
    {
        Some(version) => Ok(Dependency::new(
            Some(group_id),
            target.artifact_id,
            Some(version),
        )),
        None => Err(ResolveError::VersionNotFound { coordinate: target }),
    }
}

/// Completes a target from a managed entry: the entry supplies the
/// version and, for a group-less target, the group id
fn complete_from_managed(target: Coordinate, entry: Dependency) -> Dependency {
    let group_id = target.group_id.or(entry.group_id);
    Dependency::new(group_id, target.artifact_id, entry.version)
}
