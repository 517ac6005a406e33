//! Artifact-resolution collaborator
//!
//! This module provides:
//! - The ArtifactResolver trait the resolution engine depends on
//! - RemoteRepositoryResolver, which fetches `.pom` descriptors from a
//!   remote repository into the local repository cache and walks remote
//!   ancestor chains

use crate::domain::{Coordinate, Dependency};
use crate::error::ResolveError;
use crate::manifest::{reader, Project};
use crate::registry::HttpClient;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Fixed upper bound on ancestor-chain hops
///
/// Exceeding it yields a named error rather than walking a cyclic or
/// degenerate parent chain forever.
pub const MAX_ANCESTOR_HOPS: usize = 5;

/// External collaborator for fetching artifact descriptors
#[async_trait]
pub trait ArtifactResolver: Send + Sync {
    /// Fetch the manifest descriptor for a fully-specified coordinate
    /// and load its model
    async fn read_model(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
    ) -> Result<Project, ResolveError>;

    /// Search the managed set reachable from the given descriptor for
    /// the target artifact, walking the descriptor's own ancestor chain
    ///
    /// Returns at most one matching dependency; a failed fetch is an
    /// error, never "no match".
    async fn find_managed(
        &self,
        descriptor: &Coordinate,
        target: &Coordinate,
        scope: &str,
    ) -> Result<Option<Dependency>, ResolveError>;
}

/// Resolver backed by a remote repository and a local descriptor cache
///
/// The cache uses the conventional repository layout:
/// `{local}/{group dirs}/{artifact}/{version}/{artifact}-{version}.pom`.
pub struct RemoteRepositoryResolver {
    client: HttpClient,
    repository_base: String,
    local_repository: PathBuf,
}

impl RemoteRepositoryResolver {
    /// Create a resolver for a repository base URI and cache directory
    pub fn new(
        client: HttpClient,
        repository_base: impl Into<String>,
        local_repository: impl Into<PathBuf>,
    ) -> Self {
        Self {
            client,
            repository_base: repository_base.into(),
            local_repository: local_repository.into(),
        }
    }

    fn descriptor_rel_path(group_id: &str, artifact_id: &str, version: &str) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in group_id.split('.') {
            path.push(segment);
        }
        path.push(artifact_id);
        path.push(version);
        path.push(format!("{}-{}.pom", artifact_id, version));
        path
    }

    fn descriptor_url(&self, group_id: &str, artifact_id: &str, version: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}-{}.pom",
            self.repository_base.trim_end_matches('/'),
            group_id.replace('.', "/"),
            artifact_id,
            version,
            artifact_id,
            version
        )
    }

    /// Fetch a descriptor into the cache, returning its local path
    async fn fetch_descriptor(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
    ) -> Result<PathBuf, ResolveError> {
        let coordinate = format!("{}:{}:pom:{}", group_id, artifact_id, version);
        let cached = self
            .local_repository
            .join(Self::descriptor_rel_path(group_id, artifact_id, version));
        if cached.exists() {
            return Ok(cached);
        }

        let url = self.descriptor_url(group_id, artifact_id, version);
        let response = self
            .client
            .get(&url)
            .await
            .map_err(|e| ResolveError::collaborator(&coordinate, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::collaborator(
                &coordinate,
                format!("HTTP {} from {}", status.as_u16(), url),
            ));
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| ResolveError::collaborator(&coordinate, e.to_string()))?;

        if let Some(dir) = cached.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| ResolveError::collaborator(&coordinate, e.to_string()))?;
        }

        // write-then-rename so concurrent fetches never observe a
        // partially written descriptor
        let staging = cached.with_extension("pom.part");
        tokio::fs::write(&staging, &body)
            .await
            .map_err(|e| ResolveError::collaborator(&coordinate, e.to_string()))?;
        tokio::fs::rename(&staging, &cached)
            .await
            .map_err(|e| ResolveError::collaborator(&coordinate, e.to_string()))?;

        Ok(cached)
    }

    fn load_model(path: &Path, coordinate: &str) -> Result<Project, ResolveError> {
        reader::read(path).map_err(|e| ResolveError::collaborator(coordinate, e.to_string()))
    }
}

/// First entry matching the target, searching the managed set before
/// the plain dependency list
fn search_model<'p>(project: &'p Project, target: &Coordinate) -> Option<&'p Dependency> {
    project
        .managed_dependencies()
        .iter()
        .chain(project.dependencies().iter())
        .find(|d| d.matches(target))
}

#[async_trait]
impl ArtifactResolver for RemoteRepositoryResolver {
    async fn read_model(
        &self,
        group_id: &str,
        artifact_id: &str,
        version: &str,
    ) -> Result<Project, ResolveError> {
        let coordinate = format!("{}:{}:pom:{}", group_id, artifact_id, version);
        let path = self.fetch_descriptor(group_id, artifact_id, version).await?;
        Self::load_model(&path, &coordinate)
    }

    async fn find_managed(
        &self,
        descriptor: &Coordinate,
        target: &Coordinate,
        _scope: &str,
    ) -> Result<Option<Dependency>, ResolveError> {
        let (Some(group_id), Some(version)) = (&descriptor.group_id, &descriptor.version) else {
            return Err(ResolveError::collaborator(
                descriptor.to_string(),
                "descriptor coordinate must be fully specified",
            ));
        };

        let mut current = self
            .read_model(group_id, &descriptor.artifact_id, version)
            .await?;

        for _hop in 0..MAX_ANCESTOR_HOPS {
            if let Some(found) = search_model(&current, target) {
                return Ok(Some(found.clone()));
            }
            let Some(parent) = current.parent.take() else {
                return Ok(None);
            };
            current = self
                .read_model(&parent.group_id, &parent.artifact_id, &parent.version)
                .await?;
        }

        Err(ResolveError::AncestorChainTooDeep {
            coordinate: descriptor.to_string(),
            limit: MAX_ANCESTOR_HOPS,
        })
    }
}
