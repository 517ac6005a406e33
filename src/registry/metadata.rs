//! Version metadata fetching and selection
//!
//! Fetches `maven-metadata.xml` for a group:artifact pair and picks one
//! version:
//! - the `release` (or `latest`) pointer is returned as soon as it is
//!   seen, without finishing the parse, when it passes the stability
//!   filter
//! - otherwise the version list is collected and the greatest stable
//!   entry wins, in descending lexicographic order
//! - when no entry is stable, the greatest entry overall wins; only an
//!   empty list yields no version
//!
//! The stability filter rejects versions containing `-alpha`, `-beta`
//! or `-rc`.

use crate::error::LookupError;
use crate::registry::{HttpClient, VersionLookup};
use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// The well-known versioning document filename
const METADATA_FILENAME: &str = "maven-metadata.xml";

/// Pre-release markers rejected by the stability filter
const UNSTABLE_MARKERS: [&str; 3] = ["-alpha", "-beta", "-rc"];

/// Which versioning pointer a lookup is after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionTarget {
    /// The latest stable release
    Release,
    /// The latest version, snapshots included
    Latest,
}

/// Error for versioning documents that do not follow the expected layout
#[derive(Error, Debug)]
#[error("invalid metadata file: {0}")]
pub struct MetadataFormatError(String);

/// Builds the versioning document URI for a repository and coordinate
///
/// Each dot-separated group segment becomes a path segment; no double
/// slash is introduced regardless of whether the base has a trailing
/// slash.
pub fn metadata_url(repository_base: &str, group_id: &str, artifact_id: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        repository_base.trim_end_matches('/'),
        group_id.replace('.', "/"),
        artifact_id,
        METADATA_FILENAME
    )
}

/// Returns true if a version string passes the stability filter
fn is_stable(version: &str) -> bool {
    UNSTABLE_MARKERS.iter().all(|m| !version.contains(m))
}

/// Streams a versioning document and selects a version
///
/// The parse short-circuits on a qualifying `release`/`latest` pointer
/// and again at the end of the version list, so trailing content is
/// never touched.
pub fn select_version(
    document: &str,
    target: VersionTarget,
) -> Result<Option<String>, MetadataFormatError> {
    let mut reader = Reader::from_str(document);
    reader.config_mut().trim_text(true);

    let mut in_metadata = false;
    let mut in_versioning = false;
    let mut in_latest = false;
    let mut in_release = false;
    let mut in_version = false;
    let mut versions: Option<Vec<String>> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"metadata" => in_metadata = true,
                b"versioning" => {
                    if !in_metadata {
                        return Err(MetadataFormatError(
                            "<versioning> outside <metadata>".to_string(),
                        ));
                    }
                    in_versioning = true;
                }
                b"latest" => {
                    if !in_versioning {
                        return Err(MetadataFormatError(
                            "<latest> outside <versioning>".to_string(),
                        ));
                    }
                    in_latest = true;
                }
                b"release" => {
                    if !in_versioning {
                        return Err(MetadataFormatError(
                            "<release> outside <versioning>".to_string(),
                        ));
                    }
                    in_release = true;
                }
                b"versions" => versions = Some(Vec::new()),
                b"version" => {
                    if versions.is_none() {
                        return Err(MetadataFormatError("unexpected element <version>".to_string()));
                    }
                    in_version = true;
                }
                _ => {}
            },
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| MetadataFormatError(e.to_string()))?;
                let wanted = match target {
                    VersionTarget::Release => in_release,
                    VersionTarget::Latest => in_latest,
                };
                if wanted && is_stable(&text) {
                    return Ok(Some(text.into_owned()));
                } else if in_version {
                    if let Some(ref mut collected) = versions {
                        collected.push(text.into_owned());
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"latest" => in_latest = false,
                b"release" => in_release = false,
                b"version" => in_version = false,
                b"versions" => {
                    return Ok(pick_from_list(versions.take().unwrap_or_default()));
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"versions" {
                    return Ok(None);
                }
            }
            Ok(Event::Eof) => return Ok(None),
            Ok(_) => {}
            Err(e) => return Err(MetadataFormatError(e.to_string())),
        }
    }
}

/// Selects from a collected version list: greatest stable entry first,
/// then the greatest entry overall, in descending lexicographic order
fn pick_from_list(mut versions: Vec<String>) -> Option<String> {
    versions.sort_unstable_by(|a, b| b.cmp(a));
    if let Some(stable) = versions.iter().find(|v| is_stable(v)) {
        return Some(stable.clone());
    }
    versions.into_iter().next()
}

/// Version picker backed by a remote repository's versioning documents
pub struct MetadataVersionPicker {
    client: HttpClient,
    repository_base: String,
}

impl MetadataVersionPicker {
    /// Create a picker for a repository base URI
    pub fn new(client: HttpClient, repository_base: impl Into<String>) -> Self {
        Self {
            client,
            repository_base: repository_base.into(),
        }
    }
}

#[async_trait]
impl VersionLookup for MetadataVersionPicker {
    async fn pick_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        target: VersionTarget,
    ) -> Result<Option<String>, LookupError> {
        let url = metadata_url(&self.repository_base, group_id, artifact_id);
        let response = self.client.get(&url).await?;

        // a non-2xx response means the repository has no such artifact
        if !response.status().is_success() {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::transport(&url, e.to_string()))?;

        select_version(&body, target).map_err(|e| LookupError::malformed(&url, e.to_string()))
    }
}
