//! Remote repository clients
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - Version metadata fetching and selection (maven-metadata.xml)
//! - Maven Central search API adapter

mod client;
mod metadata;
mod search;

pub use client::HttpClient;
pub use metadata::{
    metadata_url, select_version, MetadataFormatError, MetadataVersionPicker, VersionTarget,
};
pub use search::{SearchClient, SearchDoc, SearchRequest, SearchResult};

use crate::error::LookupError;
use async_trait::async_trait;

/// Trait for version lookups against a remote repository
///
/// `Ok(None)` means the repository has nothing for the coordinate; hard
/// transport or parse failures are errors.
#[async_trait]
pub trait VersionLookup: Send + Sync {
    /// Pick a version for group:artifact per the selection policy
    async fn pick_version(
        &self,
        group_id: &str,
        artifact_id: &str,
        target: VersionTarget,
    ) -> Result<Option<String>, LookupError>;
}
