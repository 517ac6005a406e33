//! Artifact coordinates with partial-specification semantics

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A (group, artifact, version) triple identifying one artifact
///
/// The artifact id is always present. A coordinate without a version is
/// "unresolved"; one without a group id must have the group filled in
/// from context (a managed entry) before it is usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Group id, if supplied
    pub group_id: Option<String>,
    /// Artifact id
    pub artifact_id: String,
    /// Version, if supplied
    pub version: Option<String>,
}

/// Error for coordinate strings that are not 1 to 3 colon-separated segments
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid coordinate '{0}': expected [groupId:]artifactId[:version]")]
pub struct CoordinateError(pub String);

impl Coordinate {
    /// Creates a new coordinate
    pub fn new(
        group_id: Option<impl Into<String>>,
        artifact_id: impl Into<String>,
        version: Option<impl Into<String>>,
    ) -> Self {
        Self {
            group_id: group_id.map(Into::into),
            artifact_id: artifact_id.into(),
            version: version.map(Into::into),
        }
    }

    /// Parses a colon-delimited coordinate string
    ///
    /// 1 segment is an artifact id, 2 segments are group:artifact,
    /// 3 segments are group:artifact:version. Any other count is invalid.
    pub fn parse(input: &str) -> Result<Self, CoordinateError> {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(CoordinateError(input.to_string()));
        }
        match parts.as_slice() {
            [artifact] => Ok(Self::new(None::<String>, *artifact, None::<String>)),
            [group, artifact] => Ok(Self::new(Some(*group), *artifact, None::<String>)),
            [group, artifact, version] => Ok(Self::new(Some(*group), *artifact, Some(*version))),
            _ => Err(CoordinateError(input.to_string())),
        }
    }

    /// Returns true if the version is missing
    pub fn is_unresolved(&self) -> bool {
        self.version.is_none()
    }

    /// Returns true if group, artifact and version are all present
    pub fn is_fully_specified(&self) -> bool {
        self.group_id.is_some() && self.version.is_some()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref group) = self.group_id {
            write!(f, "{}:", group)?;
        }
        write!(f, "{}", self.artifact_id)?;
        if let Some(ref version) = self.version {
            write!(f, ":{}", version)?;
        }
        Ok(())
    }
}
