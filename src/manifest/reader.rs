//! Manifest file reading

use crate::error::ManifestError;
use crate::manifest::Project;
use std::fs;
use std::path::Path;

/// Reads and parses a manifest file
pub fn read(path: &Path) -> Result<Project, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }

    let content = fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    parse(&content).map_err(|e| ManifestError::xml_error(path, e.to_string()))
}

/// Parses manifest content
pub fn parse(content: &str) -> Result<Project, quick_xml::DeError> {
    quick_xml::de::from_str(content)
}
