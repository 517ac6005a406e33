//! Manifest file writing
//!
//! Serializes the known model fields with two-space indentation. Unknown
//! elements from an input document are not carried over.

use crate::error::ManifestError;
use crate::manifest::Project;
use serde::Serialize;
use std::fs;
use std::path::Path;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Serializes a project model to a manifest document
pub fn to_xml(project: &Project) -> Result<String, quick_xml::SeError> {
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::with_root(&mut body, Some("project"))?;
    serializer.indent(' ', 2);
    project.serialize(serializer)?;

    let mut document = String::with_capacity(XML_DECLARATION.len() + body.len() + 1);
    document.push_str(XML_DECLARATION);
    document.push_str(&body);
    document.push('\n');
    Ok(document)
}

/// Writes a project model to a manifest file
pub fn write(project: &Project, path: &Path) -> Result<(), ManifestError> {
    let document = to_xml(project).map_err(|e| ManifestError::xml_error(path, e.to_string()))?;
    fs::write(path, document).map_err(|e| ManifestError::write_error(path, e))
}
