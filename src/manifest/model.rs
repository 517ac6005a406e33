//! Project model mapped onto the pom.xml schema
//!
//! Field order follows the conventional pom layout so serialization
//! produces a conventional-looking document. Unknown elements in an
//! input document are ignored, not preserved.

use crate::domain::Dependency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maven POM namespace
pub const POM_XMLNS: &str = "http://maven.apache.org/POM/4.0.0";

/// A pom.xml project model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "project")]
pub struct Project {
    /// Root namespace attribute
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none", default)]
    pub xmlns: Option<String>,
    /// Model version (4.0.0)
    #[serde(
        rename = "modelVersion",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub model_version: Option<String>,
    /// Parent declaration
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent: Option<ParentRef>,
    /// Group id; may be absent when inherited from the parent
    #[serde(rename = "groupId", skip_serializing_if = "Option::is_none", default)]
    pub group_id: Option<String>,
    /// Artifact id
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    /// Version; may be absent when inherited from the parent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<String>,
    /// Packaging; absent means jar
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub packaging: Option<String>,
    /// Build properties
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub properties: Option<BTreeMap<String, String>>,
    /// Managed dependency set
    #[serde(
        rename = "dependencyManagement",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub dependency_management: Option<DependencyManagement>,
    /// Direct dependencies
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dependencies: Option<Dependencies>,
}

/// A `<parent>` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    /// Parent group id
    #[serde(rename = "groupId")]
    pub group_id: String,
    /// Parent artifact id
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    /// Parent version
    pub version: String,
    /// Relative path to the parent manifest; absent means `..`
    #[serde(
        rename = "relativePath",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub relative_path: Option<String>,
}

/// Container for `<dependencies>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(rename = "dependency", default)]
    pub items: Vec<Dependency>,
}

/// Container for `<dependencyManagement>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyManagement {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dependencies: Option<Dependencies>,
}

impl Project {
    /// Creates a minimal project model
    pub fn new(artifact_id: impl Into<String>) -> Self {
        Self {
            xmlns: Some(POM_XMLNS.to_string()),
            model_version: Some("4.0.0".to_string()),
            parent: None,
            group_id: None,
            artifact_id: artifact_id.into(),
            version: None,
            packaging: None,
            properties: None,
            dependency_management: None,
            dependencies: None,
        }
    }

    /// Returns the packaging, defaulting to jar
    pub fn packaging(&self) -> &str {
        self.packaging.as_deref().unwrap_or("jar")
    }

    /// Returns true if this manifest is an aggregator (`pom` packaging)
    pub fn is_aggregator(&self) -> bool {
        self.packaging() == "pom"
    }

    /// Group id, falling back to the parent declaration
    pub fn effective_group_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .or_else(|| self.parent.as_ref().map(|p| p.group_id.as_str()))
    }

    /// Version, falling back to the parent declaration
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or_else(|| self.parent.as_ref().map(|p| p.version.as_str()))
    }

    /// Direct dependencies, empty if none are declared
    pub fn dependencies(&self) -> &[Dependency] {
        self.dependencies
            .as_ref()
            .map(|d| d.items.as_slice())
            .unwrap_or_default()
    }

    /// Managed dependencies, empty if none are declared
    pub fn managed_dependencies(&self) -> &[Dependency] {
        self.dependency_management
            .as_ref()
            .and_then(|dm| dm.dependencies.as_ref())
            .map(|d| d.items.as_slice())
            .unwrap_or_default()
    }

    /// Mutable direct dependency list, created on demand
    pub fn dependencies_mut(&mut self) -> &mut Vec<Dependency> {
        &mut self.dependencies.get_or_insert_with(Default::default).items
    }

    /// Mutable managed dependency list, created on demand
    pub fn managed_dependencies_mut(&mut self) -> &mut Vec<Dependency> {
        &mut self
            .dependency_management
            .get_or_insert_with(Default::default)
            .dependencies
            .get_or_insert_with(Default::default)
            .items
    }

    /// Sets a build property, creating the properties map on demand
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
    }
}
