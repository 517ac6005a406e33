//! pom.xml dependency entry

use super::Coordinate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

// Property placeholder: ${some.property}
static PROPERTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\{[^}]+\}$").unwrap());

/// A dependency entry as declared in pom.xml
///
/// Serde renames follow the pom element names so the struct maps onto
/// `<dependency>` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Group id (absent only while the entry is being assembled)
    #[serde(rename = "groupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Artifact id
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    /// Version; absent when the version is managed elsewhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Artifact type (absent means jar)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub dep_type: Option<String>,
    /// Classifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Scope (absent means compile)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Optional marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// Exclusions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Exclusions>,
}

/// Container for `<exclusions>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusions {
    #[serde(rename = "exclusion", default)]
    pub items: Vec<Exclusion>,
}

/// A single `<exclusion>` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    /// Group id; `*` means wildcard
    #[serde(rename = "groupId")]
    pub group_id: String,
    /// Artifact id
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
}

impl Dependency {
    /// Creates a new dependency from its coordinate parts
    pub fn new(
        group_id: Option<impl Into<String>>,
        artifact_id: impl Into<String>,
        version: Option<impl Into<String>>,
    ) -> Self {
        Self {
            group_id: group_id.map(Into::into),
            artifact_id: artifact_id.into(),
            version: version.map(Into::into),
            dep_type: None,
            classifier: None,
            scope: None,
            optional: None,
            exclusions: None,
        }
    }

    /// Creates a dependency from a coordinate
    pub fn from_coordinate(coord: &Coordinate) -> Self {
        Self::new(
            coord.group_id.clone(),
            coord.artifact_id.clone(),
            coord.version.clone(),
        )
    }

    /// Returns the coordinate of this entry
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.version.clone(),
        )
    }

    /// Returns true if this entry is a BOM-style import
    /// (`type` is `pom` and `scope` is `import`)
    pub fn is_import(&self) -> bool {
        self.dep_type.as_deref() == Some("pom") && self.scope.as_deref() == Some("import")
    }

    /// Returns true if this entry matches the target coordinate
    ///
    /// Artifact ids match exactly. The group id filters only when the
    /// target supplies one; a group-less target matches any group.
    pub fn matches(&self, target: &Coordinate) -> bool {
        if self.artifact_id != target.artifact_id {
            return false;
        }
        match target.group_id {
            Some(ref group) => self.group_id.as_deref() == Some(group.as_str()),
            None => true,
        }
    }

    /// Returns true if two entries refer to the same artifact
    ///
    /// Group ids are compared unless `ignore_group` is set; classifiers
    /// always participate.
    pub fn same_artifact(&self, other: &Dependency, ignore_group: bool) -> bool {
        if !ignore_group && self.group_id != other.group_id {
            return false;
        }
        self.artifact_id == other.artifact_id && self.classifier == other.classifier
    }

    /// Returns true if the version is a `${...}` property placeholder
    pub fn has_property_version(&self) -> bool {
        self.version
            .as_deref()
            .is_some_and(|v| PROPERTY_RE.is_match(v))
    }
}

impl fmt::Display for Dependency {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_new() {
        let dep = Dependency::new(Some("org.slf4j"), "slf4j-api", Some("2.0.17"));
        assert_eq!(dep.group_id.as_deref(), Some("org.slf4j"));
        assert_eq!(dep.artifact_id, "slf4j-api");
        assert_eq!(dep.version.as_deref(), Some("2.0.17"));
        assert!(dep.scope.is_none());
    }

    #[test]
    fn test_is_import() {
        let mut dep = Dependency::new(Some("org.junit"), "junit-bom", Some("5.11.0"));
        assert!(!dep.is_import());

        dep.dep_type = Some("pom".to_string());
        dep.scope = Some("import".to_string());
        assert!(dep.is_import());

        dep.scope = Some("test".to_string());
        assert!(!dep.is_import());
    }

    #[test]
    fn test_matches_with_group() {
        let dep = Dependency::new(Some("org.slf4j"), "slf4j-api", Some("2.0.17"));
        let target = Coordinate::new(Some("org.slf4j"), "slf4j-api", None::<String>);
        assert!(dep.matches(&target));

        let other_group = Coordinate::new(Some("ch.qos.logback"), "slf4j-api", None::<String>);
        assert!(!dep.matches(&other_group));
    }

    #[test]
    fn test_matches_without_group() {
        let dep = Dependency::new(Some("org.slf4j"), "slf4j-api", Some("2.0.17"));
        let target = Coordinate::new(None::<String>, "slf4j-api", None::<String>);
        assert!(dep.matches(&target));
    }

    #[test]
    fn test_matches_artifact_exact() {
        let dep = Dependency::new(Some("org.slf4j"), "slf4j-api", Some("2.0.17"));
        let target = Coordinate::new(None::<String>, "slf4j", None::<String>);
        assert!(!dep.matches(&target));
    }

    #[test]
    fn test_same_artifact() {
        let a = Dependency::new(Some("g1"), "a", Some("1"));
        let b = Dependency::new(Some("g2"), "a", None::<String>);
        assert!(a.same_artifact(&b, true));
        assert!(!a.same_artifact(&b, false));

        let mut c = Dependency::new(Some("g1"), "a", None::<String>);
        c.classifier = Some("sources".to_string());
        assert!(!a.same_artifact(&c, true));
    }

    #[test]
    fn test_coordinate_round_trip() {
        let dep = Dependency::new(Some("g"), "a", Some("1.0"));
        let coord = dep.coordinate();
        assert_eq!(coord.to_string(), "g:a:1.0");
        assert_eq!(Dependency::from_coordinate(&coord), dep);
    }

    #[test]
    fn test_has_property_version() {
        let mut dep = Dependency::new(Some("g"), "a", Some("${jackson.version}"));
        assert!(dep.has_property_version());

        dep.version = Some("2.18.0".to_string());
        assert!(!dep.has_property_version());

        dep.version = None;
        assert!(!dep.has_property_version());
    }

    #[test]
    fn test_display() {
        let dep = Dependency::new(Some("org.slf4j"), "slf4j-api", Some("2.0.17"));
        assert_eq!(dep.to_string(), "org.slf4j:slf4j-api:2.0.17");

        let bare = Dependency::new(None::<String>, "slf4j-api", None::<String>);
        assert_eq!(bare.to_string(), "slf4j-api");
    }

    #[test]
    fn test_serde_pom_element_names() {
        let mut dep = Dependency::new(Some("org.junit"), "junit-bom", Some("5.11.0"));
        dep.dep_type = Some("pom".to_string());
        dep.scope = Some("import".to_string());

        let xml = quick_xml::se::to_string_with_root("dependency", &dep).unwrap();
        assert!(xml.contains("<groupId>org.junit</groupId>"));
        assert!(xml.contains("<artifactId>junit-bom</artifactId>"));
        assert!(xml.contains("<type>pom</type>"));
        assert!(xml.contains("<scope>import</scope>"));
        assert!(!xml.contains("classifier"));

        let parsed: Dependency = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(parsed, dep);
    }

    #[test]
    fn test_serde_exclusions() {
        let mut dep = Dependency::new(Some("g"), "a", Some("1"));
        dep.exclusions = Some(Exclusions {
            items: vec![Exclusion {
                group_id: "*".to_string(),
                artifact_id: "commons-logging".to_string(),
            }],
        });

        let xml = quick_xml::se::to_string_with_root("dependency", &dep).unwrap();
        assert!(xml.contains("<exclusion>"));
        assert!(xml.contains("<groupId>*</groupId>"));

        let parsed: Dependency = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(parsed.exclusions.unwrap().items.len(), 1);
    }
}
