//! Scaffolding for brand-new manifests

use crate::error::ManifestError;
use crate::manifest::{absolute, ParentRef, Project};
use crate::resolve::locator;
use std::path::Path;

/// Default version for new projects
const INITIAL_VERSION: &str = "0.0.1-SNAPSHOT";

/// Creates a model for a brand-new manifest at the given path
///
/// Unless `standalone` is set, nearby ancestor directories are searched
/// for an aggregator manifest to inherit as `<parent>`. Standalone
/// projects get their own group id and default properties instead.
pub fn new_project(
    pom_path: &Path,
    standalone: bool,
    default_group_id: &str,
) -> Result<Project, ManifestError> {
    let mut project = Project::new(artifact_id_for(pom_path));
    project.version = Some(INITIAL_VERSION.to_string());

    let ancestor = if standalone {
        None
    } else {
        locator::find_aggregator_ancestor(pom_path)?
    };

    match ancestor {
        Some(found) => {
            let parent = &found.project;
            project.parent = Some(ParentRef {
                group_id: parent
                    .effective_group_id()
                    .unwrap_or(default_group_id)
                    .to_string(),
                artifact_id: parent.artifact_id.clone(),
                version: parent
                    .effective_version()
                    .unwrap_or(INITIAL_VERSION)
                    .to_string(),
                relative_path: relative_path_to(pom_path, &found.path),
            });
        }
        None => {
            project.group_id = Some(default_group_id.to_string());
            // Use UTF-8 for default encoding.
            project.set_property("project.build.sourceEncoding", "UTF-8");
        }
    }

    Ok(project)
}

/// The artifact id for a manifest path is its directory name
fn artifact_id_for(pom_path: &Path) -> String {
    absolute(pom_path)
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string())
}

/// Relative path from the new manifest's directory to the parent
/// manifest's directory; `None` for the `..` default
fn relative_path_to(pom_path: &Path, parent_pom_path: &Path) -> Option<String> {
    let own_dir = absolute(pom_path).parent()?.to_path_buf();
    let parent_dir = absolute(parent_pom_path).parent()?.to_path_buf();

    // the ancestor search only walks upward, so the relative path is a
    // chain of ".." segments
    let hops = own_dir.ancestors().position(|a| a == parent_dir)?;
    if hops <= 1 {
        return None;
    }
    Some(vec![".."; hops].join("/"))
}
