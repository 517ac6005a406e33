//! The id command
//!
//! Without an argument, prints the project id as
//! `packaging groupId:artifactId:version`, group and version falling
//! back to the parent declaration. With an argument, sets the id,
//! creating a new manifest (with ancestor parent discovery) when none
//! exists yet.

use crate::cli::{Cli, IdArgs};
use crate::config::Config;
use crate::manifest::{reader, scaffold, writer, Project};
use anyhow::bail;

pub fn run(cli: &Cli, args: &IdArgs) -> anyhow::Result<()> {
    let pom_path = &cli.file;

    if let Some(ref id) = args.id {
        update(cli, args, id)?;
    } else if !pom_path.exists() {
        bail!("no such file: {}", pom_path.display());
    }

    let project = reader::read(pom_path)?;
    println!("{}", project_id(&project));
    Ok(())
}

fn update(cli: &Cli, args: &IdArgs, id: &str) -> anyhow::Result<()> {
    let pom_path = &cli.file;

    let mut project = if pom_path.exists() {
        if cli.debug {
            eprintln!("Reading existing manifest at {}", pom_path.display());
        }
        reader::read(pom_path)?
    } else {
        if cli.debug {
            eprintln!("Creating new manifest at {}", pom_path.display());
        }
        let config = Config::load()?;
        scaffold::new_project(pom_path, args.standalone, &config.default_group_id)?
    };

    apply_id(&mut project, id, pom_path);

    if let Some(ref packaging) = args.packaging {
        project.packaging = Some(packaging.clone());
    }

    writer::write(&project, pom_path)?;
    Ok(())
}

/// Applies an id string onto the model
///
/// Two or more segments set group and artifact; a single segment sets
/// only the artifact. A third segment sets the version; without one,
/// a manifest with a parent keeps its version inherited. The artifact
/// id `.` means the manifest's directory name.
fn apply_id(project: &mut Project, id: &str, pom_path: &std::path::Path) {
    let parts: Vec<&str> = id.splitn(3, ':').collect();

    match parts.as_slice() {
        [artifact] => project.artifact_id = artifact.to_string(),
        [group, artifact, ..] => {
            project.group_id = Some(group.to_string());
            project.artifact_id = artifact.to_string();
        }
        _ => {}
    }

    if parts.len() >= 3 {
        project.version = Some(parts[2].to_string());
    } else if project.parent.is_some() {
        // version stays inherited when <parent> is present
        project.version = None;
    }

    if project.artifact_id == "." {
        project.artifact_id = directory_name(pom_path);
    }
}

fn directory_name(pom_path: &std::path::Path) -> String {
    crate::manifest::absolute(pom_path)
        .parent()
        .and_then(std::path::Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string())
}

/// `packaging groupId:artifactId:version` with parent fallbacks
fn project_id(project: &Project) -> String {
    format!(
        "{} {}:{}:{}",
        project.packaging(),
        project.effective_group_id().unwrap_or("-"),
        project.artifact_id,
        project.effective_version().unwrap_or("-")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ParentRef;
    use std::path::Path;

    fn project_with_parent() -> Project {
        let mut project = Project::new("app");
        project.parent = Some(ParentRef {
            group_id: "org.example".to_string(),
            artifact_id: "demo-parent".to_string(),
            version: "1.0.0".to_string(),
            relative_path: None,
        });
        project
    }

    #[test]
    fn test_apply_id_artifact_only() {
        let mut project = Project::new("old");
        apply_id(&mut project, "renamed", Path::new("/work/app/pom.xml"));
        assert_eq!(project.artifact_id, "renamed");
        assert_eq!(project.group_id, None);
    }

    #[test]
    fn test_apply_id_group_and_artifact() {
        let mut project = Project::new("old");
        apply_id(&mut project, "com.acme:app", Path::new("/work/app/pom.xml"));
        assert_eq!(project.group_id.as_deref(), Some("com.acme"));
        assert_eq!(project.artifact_id, "app");
    }

    #[test]
    fn test_apply_id_full() {
        let mut project = Project::new("old");
        apply_id(
            &mut project,
            "com.acme:app:2.0.0",
            Path::new("/work/app/pom.xml"),
        );
        assert_eq!(project.version.as_deref(), Some("2.0.0"));
    }

    #[test]
    fn test_apply_id_clears_version_with_parent() {
        let mut project = project_with_parent();
        project.version = Some("0.0.1-SNAPSHOT".to_string());
        apply_id(&mut project, "com.acme:app", Path::new("/work/app/pom.xml"));
        assert_eq!(project.version, None);
    }

    #[test]
    fn test_apply_id_dot_uses_directory_name() {
        let mut project = Project::new("old");
        apply_id(&mut project, ".", Path::new("/work/widget/pom.xml"));
        assert_eq!(project.artifact_id, "widget");
    }

    #[test]
    fn test_project_id_own_fields() {
        let mut project = Project::new("app");
        project.group_id = Some("com.acme".to_string());
        project.version = Some("1.2.3".to_string());
        assert_eq!(project_id(&project), "jar com.acme:app:1.2.3");
    }

    #[test]
    fn test_project_id_parent_fallback() {
        let project = project_with_parent();
        assert_eq!(project_id(&project), "jar org.example:app:1.0.0");
    }

    #[test]
    fn test_project_id_packaging() {
        let mut project = project_with_parent();
        project.packaging = Some("pom".to_string());
        assert!(project_id(&project).starts_with("pom "));
    }
}
