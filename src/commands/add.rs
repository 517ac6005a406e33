//! The add command
//!
//! Adds dependency entries to the manifest, resolving missing versions
//! through the managed-dependency chain and the remote repository.
//! Entries land in `<dependencyManagement>` when the manifest has `pom`
//! packaging or the scope is `import`, in `<dependencies>` otherwise.

use crate::cli::{AddArgs, Cli};
use crate::config::Config;
use crate::domain::{Coordinate, Dependency, Exclusion, Exclusions};
use crate::error::ManifestError;
use crate::manifest::{reader, scaffold, writer, Project};
use crate::progress::Progress;
use crate::registry::{HttpClient, MetadataVersionPicker};
use crate::resolve::{Orchestrator, RemoteRepositoryResolver};
use anyhow::{anyhow, bail, Context};
use colored::Colorize;
use std::sync::Arc;

pub async fn run(cli: &Cli, args: &AddArgs) -> anyhow::Result<()> {
    let config = Config::load()?;
    let pom_path = &cli.file;

    let mut project = match reader::read(pom_path) {
        Ok(project) => project,
        Err(ManifestError::NotFound { .. }) => {
            eprintln!("{} does not exist. Creating a new one", pom_path.display());
            scaffold::new_project(pom_path, false, &config.default_group_id)?
        }
        Err(e) => return Err(e.into()),
    };

    let scope = args.scope.value();
    let into_managed = targets_managed_set(&project, args.scope.import);

    if args.optional && project.is_aggregator() {
        bail!("adding optional dependency with `pom' packaging is not supported");
    }

    if cli.debug {
        eprintln!("Checking for duplicates");
    }
    let existing: &[Dependency] = if into_managed {
        project.managed_dependencies()
    } else {
        project.dependencies()
    };
    let duplicates: Vec<String> = args
        .coords
        .iter()
        .filter(|coord| existing.iter().any(|d| d.matches(coord)))
        .map(Coordinate::to_string)
        .collect();
    if !duplicates.is_empty() {
        bail!("duplicate artifact(s): {}", duplicates.join(", "));
    }

    let exclusions = parse_exclusions(&args.excludes)?;

    let client = HttpClient::new()?;
    let resolver = Arc::new(RemoteRepositoryResolver::new(
        client.clone(),
        config.repository.clone(),
        config.local_repository.clone(),
    ));
    let picker = Arc::new(MetadataVersionPicker::new(client, config.repository.clone()));
    let orchestrator = Orchestrator::new(resolver, picker);

    let mut progress = Progress::new(!cli.quiet);
    progress.spinner("Resolving versions...");
    let resolved = orchestrator
        .resolve_all(
            Arc::new(project.clone()),
            Arc::new(pom_path.clone()),
            args.coords.clone(),
            scope,
        )
        .await;
    progress.finish_and_clear();
    let resolved = resolved?;

    let mut added = Vec::with_capacity(resolved.len());
    for mut dependency in resolved {
        // the scope element is written only for non-compile scopes
        if scope != "compile" {
            dependency.scope = Some(scope.to_string());
            if args.scope.import {
                dependency.dep_type = Some("pom".to_string());
            }
        }
        if args.optional {
            dependency.optional = Some(true);
        }
        if let Some(ref exclusions) = exclusions {
            dependency.exclusions = Some(exclusions.clone());
        }
        added.push(dependency);
    }

    let entries = if into_managed {
        project.managed_dependencies_mut()
    } else {
        project.dependencies_mut()
    };
    entries.extend(added.iter().cloned());

    writer::write(&project, pom_path)
        .with_context(|| format!("could not update {}", pom_path.display()))?;

    for dependency in &added {
        println!("{} {} added{}", scope_icon(dependency), added_line(dependency), optional_tag(dependency));
    }

    Ok(())
}

fn scope_icon(dependency: &Dependency) -> &'static str {
    super::scope_icon(dependency.scope.as_deref())
}

/// `group:artifact:version` with the version dimmed when it stays
/// managed elsewhere
fn added_line(dependency: &Dependency) -> String {
    let coordinate = format!(
        "{}:{}",
        dependency.group_id.as_deref().unwrap_or_default(),
        dependency.artifact_id
    );
    match dependency.version {
        Some(ref version) => format!("{}:{}", coordinate, version),
        None => format!("{}:{}", coordinate, "<managed>".italic().dimmed()),
    }
}

fn optional_tag(dependency: &Dependency) -> String {
    if dependency.optional == Some(true) {
        format!(" [{}]", "optional".yellow())
    } else {
        String::new()
    }
}

/// Parse `--excludes` values; a missing group becomes the `*` wildcard
fn parse_exclusions(excludes: &[String]) -> anyhow::Result<Option<Exclusions>> {
    if excludes.is_empty() {
        return Ok(None);
    }

    let mut items = Vec::with_capacity(excludes.len());
    for value in excludes {
        let coord = Coordinate::parse(value).map_err(|e| anyhow!("{}", e))?;
        items.push(Exclusion {
            group_id: coord.group_id.unwrap_or_else(|| "*".to_string()),
            artifact_id: coord.artifact_id,
        });
    }
    Ok(Some(Exclusions { items }))
}

/// Entries join the managed set for aggregator manifests and import
/// scope, the plain dependency list otherwise
fn targets_managed_set(project: &Project, import_scope: bool) -> bool {
    project.is_aggregator() || import_scope
}
