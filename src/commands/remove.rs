//! The remove command
//!
//! Removes dependency entries matching by artifact id, and by group id
//! when one is given. Coordinates that match nothing produce a warning;
//! the manifest is only rewritten when something was removed.

use crate::cli::{Cli, RemoveArgs};
use crate::domain::Dependency;
use crate::manifest::{reader, writer};
use anyhow::Context;
use colored::Colorize;

pub fn run(cli: &Cli, args: &RemoveArgs) -> anyhow::Result<()> {
    let pom_path = &cli.file;
    let mut project = reader::read(pom_path)?;

    let mut removed: Vec<Dependency> = Vec::new();
    for coord in &args.coords {
        match project.dependencies().iter().find(|d| d.matches(coord)) {
            Some(found) => removed.push(found.clone()),
            None => println!(
                "{} {}",
                coord.to_string().yellow().bold(),
                "is not a dependency".yellow()
            ),
        }
    }

    if removed.is_empty() {
        if cli.debug {
            eprintln!("No dependencies removed");
        }
        return Ok(());
    }

    project.dependencies_mut().retain(|d| !removed.contains(d));
    writer::write(&project, pom_path)
        .with_context(|| format!("could not update {}", pom_path.display()))?;

    for dependency in &removed {
        println!("{} removed", dependency.to_string().bold());
    }

    Ok(())
}
