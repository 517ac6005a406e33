//! CLI argument parsing module for pomup

use crate::domain::Coordinate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Parse a coordinate argument
fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    Coordinate::parse(s).map_err(|e| e.to_string())
}

/// Maven pom.xml dependency editor
#[derive(Parser, Debug, Clone)]
#[command(name = "pomup", version, about = "Maven pom.xml dependency editor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the manifest file
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        default_value = "pom.xml"
    )]
    pub file: PathBuf,

    /// Print diagnostic output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress progress display
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add dependencies
    Add(AddArgs),

    /// Remove dependencies
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Show or set the project id
    Id(IdArgs),

    /// Search Maven Central
    Search(SearchArgs),
}

/// Arguments for the add command
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Mark as optional
    #[arg(short, long)]
    pub optional: bool,

    /// Comma-separated list of exclusions ([GROUP_ID:]ARTIFACT_ID)
    #[arg(short = 'e', long = "excludes", value_delimiter = ',')]
    pub excludes: Vec<String>,

    /// groupId:artifactId[:version] coordinates
    #[arg(required = true, value_name = "DEPENDENCY", value_parser = parse_coordinate)]
    pub coords: Vec<Coordinate>,
}

/// Mutually exclusive dependency scope flags
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct ScopeArgs {
    /// Add as compile dependency. This is the default
    #[arg(short = 'c', long)]
    pub compile: bool,

    /// Add as runtime dependency
    #[arg(short = 'r', long)]
    pub runtime: bool,

    /// Add as provided dependency
    #[arg(short = 'p', long)]
    pub provided: bool,

    /// Add as test dependency
    #[arg(short = 't', long)]
    pub test: bool,

    /// Add as import dependency (managed BOM import)
    #[arg(short = 'i', long = "import")]
    pub import: bool,
}

impl ScopeArgs {
    /// The scope name these flags select
    pub fn value(&self) -> &'static str {
        if self.runtime {
            return "runtime";
        }
        if self.provided {
            return "provided";
        }
        if self.test {
            return "test";
        }
        if self.import {
            return "import";
        }
        "compile"
    }
}

/// Arguments for the remove command
#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// [groupId:]artifactId coordinates to remove
    #[arg(required = true, value_name = "DEPENDENCY", value_parser = parse_coordinate)]
    pub coords: Vec<Coordinate>,
}

/// Arguments for the id command
#[derive(Args, Debug, Clone)]
pub struct IdArgs {
    /// Project id ([groupId:]artifactId[:version], or `.` for the
    /// directory name); prints the current id when omitted
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Packaging to set
    #[arg(long = "as", value_name = "PACKAGING")]
    pub packaging: Option<String>,

    /// Don't search ancestor directories for a parent manifest
    #[arg(short, long)]
    pub standalone: bool,
}

/// Arguments for the search command
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Coordinate or search term
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results
    #[arg(long, default_value_t = 40)]
    pub rows: u32,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}
