//! pomup - Maven pom.xml dependency editor CLI tool
//!
//! Edits pom.xml manifests: adds and removes dependencies (inferring
//! missing versions from managed dependency sets, the parent chain and
//! remote version metadata), initializes project ids, and searches
//! Maven Central.

use clap::Parser;
use colored::Colorize;
use pomup::cli::{Cli, Command};
use pomup::commands;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.debug {
        eprintln!("pomup v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Manifest: {}", cli.file.display());
    }

    match cli.command.clone() {
        Command::Add(args) => commands::add::run(&cli, &args).await,
        Command::Remove(args) => commands::remove::run(&cli, &args),
        Command::Id(args) => commands::id::run(&cli, &args),
        Command::Search(args) => commands::search::run(&cli, &args).await,
    }
}
