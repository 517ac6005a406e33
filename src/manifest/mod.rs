//! pom.xml reading, writing and creation
//!
//! This module provides:
//! - The Project model mapped onto the pom.xml schema
//! - Reader and writer for manifest files
//! - Scaffolding for brand-new manifests (with ancestor parent discovery)

mod model;
pub mod reader;
pub mod scaffold;
pub mod writer;

pub use model::{Dependencies, DependencyManagement, ParentRef, Project};

/// The well-known manifest filename
pub const MANIFEST_FILENAME: &str = "pom.xml";

/// Absolute form of a manifest path, resolved against the working
/// directory
pub(crate) fn absolute(path: &std::path::Path) -> std::path::PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
