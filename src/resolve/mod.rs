//! Coordinate resolution engine
//!
//! This module answers "what version (and group) does this coordinate
//! get?" by searching, in order:
//! - BOM-style imports in the manifest's own managed set
//! - the managed set of the parent manifest, local or remote
//! - the remote repository's version metadata
//!
//! All collaborators are injected; nothing here reaches for process
//! globals.

pub mod locator;
pub mod managed;
pub mod orchestrator;
pub mod provider;

pub use locator::{find_aggregator_ancestor, AncestorManifest, LocatedParent, ParentLocator};
pub use managed::ManagedResolver;
pub use orchestrator::Orchestrator;
pub use provider::{ArtifactResolver, RemoteRepositoryResolver, MAX_ANCESTOR_HOPS};
