//! Command workflows
//!
//! Each submodule implements one CLI subcommand on top of the manifest
//! and resolution modules.

pub mod add;
pub mod id;
pub mod remove;
pub mod search;

/// Icon for a dependency scope, used in add output
fn scope_icon(scope: Option<&str>) -> &'static str {
    match scope {
        Some("provided") => "📦",
        Some("runtime") => "🏃",
        Some("test") => "🔬",
        Some("import") => "🚢",
        _ => "🔨",
    }
}
