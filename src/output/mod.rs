//! Output surfaces
//!
//! This module renders dependency walks and selections for people and tools:
//! - Console listings with colors
//! - JSON reports
//! - Context bundles (file map, file contents, instructions)
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `tree` - ASCII file tree used by the bundle's file map
//! - `bundle` - Bundle assembly and token estimate
//! - `console` - Colored dependency and import listings
//! - `json` - JSON report

mod bundle;
mod config;
mod console;
mod json;
mod tree;

pub use bundle::{assemble_bundle, estimate_tokens};
pub use config::{BundleConfig, OutputConfig};
pub use console::{
    NO_DEPENDENCIES_HINT, print_dependencies, print_imports, write_dependencies, write_imports,
};
pub use json::{DependencyReport, print_json};
pub use tree::format_file_tree;
