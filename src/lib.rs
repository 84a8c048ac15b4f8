//! Pith - Follows local imports from a file selection and packs the result as prompt context

pub mod deps;
pub mod extractors;
pub mod file_utils;
pub mod language;
pub mod output;
pub mod paths;
pub mod project;
pub mod resolver;
pub mod selection;
pub mod string_utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use deps::{DependencyClosure, DependencyWalker, ScanError, get_dependency_files};
pub use extractors::{
    ImportDeclaration, ImportKind, SourceSpan, extract_imports, extract_local_import_paths,
};
pub use language::Language;
pub use output::{
    BundleConfig, DependencyReport, OutputConfig, assemble_bundle, estimate_tokens,
    format_file_tree, print_dependencies, print_imports, print_json,
};
pub use project::{FileRecord, ProjectConfig, ProjectError, scan_project};
pub use resolver::{CandidateIndex, PathResolver, ResolverConfig, resolve_import_path};
pub use selection::{DependencyOffer, OfferEntry, SelectError, Selection};
