//! Local import filtering
//!
//! Decides which raw import paths refer to files inside the project (as
//! opposed to registry packages or remote URLs) and normalizes them into the
//! form the resolver consumes.

use super::extract_imports;
use crate::string_utils::{contains_any, strip_any_suffix};

/// Extensions whose presence anywhere in a path marks it as a local file reference.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    ".js", ".ts", ".jsx", ".tsx", ".py", ".css", ".scss", ".sass",
];

/// Extensions removed from local paths before resolution. Stylesheet
/// extensions are kept as written.
const STRIPPED_EXTENSIONS: &[&str] = &[".jsx", ".tsx", ".js", ".ts", ".py"];

const URL_SCHEMES: &[&str] = &["http://", "https://"];

const EXPLICIT_PREFIXES: &[&str] = &["./", "../", "/"];

/// Whether a raw import path looks like a reference to a local project file.
///
/// # Examples
///
/// ```
/// use pith::extractors::is_local_import;
///
/// assert!(is_local_import("./utils/helper"));
/// assert!(is_local_import("lodash/debounce"));
/// assert!(!is_local_import("react"));
/// assert!(!is_local_import("https://cdn.example.com/lib.js"));
/// ```
pub fn is_local_import(raw_path: &str) -> bool {
    if URL_SCHEMES.iter().any(|scheme| raw_path.starts_with(scheme)) {
        return false;
    }

    EXPLICIT_PREFIXES
        .iter()
        .any(|prefix| raw_path.starts_with(prefix))
        || contains_any(raw_path, SOURCE_EXTENSIONS)
        || raw_path.contains('/')
}

/// Strip a trailing JavaScript/TypeScript/Python extension.
pub fn strip_source_extension(path: &str) -> &str {
    strip_any_suffix(path, STRIPPED_EXTENSIONS)
}

/// Extract the local import paths of a file, normalized for resolution.
///
/// Order follows the source; duplicates are kept.
pub fn extract_local_import_paths(content: &str, file_path: &str) -> Vec<String> {
    extract_imports(content, file_path)
        .into_iter()
        .filter(|decl| is_local_import(&decl.raw_path))
        .map(|decl| strip_source_extension(&decl.raw_path).to_string())
        .collect()
}
