//! Path normalization helpers shared by extraction, resolution and the walker.
//!
//! Paths are handled as strings in a canonical forward-slash form and never
//! touch the filesystem. Identity comparisons go through [`path_key`], which
//! also folds case, so the same file reached through differently-cased or
//! backslash-separated strings compares equal.

use std::path::Path;

use path_clean::PathClean;

/// Normalize a path to forward slashes with `.` and `..` resolved lexically.
///
/// Repeated separators collapse and a trailing `/` is removed (except for the
/// root itself). A `..` that would climb above the root of an absolute path is
/// dropped; on a relative path it is kept. Case is preserved.
///
/// # Examples
///
/// ```
/// use pith::paths::normalize_path;
///
/// assert_eq!(normalize_path("/proj/src/./a/../b.ts"), "/proj/src/b.ts");
/// assert_eq!(normalize_path(r"C:\proj\src\App.tsx"), "C:/proj/src/App.tsx");
/// assert_eq!(normalize_path("../shared//x"), "../shared/x");
/// ```
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    match split_drive_prefix(&unified) {
        Some((drive, rest)) => {
            // Cleaned as rooted so `..` cannot consume the drive
            let cleaned = clean_lexically(&format!("/{}", rest));
            if cleaned == "/" {
                drive.to_string()
            } else {
                format!("{}{}", drive, cleaned)
            }
        }
        None => clean_lexically(&unified),
    }
}

fn clean_lexically(path: &str) -> String {
    Path::new(path).clean().to_string_lossy().replace('\\', "/")
}

/// Split `C:` off a `C:/...` path.
fn split_drive_prefix(path: &str) -> Option<(&str, &str)> {
    let bytes = path.as_bytes();
    let is_drive = bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/');
    if is_drive { Some(path.split_at(2)) } else { None }
}

/// Identity key for a path: normalized and lowercased.
pub fn path_key(path: &str) -> String {
    normalize_path(path).to_lowercase()
}

/// Case- and separator-insensitive path equality.
pub fn are_paths_equal(a: &str, b: &str) -> bool {
    path_key(a) == path_key(b)
}

/// Directory portion of a path.
///
/// Returns `/` for a file at the filesystem root and an empty string for a
/// bare file name.
pub fn dirname(path: &str) -> String {
    let normalized = normalize_path(path);
    match normalized.rfind('/') {
        Some(0) => "/".to_string(),
        Some(idx) => normalized[..idx].to_string(),
        None => String::new(),
    }
}

/// Join `rel` onto `base` and normalize.
///
/// Unlike `Path::join`, a leading `/` on `rel` does not discard `base`, which
/// is what root-absolute imports need.
pub fn join(base: &str, rel: &str) -> String {
    if base.is_empty() {
        return normalize_path(rel);
    }
    normalize_path(&format!("{}/{}", base, rel))
}

/// Resolve a relative reference against a directory.
pub fn resolve(base_dir: &str, rel: &str) -> String {
    join(base_dir, rel)
}

/// Final path segment.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Text after the final `.` of the final path segment.
///
/// ```
/// use pith::paths::extension_of;
///
/// assert_eq!(extension_of("src/App.TSX"), Some("TSX"));
/// assert_eq!(extension_of("src/.js"), Some("js"));
/// assert_eq!(extension_of("Makefile"), None);
/// ```
pub fn extension_of(path: &str) -> Option<&str> {
    let (_, ext) = file_name(path).rsplit_once('.')?;
    if ext.is_empty() { None } else { Some(ext) }
}

/// `path` relative to `root`, for display.
///
/// Returns `None` when `path` does not live under `root`.
pub fn relative_to(root: &str, path: &str) -> Option<String> {
    let root = normalize_path(root);
    let path = normalize_path(path);
    let prefix = if root.ends_with('/') {
        root
    } else {
        format!("{}/", root)
    };

    let head = path.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(&prefix) {
        Some(path[prefix.len()..].to_string())
    } else {
        None
    }
}
