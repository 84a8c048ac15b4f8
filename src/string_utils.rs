//! String utility functions for common string operations.

/// Strip the first matching suffix from a string.
///
/// Iterates through the provided suffixes and returns the string with
/// the first matching suffix removed. If no suffix matches, returns the
/// original string unchanged.
///
/// # Example
///
/// ```
/// use pith::string_utils::strip_any_suffix;
///
/// const SUFFIXES: &[&str] = &[".tsx", ".ts"];
/// assert_eq!(strip_any_suffix("./App.tsx", SUFFIXES), "./App");
/// assert_eq!(strip_any_suffix("./util.ts", SUFFIXES), "./util");
/// assert_eq!(strip_any_suffix("./style.css", SUFFIXES), "./style.css");
/// ```
pub fn strip_any_suffix<'a>(s: &'a str, suffixes: &[&str]) -> &'a str {
    for suffix in suffixes {
        if let Some(stripped) = s.strip_suffix(suffix) {
            return stripped;
        }
    }
    s
}

/// Check whether `s` contains any of the given needles.
pub fn contains_any(s: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| s.contains(needle))
}
