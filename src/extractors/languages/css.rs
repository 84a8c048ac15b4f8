//! CSS / SCSS / Sass `@import` scanning.
//!
//! Accepts a quoted path or a `url(...)` wrapper, quoted or bare. Parentheses
//! are not balanced; a missing closing `)` still yields the path.

use regex::Regex;
use std::sync::LazyLock;

use super::collect_matches;
use crate::extractors::{ImportDeclaration, ImportKind};

static CSS_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@import\s+(?:url\(\s*)?['"]?([^'"()\s;]+)['"]?\s*\)?"#)
        .expect("CSS_IMPORT regex is invalid")
});

pub fn scan_line(line_number: usize, line: &str, out: &mut Vec<ImportDeclaration>) {
    collect_matches(&CSS_IMPORT, ImportKind::CssImport, line_number, line, out);
}
