//! Language-specific import scanners
//!
//! Each language module exposes a single line scanner built from independent
//! regex matchers. [`line_scanner`] is the lookup table from [`Language`] to
//! scanner; the matchers a language recognizes are listed in its module.

pub mod css;
pub mod javascript;
pub mod python;

use regex::Regex;

use super::{ImportDeclaration, ImportKind, SourceSpan};
use crate::language::Language;

/// Scans one line (1-based `line_number`) and appends any declarations found.
pub type LineScanner = fn(usize, &str, &mut Vec<ImportDeclaration>);

/// Scanner for a language.
pub fn line_scanner(language: Language) -> LineScanner {
    match language {
        Language::JavaScript | Language::TypeScript => javascript::scan_line,
        Language::Python => python::scan_line,
        Language::Css => css::scan_line,
    }
}

/// Append one declaration per match of `pattern` in `line`.
///
/// The pattern's first capture group is the import path; the whole match is
/// the statement and determines the span. Matching resumes after each hit, so
/// repeated constructs on one line are all reported.
pub(crate) fn collect_matches(
    pattern: &Regex,
    kind: ImportKind,
    line_number: usize,
    line: &str,
    out: &mut Vec<ImportDeclaration>,
) {
    for caps in pattern.captures_iter(line) {
        let (Some(whole), Some(path)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push(ImportDeclaration {
            kind,
            raw_path: path.as_str().to_string(),
            statement: whole.as_str().to_string(),
            span: SourceSpan::within_line(line_number, line, whole.start(), whole.end()),
        });
    }
}
