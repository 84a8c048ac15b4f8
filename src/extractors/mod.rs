//! Import statement extraction
//!
//! Turns raw file content into a sequence of [`ImportDeclaration`]s using a
//! per-language line scanner, then narrows those down to references that look
//! like local project files.
//!
//! # Architecture
//!
//! - **Language scanners**: one module per language family in `languages/`,
//!   each composed of independent regex matchers applied to a single line
//! - **Strategy table**: [`languages::line_scanner`] maps a [`Language`] to its
//!   scanner, so adding a language is one module plus one table entry
//! - **Locality filter**: [`imports`] decides which raw paths refer to local
//!   files and normalizes them for resolution
//!
//! Scanning is line-based. An import statement split over several lines is not
//! recognized.

pub mod imports;
pub mod languages;

use serde::Serialize;

use crate::language::Language;

pub use imports::{extract_local_import_paths, is_local_import, strip_source_extension};

/// Syntactic form an import was written in. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportKind {
    StaticImport,
    DynamicImport,
    RequireCall,
    FromImport,
    CssImport,
}

impl ImportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportKind::StaticImport => "static-import",
            ImportKind::DynamicImport => "dynamic-import",
            ImportKind::RequireCall => "require-call",
            ImportKind::FromImport => "from-import",
            ImportKind::CssImport => "css-import",
        }
    }
}

/// 1-based source location of a declaration.
///
/// Columns count characters; `end_column` is one past the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceSpan {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl SourceSpan {
    /// Span of the byte range `start..end` within a single line.
    pub fn within_line(line_number: usize, line: &str, start: usize, end: usize) -> Self {
        Self {
            start_line: line_number,
            start_column: line[..start].chars().count() + 1,
            end_line: line_number,
            end_column: line[..end].chars().count() + 1,
        }
    }
}

/// One import found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportDeclaration {
    pub kind: ImportKind,
    /// The path or module exactly as written in the source.
    pub raw_path: String,
    /// Source text of the statement (synthesized for multi-module Python imports).
    pub statement: String,
    pub span: SourceSpan,
}

/// Extract every import declaration from `content`.
///
/// The scanner is chosen from `file_path`'s extension. Files with an
/// extension that has no scanner yield an empty sequence.
pub fn extract_imports(content: &str, file_path: &str) -> Vec<ImportDeclaration> {
    let Some(language) = Language::from_path(file_path) else {
        return Vec::new();
    };

    let scan_line = languages::line_scanner(language);
    let mut declarations = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        scan_line(idx + 1, line, &mut declarations);
    }
    declarations
}
