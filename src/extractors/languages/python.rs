//! Python import scanning.
//!
//! Recognizes `import a, b.c as d` (one declaration per module, aliases
//! dropped) and `from <module> import ...` where the module is a dotted or
//! relative (`.`-prefixed) path. The imported names are not parsed.

use regex::Regex;
use std::sync::LazyLock;

use super::collect_matches;
use crate::extractors::{ImportDeclaration, ImportKind, SourceSpan};

static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*import\s+([\w.]+(?:\s+as\s+\w+)?(?:\s*,\s*[\w.]+(?:\s+as\s+\w+)?)*)")
        .expect("IMPORT regex is invalid")
});

static FROM_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*from\s+(\.+[\w.]*|[\w.]+)\s+import\b").expect("FROM_IMPORT regex is invalid")
});

pub fn scan_line(line_number: usize, line: &str, out: &mut Vec<ImportDeclaration>) {
    if line.trim_start().starts_with('#') {
        return;
    }

    if let Some(caps) = IMPORT.captures(line) {
        if let (Some(whole), Some(modules)) = (caps.get(0), caps.get(1)) {
            let span = SourceSpan::within_line(line_number, line, whole.start(), whole.end());
            for module in modules.as_str().split(',') {
                let Some(name) = module.split_whitespace().next() else {
                    continue;
                };
                out.push(ImportDeclaration {
                    kind: ImportKind::StaticImport,
                    raw_path: name.to_string(),
                    statement: format!("import {}", name),
                    span,
                });
            }
        }
    }

    collect_matches(&FROM_IMPORT, ImportKind::FromImport, line_number, line, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(content: &str) -> Vec<ImportDeclaration> {
        let mut out = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            scan_line(idx + 1, line, &mut out);
        }
        out
    }

    #[test]
    fn test_comma_separated_imports() {
        let decls = scan("import os, sys as system, pkg.sub");
        let found: Vec<_> = decls
            .iter()
            .map(|d| (d.raw_path.as_str(), d.statement.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("os", "import os"),
                ("sys", "import sys"),
                ("pkg.sub", "import pkg.sub")
            ]
        );
        // All records share the span of the whole statement
        assert!(decls.iter().all(|d| d.span == decls[0].span));
        assert!(decls.iter().all(|d| d.kind == ImportKind::StaticImport));
    }

    #[test]
    fn test_from_imports() {
        let content = r#"
from pathlib import Path
from .models import User
from ..config.settings import DEBUG
from . import utils
"#;
        let decls = scan(content);
        let paths: Vec<_> = decls.iter().map(|d| d.raw_path.as_str()).collect();
        assert_eq!(paths, vec!["pathlib", ".models", "..config.settings", "."]);
        assert!(decls.iter().all(|d| d.kind == ImportKind::FromImport));
        assert_eq!(decls[0].span.start_line, 2);
    }

    #[test]
    fn test_indented_import() {
        let decls = scan("def f():\n    import json");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].raw_path, "json");
        assert_eq!(decls[0].span.start_line, 2);
    }

    #[test]
    fn test_comments_and_strings_ignored() {
        assert!(scan("# import os").is_empty());
        assert!(scan("x = 'import os'").is_empty());
        assert!(scan("important = 1").is_empty());
    }
}
