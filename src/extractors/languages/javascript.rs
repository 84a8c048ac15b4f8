//! JavaScript / TypeScript import scanning.
//!
//! Recognized per line, in this order:
//! - static `import <clause> from '<path>'` and side-effect `import '<path>'`
//! - re-exports `export { .. } from '<path>'` / `export * from '<path>'`
//! - dynamic `import('<path>')`
//! - CommonJS `require('<path>')`

use regex::Regex;
use std::sync::LazyLock;

use super::collect_matches;
use crate::extractors::{ImportDeclaration, ImportKind};

static STATIC_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s+(?:[\w$*{}\s,]+?\s+from\s+)?['"]([^'"\n]+)['"]"#)
        .expect("STATIC_IMPORT regex is invalid")
});

static EXPORT_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\bexport\s+(?:type\s+)?(?:\*(?:\s+as\s+[\w$]+)?|\{[^}]*\})\s+from\s+['"]([^'"\n]+)['"]"#,
    )
    .expect("EXPORT_FROM regex is invalid")
});

static DYNAMIC_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#)
        .expect("DYNAMIC_IMPORT regex is invalid")
});

static REQUIRE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\brequire\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#)
        .expect("REQUIRE_CALL regex is invalid")
});

pub fn scan_line(line_number: usize, line: &str, out: &mut Vec<ImportDeclaration>) {
    if line.trim_start().starts_with("//") {
        return;
    }

    collect_matches(&STATIC_IMPORT, ImportKind::StaticImport, line_number, line, out);
    collect_matches(&EXPORT_FROM, ImportKind::StaticImport, line_number, line, out);
    collect_matches(&DYNAMIC_IMPORT, ImportKind::DynamicImport, line_number, line, out);
    collect_matches(&REQUIRE_CALL, ImportKind::RequireCall, line_number, line, out);
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

    fn paths(content: &str) -> Vec<String> {
        scan(content).into_iter().map(|d| d.raw_path).collect()
    }

    #[test]
    fn test_static_import_clause_shapes() {
        let content = r#"
import React from 'react';
import { useState, useEffect } from "react";
import * as path from 'path';
import Default, { named } from './mixed';
import type { Config } from './types';
import './side-effect.css';
"#;
        assert_eq!(
            paths(content),
            vec![
                "react",
                "react",
                "path",
                "./mixed",
                "./types",
                "./side-effect.css"
            ]
        );
        assert!(
            scan(content)
                .iter()
                .all(|d| d.kind == ImportKind::StaticImport)
        );
    }

    #[test]
    fn test_re_exports() {
        let content = r#"
export { Button } from './Button';
export * from "./icons";
export * as utils from './utils';
export const x = 1;
"#;
        assert_eq!(paths(content), vec!["./Button", "./icons", "./utils"]);
    }

    #[test]
    fn test_dynamic_import() {
        let decls = scan("const Page = lazy(() => import('./pages/Home'));");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].kind, ImportKind::DynamicImport);
        assert_eq!(decls[0].raw_path, "./pages/Home");
    }

    #[test]
    fn test_require_call() {
        let decls = scan(r#"const fs = require("fs"), helper = require( './helper' );"#);
        let found: Vec<_> = decls.iter().map(|d| (d.kind, d.raw_path.as_str())).collect();
        assert_eq!(
            found,
            vec![
                (ImportKind::RequireCall, "fs"),
                (ImportKind::RequireCall, "./helper")
            ]
        );
    }

    #[test]
    fn test_multiple_patterns_on_one_line() {
        let decls = scan("import a from './a'; const b = require('./b'); import('./c');");
        let found: Vec<_> = decls.iter().map(|d| (d.kind, d.raw_path.as_str())).collect();
        assert_eq!(
            found,
            vec![
                (ImportKind::StaticImport, "./a"),
                (ImportKind::DynamicImport, "./c"),
                (ImportKind::RequireCall, "./b"),
            ]
        );
    }

    #[test]
    fn test_multiline_import_not_recognized() {
        let content = "import {\n  a,\n  b\n} from './ab';";
        assert!(scan(content).is_empty());
    }

    #[test]
    fn test_line_comments_skipped() {
        assert!(scan("// import a from './a';").is_empty());
        assert!(scan("   // require('./b')").is_empty());
    }

    #[test]
    fn test_identifiers_containing_import_ignored() {
        assert!(scan("const reimport = 'x'; myrequire('./y');").is_empty());
    }

    #[test]
    fn test_statement_text_and_span() {
        let decls = scan("  import a from './a';");
        assert_eq!(decls[0].statement, "import a from './a'");
        assert_eq!(decls[0].span.start_column, 3);
    }
}
