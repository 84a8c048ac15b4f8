//! Dependency walks over scanned on-disk projects

mod harness;

use harness::{TestProject, sample_project};
use pith::extractors::extract_local_import_paths;
use pith::{
    DependencyOffer, DependencyWalker, FileRecord, ProjectConfig, ResolverConfig, Selection,
    get_dependency_files, resolve_import_path, scan_project,
};

fn scan(project: &TestProject) -> Vec<FileRecord> {
    scan_project(project.path(), &ProjectConfig::default()).expect("scan should succeed")
}

fn pick(files: &[FileRecord], project: &TestProject, rel: &[&str]) -> Vec<FileRecord> {
    rel.iter()
        .map(|r| {
            let path = project.abs(r);
            files
                .iter()
                .find(|f| f.path == path)
                .cloned()
                .unwrap_or_else(|| panic!("{} was not scanned", r))
        })
        .collect()
}

#[test]
fn test_extraction_keeps_only_local_paths() {
    let content = "import helper from './utils/helper';\nimport React from 'react';";
    assert_eq!(
        extract_local_import_paths(content, "/any/file.ts"),
        vec!["./utils/helper"]
    );
}

#[test]
fn test_locality_and_extension_stripping() {
    let content = "\
import a from './x';
import b from '../x';
import c from '/x';
import d from 'react';
import e from 'lodash/debounce';
import f from 'axios';
import g from 'https://cdn/x.js';
import h from './page.tsx';
import './theme.scss';
";
    assert_eq!(
        extract_local_import_paths(content, "/p/main.js"),
        vec!["./x", "../x", "/x", "lodash/debounce", "./page", "./theme.scss"]
    );
}

#[test]
fn test_relative_resolution_with_parent_traversal() {
    let project = TestProject::new();
    project.add_file(
        "src/components/App.ts",
        "import helper from './utils/helper';\nimport { X } from '../shared/constants';\n",
    );
    project.add_file("src/components/utils/helper.ts", "");
    project.add_file("src/shared/constants.ts", "");
    project.add_file("src/other.ts", "");

    let files = scan(&project);
    let selected = pick(&files, &project, &["src/components/App.ts"]);
    let closure = get_dependency_files(&selected, &files, &project.root());

    assert_eq!(
        closure.sorted_paths(),
        vec![
            project.abs("src/components/utils/helper.ts"),
            project.abs("src/shared/constants.ts")
        ]
    );
}

#[test]
fn test_cycle_returns_other_file_only() {
    let project = TestProject::new();
    project.add_file("a.ts", "import { b } from './b';\n");
    project.add_file("b.ts", "import { a } from './a';\n");

    let files = scan(&project);
    let selected = pick(&files, &project, &["a.ts"]);
    let closure = get_dependency_files(&selected, &files, &project.root());

    assert_eq!(closure.paths(), vec![project.abs("b.ts")]);
}

#[test]
fn test_multi_extension_resolution_returns_both() {
    let project = TestProject::new();
    project.add_file("utils/helper.ts", "");
    project.add_file("utils/helper.js", "");
    project.add_file("main.ts", "");

    let files = scan(&project);
    let mut resolved = resolve_import_path(
        "./utils/helper",
        &project.abs("main.ts"),
        &files,
        &project.root(),
    );
    resolved.sort();
    assert_eq!(
        resolved,
        vec![project.abs("utils/helper.js"), project.abs("utils/helper.ts")]
    );
}

#[test]
fn test_root_absolute_import() {
    let project = TestProject::new();
    project.add_file("src/deep/page.ts", "import { cfg } from '/src/config.ts';\n");
    project.add_file("src/config", "");

    let files = scan(&project);
    let selected = pick(&files, &project, &["src/deep/page.ts"]);
    let closure = get_dependency_files(&selected, &files, &project.root());

    // Root-absolute imports are stripped of their extension and not probed
    assert_eq!(closure.paths(), vec![project.abs("src/config")]);
}

#[test]
fn test_walk_is_idempotent() {
    let project = sample_project();
    let files = scan(&project);
    let selected = pick(&files, &project, &["src/components/App.ts"]);

    let first = get_dependency_files(&selected, &files, &project.root());
    let second = get_dependency_files(&selected, &files, &project.root());
    assert_eq!(first.sorted_paths(), second.sorted_paths());
    assert_eq!(first.len(), 3);
}

#[test]
fn test_restricted_configuration() {
    let project = TestProject::new();
    project.add_file("main.ts", "import './a';\n");
    project.add_file("a.ts", "");
    project.add_file("a.py", "");

    let files = scan(&project);
    let selected = pick(&files, &project, &["main.ts"]);

    let closure = get_dependency_files(&selected, &files, &project.root());
    assert_eq!(closure.len(), 2);

    let walker = DependencyWalker::new(ResolverConfig::with_probe_extensions([".ts"]));
    let closure = walker.walk(&selected, &files, &project.root());
    assert_eq!(closure.paths(), vec![project.abs("a.ts")]);
}

#[test]
fn test_detect_confirm_merge() {
    let project = sample_project();
    let files = scan(&project);

    let mut selection = Selection::new();
    for record in pick(&files, &project, &["src/components/App.ts"]) {
        selection.select(&record).unwrap();
    }

    let selected = selection.to_records();
    let closure = get_dependency_files(&selected, &files, &project.root());
    let mut offer = DependencyOffer::from_closure(&closure);
    assert!(offer.reject(&project.abs("src/shared/setup.ts")));

    assert_eq!(selection.merge_offer(&offer, &files), 2);
    assert!(selection.contains(&project.abs("src/shared/constants.ts")));
    assert!(!selection.contains(&project.abs("src/shared/setup.ts")));

    // The next walk no longer offers what was merged
    let closure = get_dependency_files(&selection.to_records(), &files, &project.root());
    assert_eq!(closure.paths(), vec![project.abs("src/shared/setup.ts")]);
}
