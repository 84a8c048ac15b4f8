//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::deps::DependencyClosure;
use crate::paths::relative_to;
use crate::project::FileRecord;

/// Result of one dependency walk, with paths relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    pub root: String,
    pub selected: Vec<String>,
    pub dependencies: Vec<String>,
}

impl DependencyReport {
    pub fn new(root: &str, selected: &[FileRecord], closure: &DependencyClosure<'_>) -> Self {
        let display = |path: &str| relative_to(root, path).unwrap_or_else(|| path.to_string());

        let mut selected: Vec<String> = selected
            .iter()
            .map(|file| display(file.path.as_str()))
            .collect();
        selected.sort();
        let mut dependencies: Vec<String> = closure.paths().into_iter().map(display).collect();
        dependencies.sort();

        Self {
            root: root.to_string(),
            selected,
            dependencies,
        }
    }
}

/// Print a report as pretty-printed JSON to stdout.
pub fn print_json(report: &DependencyReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
