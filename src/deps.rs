//! Dependency closure of a file selection
//!
//! Starting from the selected files, repeatedly extracts local imports,
//! resolves them against the candidate set and follows every newly reached
//! file. The walk is an explicit depth-first worklist; a processed-set keyed
//! by [`path_key`](crate::paths::path_key) guarantees each file is scanned at
//! most once, so import cycles terminate.
//!
//! The walk never fails. A file that cannot be scanned is logged and skipped,
//! which can only shrink the result.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::extractors::extract_local_import_paths;
use crate::project::FileRecord;
use crate::resolver::{CandidateIndex, PathResolver, ResolverConfig};

/// Why a file contributed nothing to the walk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("content of {0} is not available as text")]
    ContentUnavailable(String),
}

/// Files reachable from a selection via local imports, excluding the selection.
///
/// Keyed by path identity; iteration follows discovery order.
#[derive(Debug, Clone, Default)]
pub struct DependencyClosure<'a> {
    files: IndexMap<String, &'a FileRecord>,
}

impl<'a> DependencyClosure<'a> {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether `path` (case/separator-insensitive) was discovered.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(&crate::paths::path_key(path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a FileRecord> + '_ {
        self.files.values().copied()
    }

    /// Discovered paths in discovery order.
    pub fn paths(&self) -> Vec<&'a str> {
        self.files.values().map(|file| file.path.as_str()).collect()
    }

    /// Discovered paths sorted, for order-independent comparison.
    pub fn sorted_paths(&self) -> Vec<&'a str> {
        let mut paths = self.paths();
        paths.sort_unstable();
        paths
    }

    pub fn into_records(self) -> Vec<&'a FileRecord> {
        self.files.into_values().collect()
    }
}

/// Walks import edges under one resolver configuration.
#[derive(Debug, Clone, Default)]
pub struct DependencyWalker {
    resolver: PathResolver,
}

impl DependencyWalker {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            resolver: PathResolver::new(config),
        }
    }

    /// Compute the dependency closure of `selected` within `all`.
    ///
    /// Files in `selected` are never part of the result, but they are still
    /// scanned, so their own imports are followed.
    pub fn walk<'a>(
        &self,
        selected: &[FileRecord],
        all: &'a [FileRecord],
        project_root: &str,
    ) -> DependencyClosure<'a> {
        let index = CandidateIndex::new(all);
        let selected_keys: HashSet<String> = selected.iter().map(FileRecord::key).collect();

        let mut processed: HashSet<String> = HashSet::new();
        let mut discovered: IndexMap<String, &'a FileRecord> = IndexMap::new();

        // Selected files may live outside `all`; they only need scanning.
        let mut stack: Vec<&FileRecord> = selected.iter().rev().collect();

        while let Some(file) = stack.pop() {
            if !processed.insert(file.key()) {
                continue;
            }

            let imports = match scan_file(file) {
                Ok(imports) => imports,
                Err(err) => {
                    log::warn!("skipping {}: {}", file.path, err);
                    continue;
                }
            };

            let mut reached: Vec<&'a FileRecord> = Vec::new();
            for import in &imports {
                for resolved in self
                    .resolver
                    .resolve(import, &file.path, &index, project_root)
                {
                    let Some(target) = index.get(&resolved) else {
                        continue;
                    };
                    let key = target.key();
                    if !selected_keys.contains(&key) {
                        discovered.entry(key).or_insert(target);
                    }
                    reached.push(target);
                }
            }

            // Reversed so the first import is explored first
            stack.extend(reached.into_iter().rev());
        }

        log::debug!(
            "scanned {} file(s), discovered {} dependenc{}",
            processed.len(),
            discovered.len(),
            if discovered.len() == 1 { "y" } else { "ies" }
        );
        DependencyClosure { files: discovered }
    }
}

/// Local import paths of one file.
///
/// Binary files have no imports. Files whose text was never loaded cannot be
/// scanned at all.
fn scan_file(file: &FileRecord) -> Result<Vec<String>, ScanError> {
    if file.is_binary {
        return Ok(Vec::new());
    }
    let content = file
        .text()
        .ok_or_else(|| ScanError::ContentUnavailable(file.path.clone()))?;
    Ok(extract_local_import_paths(content, &file.path))
}

/// Dependency closure with the default extension policy.
pub fn get_dependency_files<'a>(
    selected: &[FileRecord],
    all: &'a [FileRecord],
    project_root: &str,
) -> DependencyClosure<'a> {
    DependencyWalker::default().walk(selected, all, project_root)
}
