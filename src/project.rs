//! Project file listing
//!
//! Produces the candidate file set for a project root: every file the user
//! could select or that an import could resolve to, with its text content
//! loaded up front so the dependency walk never touches the filesystem.

use std::path::{Path, PathBuf};

use glob::Pattern;
use ignore::WalkBuilder;
use rayon::prelude::*;
use serde::Serialize;

use crate::file_utils::{DEFAULT_MAX_FILE_SIZE, FileContent, read_file_content};
use crate::paths::{file_name, normalize_path, path_key};

/// File-name globs excluded from manual selection by default.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
    "poetry.lock",
    "*.min.js",
    "*.min.css",
    "*.map",
    ".DS_Store",
];

/// One file known to the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Absolute, forward-slash path. Identity is by [`path_key`], not raw equality.
    pub path: String,
    pub name: String,
    /// Text content; `None` when the file was not read as text.
    #[serde(skip)]
    pub content: Option<String>,
    pub size: u64,
    pub is_binary: bool,
    pub is_skipped: bool,
    pub excluded_by_default: bool,
}

impl FileRecord {
    /// A text file with the given content.
    pub fn new(path: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        let mut record = Self::without_content(path);
        record.size = content.len() as u64;
        record.content = Some(content);
        record
    }

    /// A file whose content has not been loaded.
    pub fn without_content(path: &str) -> Self {
        let path = normalize_path(path);
        Self {
            name: file_name(&path).to_string(),
            path,
            content: None,
            size: 0,
            is_binary: false,
            is_skipped: false,
            excluded_by_default: false,
        }
    }

    /// Mark as binary, dropping any content.
    pub fn binary(mut self) -> Self {
        self.is_binary = true;
        self.content = None;
        self
    }

    /// Mark as skipped (e.g. too large), dropping any content.
    pub fn skipped(mut self) -> Self {
        self.is_skipped = true;
        self.content = None;
        self
    }

    /// Mark as excluded from manual selection by default.
    pub fn excluded(mut self) -> Self {
        self.excluded_by_default = true;
        self
    }

    /// Identity key of this record's path.
    pub fn key(&self) -> String {
        path_key(&self.path)
    }

    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Whether the user may pick this file directly.
    pub fn is_selectable(&self) -> bool {
        !(self.is_binary || self.is_skipped || self.excluded_by_default)
    }
}

/// Configuration for listing a project.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// List every file, ignoring .gitignore and hidden-file rules
    pub show_all: bool,
    /// File-name globs never listed
    pub ignore_patterns: Vec<String>,
    /// Files larger than this are listed as skipped, without content
    pub max_file_size: u64,
    /// File-name globs listed but excluded from selection by default
    pub default_excludes: Vec<String>,
    /// Number of parallel workers for reading files.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            show_all: false,
            ignore_patterns: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            default_excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            parallel_workers: 0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    NotFound(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// List every candidate file under `root`, sorted by path.
pub fn scan_project(root: &Path, config: &ProjectConfig) -> Result<Vec<FileRecord>, ProjectError> {
    if !root.exists() {
        return Err(ProjectError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ProjectError::NotADirectory(root.to_path_buf()));
    }

    let paths = collect_file_paths(root, config);
    let mut records = read_records(&paths, config);
    records.sort_by(|a, b| a.path.cmp(&b.path));

    log::debug!("listed {} files under {}", records.len(), root.display());
    Ok(records)
}

fn collect_file_paths(root: &Path, config: &ProjectConfig) -> Vec<PathBuf> {
    let respect_ignores = !config.show_all;
    let ignore_patterns = config.ignore_patterns.clone();

    let walker = WalkBuilder::new(root)
        .hidden(respect_ignores)
        .ignore(respect_ignores)
        .git_ignore(respect_ignores)
        .git_global(respect_ignores)
        .git_exclude(respect_ignores)
        .require_git(false)
        .filter_entry(move |entry| {
            !should_ignore_name(&entry.file_name().to_string_lossy(), &ignore_patterns)
        })
        .build();

    walker
        .flatten()
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.into_path())
        .collect()
}

fn read_records(paths: &[PathBuf], config: &ProjectConfig) -> Vec<FileRecord> {
    let read_all = || {
        paths
            .par_iter()
            .map(|path| read_record(path, config))
            .collect::<Vec<_>>()
    };

    if config.parallel_workers == 0 {
        return read_all();
    }

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallel_workers)
        .build()
    {
        Ok(pool) => pool.install(read_all),
        Err(err) => {
            // Fall back to rayon's global pool if custom pool creation fails
            log::debug!("cannot build a {}-thread pool: {}", config.parallel_workers, err);
            read_all()
        }
    }
}

fn read_record(path: &Path, config: &ProjectConfig) -> FileRecord {
    let path_str = path.to_string_lossy();
    let mut record = match read_file_content(path, config.max_file_size) {
        FileContent::Text(text) => FileRecord::new(&path_str, text),
        FileContent::Binary => FileRecord::without_content(&path_str).binary(),
        FileContent::TooLarge(size) => {
            let mut record = FileRecord::without_content(&path_str).skipped();
            record.size = size;
            record
        }
        FileContent::Unreadable => FileRecord::without_content(&path_str),
    };

    if record.size == 0 {
        record.size = path.metadata().map(|m| m.len()).unwrap_or(0);
    }
    if matches_any_glob(&record.name, &config.default_excludes) {
        record = record.excluded();
    }
    record
}

/// Check if a file name should never be listed.
fn should_ignore_name(name: &str, ignore_patterns: &[String]) -> bool {
    // Always ignore .git directory
    name == ".git" || matches_any_glob(name, ignore_patterns)
}

/// Match a name against glob patterns (exact names match too).
pub fn matches_any_glob(name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| {
        name == pattern
            || Pattern::new(pattern)
                .map(|p| p.matches(name))
                .unwrap_or(false)
    })
}
