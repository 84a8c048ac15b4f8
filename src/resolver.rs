//! Import path resolution
//!
//! Maps one normalized local import string to the candidate files it could
//! refer to. Resolution is one-to-many: every plausible match is returned and
//! nothing is ranked, so ambiguous imports surface all of their candidates.
//!
//! Three import shapes are handled:
//! - root-absolute (`/src/x`): joined onto the project root, no extension probing
//! - relative (`./x`, `../x`): resolved against the importing file's directory
//! - bare (`utils/x`): used as written and matched by path suffix
//!
//! Relative and bare imports without a recognized extension are probed with
//! every configured extension; only when none of them matches is the path
//! tried as written, which is also how `dir/index.*` files are found.

use std::collections::{HashMap, HashSet};

use crate::paths::{dirname, file_name, join, normalize_path, path_key, resolve};
use crate::project::FileRecord;

/// Extensions appended to extensionless imports, in probe order.
pub const DEFAULT_PROBE_EXTENSIONS: &[&str] = &[
    ".js", ".ts", ".jsx", ".tsx", ".mjs", ".cjs", ".py", ".css", ".scss", ".sass",
];

/// Extensions accepted for `<dir>/index.*` matches.
pub const DEFAULT_INDEX_EXTENSIONS: &[&str] = &[".js", ".ts", ".jsx", ".tsx"];

/// Extension policy for resolution.
///
/// Immutable once built; construct a restricted one to limit probing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    probe_extensions: Vec<String>,
    index_extensions: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            probe_extensions: DEFAULT_PROBE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            index_extensions: DEFAULT_INDEX_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ResolverConfig {
    /// Default policy with a different probe list.
    pub fn with_probe_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            probe_extensions: extensions.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Replace the index-file extensions.
    pub fn index_extensions_from<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn probe_extensions(&self) -> &[String] {
        &self.probe_extensions
    }

    pub fn index_extensions(&self) -> &[String] {
        &self.index_extensions
    }

    /// Whether the final segment of `import_path` already ends in a probe extension.
    pub fn has_known_extension(&self, import_path: &str) -> bool {
        let name = file_name(import_path).to_lowercase();
        self.probe_extensions
            .iter()
            .any(|ext| name.ends_with(&ext.to_lowercase()))
    }

    /// Extensions to append to `import_path`; `[""]` when it already has one.
    fn candidate_extensions(&self, import_path: &str) -> Vec<&str> {
        if self.has_known_extension(import_path) {
            vec![""]
        } else {
            self.probe_extensions.iter().map(String::as_str).collect()
        }
    }
}

/// The candidate file set with identity keys computed once.
pub struct CandidateIndex<'a> {
    entries: Vec<(String, &'a FileRecord)>,
    by_key: HashMap<String, usize>,
}

impl<'a> CandidateIndex<'a> {
    pub fn new(files: &'a [FileRecord]) -> Self {
        let entries: Vec<_> = files.iter().map(|file| (file.key(), file)).collect();
        let mut by_key = HashMap::with_capacity(entries.len());
        for (idx, (key, _)) in entries.iter().enumerate() {
            by_key.entry(key.clone()).or_insert(idx);
        }
        Self { entries, by_key }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The record whose path equals `path` (case/separator-insensitive).
    pub fn get(&self, path: &str) -> Option<&'a FileRecord> {
        self.by_key
            .get(&path_key(path))
            .map(|&idx| self.entries[idx].1)
    }

    /// Every record matching a physical candidate path.
    ///
    /// A record matches when its path equals the candidate, ends with
    /// `/<candidate>`, or is `<candidate>/index<ext>` (optionally behind a
    /// leading directory) for one of `index_extensions`.
    pub fn find_matching(&self, candidate: &str, index_extensions: &[String]) -> Vec<&'a FileRecord> {
        let candidate = path_key(candidate);
        let suffix = format!("/{}", candidate);
        // (exact, "/"-prefixed) forms of each `<candidate>/index<ext>`
        let index_files: Vec<(String, String)> = index_extensions
            .iter()
            .map(|ext| {
                let index = format!("{}/index{}", candidate, ext.to_lowercase());
                let nested = format!("/{}", index);
                (index, nested)
            })
            .collect();

        self.entries
            .iter()
            .filter(|(key, _)| {
                *key == candidate
                    || key.ends_with(&suffix)
                    || index_files
                        .iter()
                        .any(|(index, nested)| key == index || key.ends_with(nested.as_str()))
            })
            .map(|(_, file)| *file)
            .collect()
    }
}

/// Resolves import strings against a candidate set under one [`ResolverConfig`].
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    config: ResolverConfig,
}

impl PathResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Paths of every candidate file `import_path` could refer to.
    ///
    /// `current_file` is the importing file; `project_root` anchors
    /// root-absolute imports. Returns an empty vector when nothing matches.
    pub fn resolve(
        &self,
        import_path: &str,
        current_file: &str,
        index: &CandidateIndex<'_>,
        project_root: &str,
    ) -> Vec<String> {
        let mut found = ResolvedPaths::default();

        if import_path.starts_with('/') {
            let physical = join(project_root, import_path);
            found.extend(index.find_matching(&physical, self.config.index_extensions()));
        } else if import_path.starts_with("./") || import_path.starts_with("../") {
            let base = resolve(&dirname(current_file), import_path);
            self.probe(&base, import_path, index, &mut found);
        } else {
            let base = normalize_path(import_path);
            self.probe(&base, import_path, index, &mut found);
        }

        log::trace!(
            "{} -> {} candidate(s) from {}",
            import_path,
            found.paths.len(),
            current_file
        );
        found.paths
    }

    /// Try every candidate extension on `base`, then `base` as written.
    fn probe(
        &self,
        base: &str,
        import_path: &str,
        index: &CandidateIndex<'_>,
        found: &mut ResolvedPaths,
    ) {
        let extensions = self.config.candidate_extensions(import_path);
        for ext in &extensions {
            let physical = format!("{}{}", base, ext);
            found.extend(index.find_matching(&physical, self.config.index_extensions()));
        }

        if found.paths.is_empty() && !extensions.contains(&"") {
            found.extend(index.find_matching(base, self.config.index_extensions()));
        }
    }
}

/// Matched paths in discovery order, deduplicated by identity key.
#[derive(Default)]
struct ResolvedPaths {
    seen: HashSet<String>,
    paths: Vec<String>,
}

impl ResolvedPaths {
    fn extend<'a>(&mut self, files: impl IntoIterator<Item = &'a FileRecord>) {
        for file in files {
            if self.seen.insert(file.key()) {
                self.paths.push(file.path.clone());
            }
        }
    }
}

/// Resolve one import with the default extension policy.
pub fn resolve_import_path(
    import_path: &str,
    current_file: &str,
    candidates: &[FileRecord],
    project_root: &str,
) -> Vec<String> {
    let index = CandidateIndex::new(candidates);
    PathResolver::default().resolve(import_path, current_file, &index, project_root)
}

/// Paths of the candidates matching one physical path, with default index extensions.
pub fn find_matching_files(candidate: &str, candidates: &[FileRecord]) -> Vec<String> {
    let config = ResolverConfig::default();
    CandidateIndex::new(candidates)
        .find_matching(candidate, config.index_extensions())
        .into_iter()
        .map(|file| file.path.clone())
        .collect()
}
