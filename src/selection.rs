//! The active file selection and the dependency confirmation step
//!
//! Discovered dependencies are never merged blindly. A walk produces a
//! [`DependencyOffer`]; the caller approves or rejects entries, then folds the
//! approved ones into the [`Selection`] with [`Selection::merge_offer`].

use indexmap::IndexMap;

use crate::deps::DependencyClosure;
use crate::paths::path_key;
use crate::project::FileRecord;
use crate::resolver::CandidateIndex;

/// Files chosen by the user, keyed by path identity, in pick order.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    files: IndexMap<String, FileRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("{0} is binary and cannot be selected")]
    Binary(String),
    #[error("{0} exceeds the size limit and cannot be selected")]
    Skipped(String),
    #[error("{0} is excluded from selection by default")]
    Excluded(String),
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user pick. Returns whether the file was newly added.
    pub fn select(&mut self, record: &FileRecord) -> Result<bool, SelectError> {
        if record.is_binary {
            return Err(SelectError::Binary(record.path.clone()));
        }
        if record.is_skipped {
            return Err(SelectError::Skipped(record.path.clone()));
        }
        if record.excluded_by_default {
            return Err(SelectError::Excluded(record.path.clone()));
        }
        Ok(self.select_forced(record))
    }

    /// Add a file regardless of its flags. Returns whether it was newly added.
    pub fn select_forced(&mut self, record: &FileRecord) -> bool {
        let key = record.key();
        if self.files.contains_key(&key) {
            return false;
        }
        self.files.insert(key, record.clone());
        true
    }

    /// Remove a file. Returns whether it was selected.
    pub fn deselect(&mut self, path: &str) -> bool {
        self.files.shift_remove(&path_key(path)).is_some()
    }

    /// Merge the approved entries of `offer`, looked up in `all`.
    ///
    /// Returns how many files were newly added. Approved paths missing from
    /// `all` are ignored.
    pub fn merge_offer(&mut self, offer: &DependencyOffer, all: &[FileRecord]) -> usize {
        let index = CandidateIndex::new(all);
        let mut added = 0;
        for path in offer.approved_paths() {
            match index.get(path) {
                Some(record) => {
                    if self.select_forced(record) {
                        added += 1;
                    }
                }
                None => log::debug!("approved dependency {} is no longer listed", path),
            }
        }
        added
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(&path_key(path))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.values()
    }

    /// Selected records as an owned list, in pick order.
    pub fn to_records(&self) -> Vec<FileRecord> {
        self.files.values().cloned().collect()
    }
}

/// One discovered dependency awaiting a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferEntry {
    pub path: String,
    pub approved: bool,
}

/// Discovered dependencies presented for confirmation.
#[derive(Debug, Clone, Default)]
pub struct DependencyOffer {
    entries: Vec<OfferEntry>,
}

impl DependencyOffer {
    /// Every file in `closure`, approved by default, in discovery order.
    pub fn from_closure(closure: &DependencyClosure<'_>) -> Self {
        let entries = closure
            .paths()
            .into_iter()
            .map(|path| OfferEntry {
                path: path.to_string(),
                approved: true,
            })
            .collect();
        Self { entries }
    }

    fn entry_mut(&mut self, path: &str) -> Option<&mut OfferEntry> {
        let key = path_key(path);
        self.entries.iter_mut().find(|entry| path_key(&entry.path) == key)
    }

    /// Approve one entry. Returns false when `path` is not offered.
    pub fn approve(&mut self, path: &str) -> bool {
        self.set(path, true)
    }

    /// Reject one entry. Returns false when `path` is not offered.
    pub fn reject(&mut self, path: &str) -> bool {
        self.set(path, false)
    }

    /// Flip one entry, returning its new state.
    pub fn toggle(&mut self, path: &str) -> Option<bool> {
        let entry = self.entry_mut(path)?;
        entry.approved = !entry.approved;
        Some(entry.approved)
    }

    fn set(&mut self, path: &str, approved: bool) -> bool {
        match self.entry_mut(path) {
            Some(entry) => {
                entry.approved = approved;
                true
            }
            None => false,
        }
    }

    pub fn approve_all(&mut self) {
        self.entries.iter_mut().for_each(|entry| entry.approved = true);
    }

    pub fn reject_all(&mut self) {
        self.entries.iter_mut().for_each(|entry| entry.approved = false);
    }

    pub fn entries(&self) -> &[OfferEntry] {
        &self.entries
    }

    pub fn approved_paths(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.approved)
            .map(|entry| entry.path.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
