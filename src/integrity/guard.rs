//! Content integrity checks around a rename batch.
//!
//! The pre-check refuses to start when two inputs share content. The post-check
//! re-hashes the renamed files and flags any hash that was not present before,
//! any hash that now appears twice, and any change in file count.

use std::collections::HashMap;
use std::path::PathBuf;

use indicatif::ProgressBar;

use crate::error::Result;
use crate::fs::FileEntry;
use crate::integrity::hash::{hash_file, ContentHash};

/// Lookup from content hash to the first file seen with that content.
#[derive(Debug, Default)]
pub struct HashIndex {
    by_hash: HashMap<ContentHash, PathBuf>,
}

impl HashIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hash. Returns the previously recorded path if the hash was already known.
    pub fn insert(&mut self, hash: ContentHash, path: PathBuf) -> Option<&PathBuf> {
        use std::collections::hash_map::Entry;

        match self.by_hash.entry(hash) {
            Entry::Occupied(existing) => Some(&*existing.into_mut()),
            Entry::Vacant(slot) => {
                slot.insert(path);
                None
            }
        }
    }

    pub fn contains(&self, hash: &ContentHash) -> bool {
        self.by_hash.contains_key(hash)
    }
}

/// Result of hashing a file set and looking for repeated content.
#[derive(Debug, Default)]
pub struct DuplicateCheck {
    pub index: HashIndex,

    /// `(first seen, repeat)` path pairs.
    pub duplicates: Vec<(PathBuf, PathBuf)>,

    /// Number of files hashed.
    pub file_count: usize,
}

impl DuplicateCheck {
    pub fn is_ok(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Hash every file and report content shared by more than one of them.
pub fn check_no_duplicates(files: &[FileEntry], progress: &ProgressBar) -> Result<DuplicateCheck> {
    let mut check = DuplicateCheck {
        file_count: files.len(),
        ..Default::default()
    };

    for file in files {
        let hash = hash_file(&file.path)?;
        if let Some(first) = check.index.insert(hash, file.path.clone()) {
            let first = first.clone();
            check.duplicates.push((first, file.path.clone()));
        }
        progress.inc(1);
    }

    Ok(check)
}

/// Result of comparing renamed files against the pre-rename index.
#[derive(Debug)]
pub struct PreservationCheck {
    pub after: DuplicateCheck,

    /// Files whose content was not present before renaming.
    pub unknown: Vec<PathBuf>,

    pub expected_count: usize,
}

impl PreservationCheck {
    pub fn is_ok(&self) -> bool {
        self.after.is_ok() && self.unknown.is_empty() && self.count_matches()
    }

    pub fn count_matches(&self) -> bool {
        self.after.file_count == self.expected_count
    }

    /// Every path implicated in a violation, in report order.
    pub fn offending_files(&self) -> Vec<PathBuf> {
        let mut files = self.unknown.clone();
        files.extend(self.after.duplicates.iter().map(|(_, repeat)| repeat.clone()));
        files
    }
}

/// Re-hash `after_files` and compare with the pre-rename index.
pub fn check_content_preserved(
    before: &DuplicateCheck,
    after_files: &[FileEntry],
    progress: &ProgressBar,
) -> Result<PreservationCheck> {
    let after = check_no_duplicates(after_files, progress)?;

    let mut unknown: Vec<PathBuf> = after
        .index
        .by_hash
        .iter()
        .filter(|(hash, _)| !before.index.contains(hash))
        .map(|(_, path)| path.clone())
        .collect();
    unknown.sort();

    Ok(PreservationCheck {
        after,
        unknown,
        expected_count: before.file_count,
    })
}
