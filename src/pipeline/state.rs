//! Batch state and outcomes.

use std::path::PathBuf;

use crate::fs::TargetName;

/// Counters collected while a batch runs.
#[derive(Debug, Default, Clone)]
pub struct BatchReport {
    pub files_found: usize,
    pub staged: usize,
    pub renamed: usize,
    pub files_verified: usize,
    pub first_name: Option<TargetName>,
    pub last_name: Option<TargetName>,
}

impl BatchReport {
    pub fn new(files_found: usize) -> Self {
        Self {
            files_found,
            ..Default::default()
        }
    }

    /// Remember the name range handed out to this batch.
    pub fn set_name_range(&mut self, names: &[TargetName]) {
        self.first_name = names.first().cloned();
        self.last_name = names.last().cloned();
    }
}

/// How a batch ended when no error occurred.
#[derive(Debug)]
pub enum BatchOutcome {
    /// Nothing to rename.
    NoFiles,

    /// Dry run: `(current path, final path)` pairs in rename order.
    Planned(Vec<(PathBuf, PathBuf)>),

    /// Every file was renamed and verified.
    Renamed(BatchReport),
}
