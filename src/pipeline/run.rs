//! Batch execution: pre-check, stage, finalize, verify.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fs::{finalize_files, generate_names, plan_renames, scan_images, stage_files};
use crate::integrity::{check_content_preserved, check_no_duplicates};
use crate::output::{create_hash_bar, print_error, print_info};
use crate::pipeline::state::{BatchOutcome, BatchReport};

/// Options for a single batch.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// First date of the name sequence, fixed for the whole batch.
    pub start_date: NaiveDate,
    pub dry_run: bool,
    pub show_progress: bool,
}

/// Rename every image in `dir` to its date-sequenced name.
///
/// Aborts before any rename if two inputs share content, and after renaming if
/// the renamed files no longer match the original content set. No rollback is
/// attempted in the latter case.
pub fn run_batch(dir: &Path, options: BatchOptions) -> Result<BatchOutcome> {
    print_info(&format!("Scanning {}", dir.display()));

    let files = scan_images(dir)?;
    if files.is_empty() {
        return Ok(BatchOutcome::NoFiles);
    }
    print_info(&format!("Found {} image file(s)", files.len()));

    let bar = create_hash_bar(files.len() as u64, "Hashing", options.show_progress);
    let before = check_no_duplicates(&files, &bar)?;
    bar.finish_and_clear();

    if !before.is_ok() {
        for (first, repeat) in &before.duplicates {
            print_error(&format!(
                "Duplicate content: {} and {}",
                first.display(),
                repeat.display()
            ));
        }
        return Err(Error::DuplicateContent {
            pairs: before.duplicates,
        });
    }

    let names = generate_names(files.len(), options.start_date);

    if options.dry_run {
        return Ok(BatchOutcome::Planned(plan_renames(&files, &names)?));
    }

    let mut report = BatchReport::new(files.len());
    report.set_name_range(&names);

    info!("Staging {} file(s)", files.len());
    let staged = stage_files(&files)?;
    report.staged = staged.len();

    info!("Renaming {} file(s) starting at {}", staged.len(), names[0]);
    let renamed = finalize_files(&staged, &names)?;
    report.renamed = renamed.len();

    let after_files = scan_images(dir)?;
    print_info(&format!("Found {} image file(s) after renaming", after_files.len()));

    let bar = create_hash_bar(after_files.len() as u64, "Verifying", options.show_progress);
    let check = check_content_preserved(&before, &after_files, &bar)?;
    bar.finish_and_clear();

    if !check.is_ok() {
        let offending = check.offending_files();
        for path in &offending {
            print_error(&format!("Content changed or lost: {}", path.display()));
        }
        if !check.count_matches() {
            print_error(&format!(
                "Expected {} file(s) after renaming, found {}",
                check.expected_count, check.after.file_count
            ));
        }
        return Err(Error::ContentIntegrityViolation {
            files: offending,
            expected: check.expected_count,
            found: check.after.file_count,
        });
    }

    report.files_verified = check.after.file_count;
    debug!("Verified {} file(s)", report.files_verified);

    Ok(BatchOutcome::Renamed(report))
}
