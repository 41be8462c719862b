//! Two-phase, collision-free renaming.
//!
//! Files are first moved to numeric placeholder names (`1.jpg`, `2.png`, ...)
//! that are checked for existence one at a time. Once every file holds a
//! placeholder, no final name can still be occupied by an unprocessed source
//! file, so the final pass renames unconditionally.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::fs::naming::{normalize_extension, TargetName};
use crate::fs::scan::FileEntry;

/// Staging phase state.
///
/// The counter is shared by every file of the phase and never reset: a number
/// freed by an earlier rename may still collide with a file not yet processed.
#[derive(Debug)]
pub struct Stager {
    next: u64,
}

impl Default for Stager {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl Stager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move one file to the first free placeholder name in its directory.
    pub fn stage(&mut self, entry: &FileEntry) -> Result<FileEntry> {
        let ext = normalize_extension(&entry.extension);

        let target = loop {
            let candidate = entry.dir.join(placeholder_name(self.next, &ext));
            if !path_taken(&candidate)? {
                break candidate;
            }
            self.next += 1;
        };

        rename(&entry.path, &target)?;
        self.next += 1;

        FileEntry::from_path(&target)
    }
}

fn placeholder_name(n: u64, ext: &str) -> String {
    if ext.is_empty() {
        n.to_string()
    } else {
        format!("{}.{}", n, ext)
    }
}

/// Whether anything, including a dangling symlink, occupies `path`.
fn path_taken(path: &Path) -> Result<bool> {
    match std::fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Io(e)),
    }
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    debug!("rename {} -> {}", from.display(), to.display());
    std::fs::rename(from, to).map_err(|source| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Stage every file in order, returning the staged entries in the same order.
pub fn stage_files(files: &[FileEntry]) -> Result<Vec<FileEntry>> {
    let mut stager = Stager::new();
    files.iter().map(|f| stager.stage(f)).collect()
}

/// Rename `files[i]` to `names[i]` plus its normalized extension.
///
/// Expects staged files. Staged placeholders never match a final name, so any
/// entry already sitting on a target was not part of the scan (a dangling
/// symlink, a FIFO, ...). Such targets abort the phase before the first rename.
pub fn finalize_files(files: &[FileEntry], names: &[TargetName]) -> Result<Vec<FileEntry>> {
    let plan = plan_renames(files, names)?;

    for (_, target) in &plan {
        if path_taken(target)? {
            return Err(Error::TargetOccupied {
                path: target.clone(),
            });
        }
    }

    plan.iter()
        .map(|(from, to)| {
            rename(from, to)?;
            FileEntry::from_path(to)
        })
        .collect()
}

/// Compute where each file would end up, without touching the filesystem.
pub fn plan_renames(files: &[FileEntry], names: &[TargetName]) -> Result<Vec<(PathBuf, PathBuf)>> {
    if files.len() != names.len() {
        return Err(Error::LengthMismatch {
            files: files.len(),
            names: names.len(),
        });
    }

    Ok(files
        .iter()
        .zip(names)
        .map(|(file, name)| (file.path.clone(), final_path(file, name)))
        .collect())
}

fn final_path(file: &FileEntry, name: &TargetName) -> PathBuf {
    file.dir.join(name.with_extension(&file.extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::naming::generate_names;
    use crate::fs::scan::scan_images;
    use chrono::NaiveDate;
    use std::fs;

    fn names_in(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn file_name(path: &Path) -> String {
        path.file_name().unwrap().to_string_lossy().into_owned()
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 6, 14).unwrap()
    }

    #[test]
    fn test_stage_normalizes_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.JPEG"), b"a").unwrap();
        fs::write(dir.path().join("b.Png"), b"b").unwrap();

        let files = scan_images(dir.path()).unwrap();
        let staged = stage_files(&files).unwrap();

        assert_eq!(staged.len(), 2);
        assert_eq!(names_in(dir.path()), vec!["1.jpg", "2.png"]);
        assert_eq!(fs::read(dir.path().join("1.jpg")).unwrap(), b"a");
    }

    #[test]
    fn test_stage_skips_existing_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.jpg"), b"one").unwrap();
        fs::write(dir.path().join("2.jpg"), b"two").unwrap();
        fs::write(dir.path().join("x.jpg"), b"x").unwrap();

        let files = scan_images(dir.path()).unwrap();
        let staged = stage_files(&files).unwrap();

        // 1.jpg already holds its own placeholder slot, so it moves to 3.jpg;
        // the counter then carries on past the freed name.
        let staged_names: Vec<String> = staged.iter().map(|f| file_name(&f.path)).collect();
        assert_eq!(staged_names, vec!["3.jpg", "4.jpg", "5.jpg"]);
        assert_eq!(fs::read(dir.path().join("3.jpg")).unwrap(), b"one");
        assert_eq!(fs::read(dir.path().join("4.jpg")).unwrap(), b"two");
        assert_eq!(fs::read(dir.path().join("5.jpg")).unwrap(), b"x");
    }

    #[test]
    fn test_stager_counter_is_not_reset() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"a").unwrap();
        fs::write(dir.path().join("b.png"), b"b").unwrap();

        let files = scan_images(dir.path()).unwrap();
        let mut stager = Stager::new();
        stager.stage(&files[0]).unwrap();
        assert_eq!(stager.next, 2);
        let second = stager.stage(&files[1]).unwrap();
        assert_eq!(file_name(&second.path), "2.png");
    }

    #[test]
    fn test_finalize_length_mismatch() {
        let files = vec![FileEntry::from_path(Path::new("/tmp/1.jpg")).unwrap()];
        let names = generate_names(2, start());
        assert!(matches!(
            finalize_files(&files, &names),
            Err(Error::LengthMismatch { files: 1, names: 2 })
        ));
    }

    #[test]
    fn test_two_phase_handles_name_already_final() {
        let dir = tempfile::tempdir().unwrap();
        // Second file already holds the name the first file will receive.
        fs::write(dir.path().join("20200614_01.jpg"), b"second").unwrap();
        fs::write(dir.path().join("0_first.jpg"), b"first").unwrap();

        let files = scan_images(dir.path()).unwrap();
        let names = generate_names(files.len(), start());
        let staged = stage_files(&files).unwrap();
        finalize_files(&staged, &names).unwrap();

        assert_eq!(names_in(dir.path()), vec!["20200614_01.jpg", "20200614_02.jpg"]);
        assert_eq!(fs::read(dir.path().join("20200614_01.jpg")).unwrap(), b"first");
        assert_eq!(fs::read(dir.path().join("20200614_02.jpg")).unwrap(), b"second");
    }

    #[test]
    fn test_plan_renames_leaves_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.JPEG"), b"a").unwrap();

        let files = scan_images(dir.path()).unwrap();
        let plan = plan_renames(&files, &generate_names(1, start())).unwrap();

        assert_eq!(plan[0].1, dir.path().join("20200614_01.jpg"));
        assert_eq!(names_in(dir.path()), vec!["a.JPEG"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_finalize_refuses_to_replace_foreign_entry() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ok.jpg"), b"ok").unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("missing"),
            dir.path().join("20200614_01.jpg"),
        )
        .unwrap();

        // The dangling link is not a regular file, so the scan leaves it out.
        let files = scan_images(dir.path()).unwrap();
        assert_eq!(files.len(), 1);

        let staged = stage_files(&files).unwrap();
        let err = finalize_files(&staged, &generate_names(1, start())).unwrap_err();
        assert!(
            matches!(err, Error::TargetOccupied { ref path } if *path == dir.path().join("20200614_01.jpg"))
        );

        assert!(fs::symlink_metadata(dir.path().join("20200614_01.jpg"))
            .unwrap()
            .file_type()
            .is_symlink());
        assert_eq!(fs::read(dir.path().join("1.jpg")).unwrap(), b"ok");
    }
}
