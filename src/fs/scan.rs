//! Directory enumeration.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extensions picked up by a scan, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A single image file found by a directory scan.
///
/// The base name is never interpreted, so names that are not valid UTF-8 are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path to the file.
    pub path: PathBuf,

    /// Directory holding the file.
    pub dir: PathBuf,

    /// Extension without the dot, case preserved as found on disk.
    pub extension: String,
}

impl FileEntry {
    /// Build an entry from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.file_name().is_none() {
            return Err(Error::InvalidFilename(path.display().to_string()));
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            path: path.to_path_buf(),
            dir,
            extension,
        })
    }
}

/// Check whether an extension belongs to the supported image set.
pub fn is_image_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// List the image files directly inside `dir`, sorted by file name.
pub fn scan_images(dir: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(is_image_extension)
            .unwrap_or(false);
        if !matches {
            continue;
        }

        entries.push(FileEntry::from_path(&path)?);
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("jpg"));
        assert!(is_image_extension("JPEG"));
        assert!(is_image_extension("Png"));
        assert!(!is_image_extension("gif"));
        assert!(!is_image_extension(""));
    }

    #[test]
    fn test_file_entry_from_path() {
        let entry = FileEntry::from_path(Path::new("/photos/IMG_0001.JPG")).unwrap();
        assert_eq!(entry.dir, PathBuf::from("/photos"));
        assert_eq!(entry.extension, "JPG");
    }

    #[test]
    fn test_file_entry_requires_file_name() {
        assert!(matches!(
            FileEntry::from_path(Path::new("/")),
            Err(Error::InvalidFilename(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_accepts_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join(OsStr::from_bytes(b"caf\xe9.jpg"));
        fs::write(&odd, b"cafe").unwrap();
        fs::write(dir.path().join("ok.jpg"), b"ok").unwrap();

        let entries = scan_images(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().any(|e| e.path == odd && e.extension == "jpg"));
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.PNG"), b"b").unwrap();
        fs::write(dir.path().join("a.jpeg"), b"a").unwrap();
        fs::write(dir.path().join("notes.txt"), b"n").unwrap();
        fs::write(dir.path().join("noext"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let entries = scan_images(dir.path()).unwrap();
        let names: Vec<String> = entries
            .iter()
            .map(|e| e.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpeg", "b.PNG"]);
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("inner.jpg"), b"i").unwrap();

        assert!(scan_images(dir.path()).unwrap().is_empty());
    }
}
