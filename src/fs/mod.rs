//! Filesystem module.
//!
//! Provides:
//! - Image file enumeration
//! - Target name generation
//! - Two-phase collision-free renaming

pub mod naming;
pub mod rename;
pub mod scan;

pub use naming::{generate_names, normalize_extension, parse_start_date, TargetName, NAMES_PER_DAY};
pub use rename::{finalize_files, plan_renames, stage_files, Stager};
pub use scan::{is_image_extension, scan_images, FileEntry, IMAGE_EXTENSIONS};
