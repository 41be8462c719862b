//! Photo Sequencer - collision-free, date-sequenced image renaming
//!
//! Renames every image in a directory to `YYYYMMDD_nn`, advancing the date
//! after 99 names, while guaranteeing that no file content is lost.
//!
//! # Features
//!
//! - Deterministic name sequence from a single captured start date
//! - Two-phase rename through numeric placeholders, safe against name collisions
//! - MD5 duplicate detection before renaming, content verification after
//! - Dry-run planning
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chrono::NaiveDate;
//! use photo_sequencer::{run_batch, BatchOptions, BatchOutcome};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = BatchOptions {
//!         start_date: NaiveDate::from_ymd_opt(2020, 6, 14).unwrap(),
//!         dry_run: false,
//!         show_progress: true,
//!     };
//!
//!     if let BatchOutcome::Renamed(report) = run_batch(Path::new("photos"), options)? {
//!         println!("renamed {} files", report.renamed);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod integrity;
pub mod output;
pub mod pipeline;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use fs::{generate_names, FileEntry, TargetName};
pub use integrity::{check_content_preserved, check_no_duplicates, ContentHash};
pub use pipeline::{run_batch, BatchOptions, BatchOutcome, BatchReport};
