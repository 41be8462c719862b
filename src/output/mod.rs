//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_planned_rename,
    print_success, print_warning,
};
pub use progress::create_hash_bar;
pub use stats::print_batch_stats;
