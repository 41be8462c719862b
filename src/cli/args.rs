//! Command-line argument definitions using clap.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::fs::parse_start_date;

/// Image batch renamer CLI.
#[derive(Parser, Debug)]
#[command(
    name = "photo-sequencer",
    version,
    about = "Rename images into date-sequenced names without losing content",
    long_about = "Renames every .jpg, .jpeg and .png file in a directory to YYYYMMDD_nn.\n\n\
                  Files are hashed before and after renaming; duplicate inputs abort the run \
                  before anything is touched."
)]
pub struct Args {
    /// Directory holding the images.
    pub directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "sequencer.toml")]
    pub config: PathBuf,

    /// First date of the name sequence (YYYY-MM-DD). Defaults to today.
    #[arg(short = 's', long = "start-date", value_parser = parse_date_arg)]
    pub start_date: Option<NaiveDate>,

    /// Print the planned renames without changing anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Hide hashing progress bars.
    #[arg(long)]
    pub no_progress: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

fn parse_date_arg(input: &str) -> Result<NaiveDate, String> {
    parse_start_date(input).map_err(|e| e.to_string())
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dir) = self.directory {
            config.options.directory = Some(dir);
        }

        if let Some(date) = self.start_date {
            config.options.start_date = Some(date);
        }

        // Boolean flags (only override if set to non-default)
        if self.dry_run {
            config.options.dry_run = true;
        }

        if self.no_progress {
            config.options.show_progress = false;
        }
    }
}
