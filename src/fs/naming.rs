//! Target name generation.
//!
//! Names have the form `YYYYMMDD_nn`. Each date holds at most [`NAMES_PER_DAY`]
//! names; once a date is full the sequence continues on the following day.

use std::fmt;

use chrono::{Days, NaiveDate};
use regex::Regex;

use crate::error::{Error, Result};

/// Maximum sequence number per date.
pub const NAMES_PER_DAY: usize = 99;

/// Canonical base name for one file, without extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetName(String);

impl TargetName {
    fn new(date: NaiveDate, seq: usize) -> Self {
        let width = NAMES_PER_DAY.to_string().len();
        Self(format!("{}_{:0width$}", date.format("%Y%m%d"), seq, width = width))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full file name with a normalized extension appended.
    pub fn with_extension(&self, ext: &str) -> String {
        let ext = normalize_extension(ext);
        if ext.is_empty() {
            self.0.clone()
        } else {
            format!("{}.{}", self.0, ext)
        }
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate `count` target names starting at `start_date`.
///
/// The date is taken as a parameter so that every name in a batch is derived
/// from the same day even if generation runs across midnight.
pub fn generate_names(count: usize, start_date: NaiveDate) -> Vec<TargetName> {
    let full_days = count / NAMES_PER_DAY;
    let remainder = count % NAMES_PER_DAY;
    let total_days = full_days + usize::from(remainder > 0);

    let mut names = Vec::with_capacity(count);
    let mut date = start_date;

    for day in 0..total_days {
        let last = day + 1 == total_days;
        let per_day = if last && remainder > 0 {
            remainder
        } else {
            NAMES_PER_DAY
        };

        names.extend((1..=per_day).map(|seq| TargetName::new(date, seq)));

        if !last {
            // Only fails past the end of chrono's calendar range.
            date = match date.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
    }

    names
}

/// Normalize an extension: lower-case, with `jpeg` folded into `jpg`.
///
/// Accepts the extension with or without a leading dot and returns it without one.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim_start_matches('.').to_lowercase();
    if ext == "jpeg" {
        "jpg".to_string()
    } else {
        ext
    }
}

/// Parse a `YYYY-MM-DD` start date.
pub fn parse_start_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern");

    if !pattern.is_match(input) {
        return Err(Error::InvalidDate(format!(
            "'{}' is not in YYYY-MM-DD form",
            input
        )));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("'{}': {}", input, e)))
}
