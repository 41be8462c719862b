//! Integrity module.
//!
//! Provides:
//! - MD5 content hashing
//! - Duplicate detection before renaming
//! - Content verification after renaming

pub mod guard;
pub mod hash;

pub use guard::{
    check_content_preserved, check_no_duplicates, DuplicateCheck, HashIndex, PreservationCheck,
};
pub use hash::{hash_file, ContentHash};
