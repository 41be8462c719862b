//! Batch pipeline.

pub mod run;
pub mod state;

pub use run::{run_batch, BatchOptions};
pub use state::{BatchOutcome, BatchReport};
