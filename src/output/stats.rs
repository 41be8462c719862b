//! Statistics reporting.

use console::style;

use crate::pipeline::BatchReport;

/// Print the summary of a completed batch.
pub fn print_batch_stats(report: &BatchReport) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Batch Statistics:").bold());
    println!("  Files found:    {}", report.files_found);
    println!("  Staged:         {}", report.staged);
    println!("  Renamed:        {}", report.renamed);
    println!("  Files verified: {}", report.files_verified);
    if let (Some(first), Some(last)) = (&report.first_name, &report.last_name) {
        println!("  Names:          {} .. {}", first, last);
    }
    println!("{}", style("═".repeat(50)).dim());
}
