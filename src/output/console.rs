//! Console output utilities.

use std::path::Path;

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Photo Sequencer                                   ║
║     Date-sequenced, hash-verified image renaming      ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(directory: &Path, start_date: &str, dry_run: bool) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Directory:  {}", directory.display());
    println!("  Start date: {}", start_date);
    if dry_run {
        println!("  Mode:       {}", style("dry run").yellow());
    }
    println!();
}

/// Print one planned rename.
pub fn print_planned_rename(from: &Path, to: &Path) {
    let name = |p: &Path| {
        p.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| p.display().to_string())
    };
    println!("  {} {} {}", name(from), style("->").dim(), name(to));
}
