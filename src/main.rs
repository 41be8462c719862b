//! Photo Sequencer - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use photo_sequencer::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Result},
    output::{
        print_banner, print_batch_stats, print_config_summary, print_error, print_info,
        print_planned_rename, print_success, print_warning,
    },
    pipeline::{run_batch, BatchOptions, BatchOutcome},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    // The date is read once here and held for the whole batch.
    let directory = config.directory();
    let options = BatchOptions {
        start_date: config.start_date(),
        dry_run: config.options.dry_run,
        show_progress: config.options.show_progress,
    };

    print_config_summary(
        &directory,
        &options.start_date.format("%Y-%m-%d").to_string(),
        options.dry_run,
    );

    print_info("Starting");

    match run_batch(&directory, options)? {
        BatchOutcome::NoFiles => {
            print_info("No image files found, nothing to do");
        }
        BatchOutcome::Planned(plan) => {
            print_info(&format!("Planned {} rename(s):", plan.len()));
            for (from, to) in &plan {
                print_planned_rename(from, to);
            }
        }
        BatchOutcome::Renamed(report) => {
            print_batch_stats(&report);
            print_success(&format!("Renamed {} file(s)", report.renamed));
        }
    }

    print_info("Done");

    Ok(())
}
