//! rh-convert - CLI tool to convert RapidHarness exports to E3.series From-To Lists.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rh_convert_rs::{
    convert_rapidharness, generate_fromto, workbook, write_issue_log, DeviceLookup, WireLookup,
};

/// Convert RapidHarness wire harness exports to E3.series From-To List format.
#[derive(Parser, Debug)]
#[command(name = "rh-convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input RapidHarness workbook export
    #[arg(short, long)]
    input: PathBuf,

    /// Output From-To List workbook path
    #[arg(short, long)]
    output: PathBuf,

    /// Wire lookup table CSV (RapidHarness names to E3 wire components)
    #[arg(short, long)]
    wire_map: PathBuf,

    /// Device lookup table CSV (RapidHarness part numbers to E3 device names)
    #[arg(short, long)]
    device_map: PathBuf,

    /// Optional path for a CSV log of all issues encountered
    #[arg(short, long)]
    error_log: Option<PathBuf>,

    /// Run the conversion and report issues without writing the output workbook
    #[arg(long)]
    validate: bool,

    /// Output converted records as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    // Load lookup tables
    let wires = WireLookup::load(&args.wire_map).with_context(|| {
        format!(
            "Failed to load wire lookup table {}",
            args.wire_map.display()
        )
    })?;
    info!("Loaded {} wire mappings", wires.len());

    let devices = DeviceLookup::load(&args.device_map).with_context(|| {
        format!(
            "Failed to load device lookup table {}",
            args.device_map.display()
        )
    })?;
    info!("Loaded {} device mappings", devices.len());

    // Run the conversion pipeline
    let conversion = convert_rapidharness(&args.input, &wires, &devices)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    info!("Converted {} connections", conversion.rows.len());

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&conversion.rows)?;
        println!("{}", json);
        return Ok(());
    }

    if !args.validate {
        let book = generate_fromto(&conversion.rows);
        workbook::write_file(&book, &args.output)
            .with_context(|| format!("Failed to write {}", args.output.display()))?;
        info!("Generated: {}", args.output.display());
    }

    // Export the issue log if requested
    if let Some(path) = &args.error_log {
        if conversion.issues.is_empty() {
            info!("No issues encountered - no issue log created");
        } else {
            write_issue_log(&conversion.issues, path)
                .with_context(|| format!("Failed to write issue log {}", path.display()))?;
            info!("Issue log saved to: {}", path.display());
        }
    }

    // Summary
    let errors = conversion.issues.error_count();
    let warnings = conversion.issues.warning_count();
    if errors > 0 || warnings > 0 {
        warn!(
            "Conversion finished with {} error(s) and {} warning(s)",
            errors, warnings
        );
        if args.error_log.is_none() {
            info!("Use --error-log to save detailed issue information");
        }
    } else {
        info!("No issues encountered");
    }

    if args.validate {
        info!("Validation run complete - no output written");
    }

    Ok(())
}
