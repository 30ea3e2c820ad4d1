use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use rust_hasher::cli::Args;
use rust_hasher::constants::{CSV_REPORT_NAME, JSON_SUMMARY_NAME, TABLE_REPORT_NAME};
use rust_hasher::models::ScanResults;
use rust_hasher::scanner::{ScanEngine, ScanOptions};
use rust_hasher::utils::hash::HashAlgorithm;
use rust_hasher::utils::report;
use rust_hasher::utils::summary::create_scan_summary;

fn main() -> Result<()> {
    let args = Args::parse();
    initialize_logging(args.verbose)?;

    info!("rust-hasher v{} starting", env!("CARGO_PKG_VERSION"));

    validate_root_path(&args.root_path)?;
    let algorithm = args.algorithm();

    info!("Root path selection: {}", args.root_path.display());
    info!("Hash type selection: {}", algorithm);

    let engine = ScanEngine::new(ScanOptions {
        algorithm,
        threads: args.worker_threads(),
    });

    let start = Instant::now();
    let results = engine.scan(&args.root_path)?;
    let duration_seconds = start.elapsed().as_secs_f64();

    // The engine only produces results; the renderers are chosen here.
    print!("{}", report::render_table_report(&results.records, algorithm));

    if !args.no_reports {
        write_reports(&args.output, algorithm, &results, duration_seconds)?;
    }

    info!(
        "Files processed: {}",
        report::format_thousands(results.summary.processed_count)
    );
    info!(
        "Hashed bytes:    {} bytes",
        report::format_thousands(results.summary.total_bytes_hashed)
    );
    info!(
        "Error count:     {}",
        report::format_thousands(results.summary.error_count)
    );
    info!("Elapsed time:    {:.2} seconds", duration_seconds);

    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Root-path validation is the only fatal check in the program; everything
/// past this point is fail-soft.
fn validate_root_path(root: &Path) -> Result<()> {
    if !root.is_dir() {
        bail!("Root path {} is not an existing directory", root.display());
    }
    fs::read_dir(root).context(format!("Root path {} is not readable", root.display()))?;
    Ok(())
}

/// Write the table, CSV, and JSON summary report files.
fn write_reports(
    output_dir: &Path,
    algorithm: HashAlgorithm,
    results: &ScanResults,
    duration_seconds: f64,
) -> Result<()> {
    fs::create_dir_all(output_dir).context(format!(
        "Failed to create report directory {}",
        output_dir.display()
    ))?;

    let table_path = output_dir.join(TABLE_REPORT_NAME);
    fs::write(
        &table_path,
        report::render_table_report(&results.records, algorithm),
    )
    .context(format!(
        "Failed to write table report to {}",
        table_path.display()
    ))?;
    info!("Table report written to {}", table_path.display());

    report::write_csv_report(&output_dir.join(CSV_REPORT_NAME), &results.records, algorithm)?;

    let hostname = hostname::get()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    let timestamp = chrono::Utc::now().to_rfc3339();

    let summary_json = create_scan_summary(
        &hostname,
        &timestamp,
        algorithm,
        &results.records,
        &results.summary,
        duration_seconds,
    )?;

    let summary_path = output_dir.join(JSON_SUMMARY_NAME);
    fs::write(&summary_path, summary_json).context(format!(
        "Failed to write scan summary to {}",
        summary_path.display()
    ))?;
    info!("Scan summary written to {}", summary_path.display());

    Ok(())
}
