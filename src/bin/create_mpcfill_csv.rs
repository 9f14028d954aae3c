//! create-mpcfill-csv - split an order export into MPC bulk-fill CSV batches.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mpcfill::{create_mpcfill_csv, plan_mpcfill, FillConfig, DEFAULT_BATCH_CAPACITY};

/// Match an order export against MPC Autofill manifests and write batch CSVs.
#[derive(Parser, Debug)]
#[command(name = "create-mpcfill-csv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input order export CSV
    #[arg(short = 'i', long, alias = "inputCSV")]
    input_csv: PathBuf,

    /// Directory containing MPC Autofill XML manifests
    #[arg(short = 'x', long, alias = "xmlDirectory")]
    xml_directory: PathBuf,

    /// Base path of the output CSV files (`_<N>.csv` is appended)
    #[arg(short = 'o', long, alias = "outputCSV")]
    output_csv: PathBuf,

    /// Maximum cards per batch file
    #[arg(long, default_value_t = DEFAULT_BATCH_CAPACITY)]
    capacity: u32,

    /// Give up loading manifests after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Match and batch only, don't write any file
    #[arg(long)]
    validate: bool,

    /// Output the matched rows and batches as JSON
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

    let mut config = FillConfig::new(args.capacity);
    if let Some(secs) = args.timeout_secs {
        config = config.with_load_timeout(Duration::from_secs(secs));
    }

    info!("Processing: {}", args.input_csv.display());

    if args.validate || args.debug {
        let plan = plan_mpcfill(&args.input_csv, &args.xml_directory, &config)
            .with_context(|| format!("Failed to plan {}", args.input_csv.display()))?;

        if args.debug {
            let json = serde_json::to_string_pretty(&plan)?;
            println!("{}", json);
        }

        info!(
            "Validation passed: {}/{} row(s) matched, {} batch(es) planned",
            plan.matched(),
            plan.rows.len(),
            plan.batches.len()
        );
        return Ok(());
    }

    let report = create_mpcfill_csv(
        &args.input_csv,
        &args.xml_directory,
        &args.output_csv,
        &config,
    )
    .with_context(|| format!("Failed to process {}", args.input_csv.display()))?;

    for path in &report.written {
        info!("Generated: {}", path.display());
    }

    Ok(())
}
