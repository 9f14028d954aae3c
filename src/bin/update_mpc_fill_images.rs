//! update-mpc-fill-images - refresh card ids in an MPC Autofill manifest.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use mpcfill::{update_mpc_fill_images, FillConfig, DEFAULT_RECONCILED_OUTPUT};

/// Rewrite a manifest's card ids and names from the newest source manifests.
#[derive(Parser, Debug)]
#[command(name = "update-mpc-fill-images")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Target XML manifest
    #[arg(long)]
    target: PathBuf,

    /// Directory of source XML manifests
    #[arg(long)]
    source: PathBuf,

    /// Output XML file path
    #[arg(long, default_value = DEFAULT_RECONCILED_OUTPUT)]
    output: PathBuf,

    /// Give up loading manifests after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Output the reconciled order as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = FillConfig::default();
    if let Some(secs) = args.timeout_secs {
        config = config.with_load_timeout(Duration::from_secs(secs));
    }

    let result = update_mpc_fill_images(&args.target, &args.source, &args.output, &config)
        .with_context(|| format!("Error updating XML {}", args.target.display()))?;

    if args.debug {
        let json = serde_json::to_string_pretty(&result)?;
        println!("{}", json);
    }

    Ok(())
}
