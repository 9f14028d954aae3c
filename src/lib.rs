//! mpcfill - Reconcile and batch MPC Autofill proxy orders.
//!
//! This library turns an order export into MakePlayingCards bulk-fill CSV
//! files. Every row is matched against a directory of MPC Autofill XML
//! manifests (newest first) to find its front and back images, and the
//! matched rows are split into batches no larger than one MPC order.
//!
//! It also rewrites an existing manifest so its card ids and names follow the
//! newest source manifests.
//!
//! # Example
//!
//! ```no_run
//! use mpcfill::{create_mpcfill_csv, FillConfig};
//! use std::path::Path;
//!
//! let report = create_mpcfill_csv(
//!     Path::new("deck.csv"),
//!     Path::new("orders"),
//!     Path::new("fill.csv"),
//!     &FillConfig::default(),
//! )
//! .unwrap();
//! println!("wrote {} batch file(s)", report.written.len());
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod transform;
pub mod validation;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// Re-exports for convenience
pub use config::{ColumnLayout, FillConfig, DEFAULT_BATCH_CAPACITY, DEFAULT_RECONCILED_OUTPUT};
pub use error::{ErrorKind, FillError, Result};
pub use generator::{batch_file_path, render_batch, render_order, write_batches, write_order};
pub use model::{
    Batch, CardEntry, CardFace, Demand, EnrichedRow, LineItem, Manifest, MatchResult, Order, Row,
};
pub use parser::{load_manifest, parse_order, read_order_csv, ManifestIndex};
pub use transform::{match_row, match_rows, normalize, partition, reconcile, sort_rows, Reconciliation};
pub use validation::{validate_batches, validate_matches, ValidationResult};

/// Matched rows and the batches they were split into.
#[derive(Debug, Clone, Serialize)]
pub struct FillPlan {
    /// Rows in sorted order, with their match results.
    pub rows: Vec<EnrichedRow>,
    /// Batches in output order.
    pub batches: Vec<Batch>,
    /// Validation warnings (unmatched rows and the like).
    pub warnings: Vec<String>,
}

impl FillPlan {
    /// Number of rows that found a manifest card.
    pub fn matched(&self) -> usize {
        self.rows.iter().filter(|r| r.is_matched()).count()
    }

    /// Total cards ordered.
    pub fn total_quantity(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.row.quantity)).sum()
    }
}

/// A written fill plan.
#[derive(Debug, Clone, Serialize)]
pub struct FillReport {
    pub plan: FillPlan,
    /// Batch files, in batch order.
    pub written: Vec<PathBuf>,
}

/// Read, sort, match and batch an order without writing anything.
///
/// Pipeline:
/// 1. Read the order export
/// 2. Sort rows by set code and collector number
/// 3. Load the manifest directory once
/// 4. Match every row in parallel against that snapshot
/// 5. Partition the matched rows into batches
/// 6. Validate the plan
pub fn plan_mpcfill(input_csv: &Path, xml_dir: &Path, config: &FillConfig) -> Result<FillPlan> {
    config.validate()?;

    let rows = sort_rows(read_order_csv(input_csv, &config.columns)?);
    info!("Read {} row(s) from {}", rows.len(), input_csv.display());

    let index = ManifestIndex::load(xml_dir, config.load_timeout)?;
    let enriched = match_rows(rows, &index);

    let demand_total = enriched.iter().map(|r| u64::from(r.row.quantity)).sum();
    let batches = partition(&enriched, config.capacity)?;

    let mut validation = validate_matches(&enriched);
    validation.merge(validate_batches(demand_total, &batches, config.capacity));
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if !validation.passed {
        return Err(FillError::InvalidBatches {
            errors: validation.errors,
        });
    }

    Ok(FillPlan {
        rows: enriched,
        batches,
        warnings: validation.warnings,
    })
}

/// Build the fill plan and write one CSV file per batch next to `output_csv`.
pub fn create_mpcfill_csv(
    input_csv: &Path,
    xml_dir: &Path,
    output_csv: &Path,
    config: &FillConfig,
) -> Result<FillReport> {
    let plan = plan_mpcfill(input_csv, xml_dir, config)?;
    let written = write_batches(&plan.batches, output_csv)?;

    info!(
        "Matched {}/{} row(s), {} card(s) in {} batch file(s)",
        plan.matched(),
        plan.rows.len(),
        plan.total_quantity(),
        written.len()
    );

    Ok(FillReport { plan, written })
}

/// Reconcile the manifest at `target` against every manifest in `source_dir`
/// and write the result to `output`. Neither input is modified.
pub fn update_mpc_fill_images(
    target: &Path,
    source_dir: &Path,
    output: &Path,
    config: &FillConfig,
) -> Result<Reconciliation> {
    let target_manifest = load_manifest(target)?;
    let sources = ManifestIndex::load(source_dir, config.load_timeout)?;

    let result = reconcile(target_manifest.order, &sources);
    write_order(&result.order, output)?;

    info!(
        "Update complete ({} updated, {} unchanged). Output saved to {}",
        result.updated,
        result.unchanged,
        output.display()
    );

    Ok(result)
}
