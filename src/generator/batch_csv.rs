//! Batch CSV file generator.

use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::BATCH_HEADERS;
use crate::error::{FillError, Result};
use crate::model::Batch;

/// Output path of batch `number`: `<base without .csv>_<number>.csv`.
pub fn batch_file_path(base: &Path, number: usize) -> PathBuf {
    let file_name = base
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".csv").unwrap_or(&file_name);
    base.with_file_name(format!("{}_{}.csv", stem, number))
}

/// Write one batch as CSV, header first. `path` is used for error messages.
pub fn write_batch<W: Write>(writer: W, batch: &Batch, path: &Path) -> Result<()> {
    let csv_err = |source: csv::Error| FillError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(BATCH_HEADERS).map_err(csv_err)?;
    for item in &batch.items {
        writer.serialize(item).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| FillError::io(path, e))
}

/// Render one batch to a CSV string.
pub fn render_batch(batch: &Batch) -> Result<String> {
    let mut buffer = Vec::new();
    write_batch(&mut buffer, batch, Path::new("<memory>"))?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write every batch next to `base`, in parallel.
///
/// Returns the written paths in batch order.
pub fn write_batches(batches: &[Batch], base: &Path) -> Result<Vec<PathBuf>> {
    batches
        .par_iter()
        .map(|batch| -> Result<PathBuf> {
            let path = batch_file_path(base, batch.number);
            let file = File::create(&path).map_err(|e| FillError::io(&path, e))?;
            write_batch(BufWriter::new(file), batch, &path)?;
            info!(
                "Batch {} CSV file has been saved as {} ({} card(s))",
                batch.number,
                path.display(),
                batch.total()
            );
            Ok(path)
        })
        .collect()
}
