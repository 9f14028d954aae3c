//! Manifest loading and the recency-ordered manifest index.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

use super::order_xml::parse_order;
use crate::error::{FillError, Result};
use crate::model::Manifest;

/// Load a single manifest file, recording its modification time.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| FillError::io(path, e))?;
    let content = fs::read_to_string(path).map_err(|e| FillError::io(path, e))?;
    let order = parse_order(&content).map_err(|source| FillError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Parsed {}: {} front(s), {} back(s)",
        path.display(),
        order.cards(crate::model::Face::Fronts).len(),
        order.cards(crate::model::Face::Backs).len()
    );

    Ok(Manifest::new(path, modified, order))
}

/// Snapshot of every manifest in a directory, newest first.
///
/// The index is built once per run and never refreshed; matching and
/// reconciliation scan it in order, so the order is the precedence rule.
#[derive(Debug, Clone, Default)]
pub struct ManifestIndex {
    manifests: Vec<Manifest>,
}

impl ManifestIndex {
    /// Build an index from already-loaded manifests.
    ///
    /// Manifests are ordered by descending modification time; ties fall back
    /// to ascending file name, then full path.
    pub fn from_manifests(mut manifests: Vec<Manifest>) -> Self {
        manifests.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| a.file_name().cmp(b.file_name()))
                .then_with(|| a.path.cmp(&b.path))
        });
        Self { manifests }
    }

    /// Load every file in `dir` as a manifest.
    ///
    /// Files are parsed in parallel. A single failure is returned as is;
    /// several are returned together as [`FillError::ManifestLoad`].
    pub fn build(dir: &Path) -> Result<Self> {
        let paths = list_files(dir)?;

        let (manifests, mut failures): (Vec<_>, Vec<_>) = paths
            .par_iter()
            .map(|path| load_manifest(path))
            .partition_map(|result| match result {
                Ok(manifest) => rayon::iter::Either::Left(manifest),
                Err(err) => rayon::iter::Either::Right(err),
            });

        match failures.len() {
            0 => {}
            1 => return Err(failures.remove(0)),
            _ => return Err(FillError::ManifestLoad { failures }),
        }

        info!(
            "Loaded {} manifest(s) from {}",
            manifests.len(),
            dir.display()
        );

        Ok(Self::from_manifests(manifests))
    }

    /// Load `dir`, giving up after `timeout`.
    pub fn build_with_timeout(dir: &Path, timeout: Duration) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let owned = dir.to_path_buf();
        thread::spawn(move || {
            // The receiver is gone once the timeout fired.
            let _ = tx.send(Self::build(&owned));
        });

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(FillError::Timeout {
                path: dir.to_path_buf(),
                elapsed: timeout,
            }),
            Err(RecvTimeoutError::Disconnected) => Err(FillError::io(
                dir,
                std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "manifest loader stopped before finishing",
                ),
            )),
        }
    }

    /// Load `dir`, bounded by `timeout` when one is given.
    pub fn load(dir: &Path, timeout: Option<Duration>) -> Result<Self> {
        match timeout {
            Some(timeout) => Self::build_with_timeout(dir, timeout),
            None => Self::build(dir),
        }
    }

    /// Manifests ordered newest first.
    pub fn manifests_by_recency(&self) -> &[Manifest] {
        &self.manifests
    }

    pub fn len(&self) -> usize {
        self.manifests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }
}

/// Regular files directly inside `dir`, in directory order.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| FillError::io(dir, e))? {
        let path = entry.map_err(|e| FillError::io(dir, e))?.path();
        if path.is_file() {
            paths.push(path);
        } else {
            debug!("Skipping non-file entry {}", path.display());
        }
    }
    Ok(paths)
}
