//! Row to manifest-card matching.
//!
//! Manifests are scanned newest first and fronts in file order. The first
//! manifest with any matching front wins outright, even when it has no back
//! for that slot; older manifests are never consulted after that.

use rayon::prelude::*;
use tracing::{debug, info};

use super::normalize::normalize;
use crate::model::{CardEntry, CardFace, EnrichedRow, Manifest, MatchResult, Row};
use crate::parser::ManifestIndex;

/// Whether a front entry matches an already-normalized row name.
///
/// Either the query equals the key, or the card name contains it. The
/// containment is one-way: a short row name can match a longer card name.
pub fn front_matches(entry: &CardEntry, key: &str) -> bool {
    normalize(&entry.query) == key || normalize(&entry.name).contains(key)
}

fn face(entry: &CardEntry) -> CardFace {
    CardFace {
        query: entry.query.clone(),
        id: entry.id.clone(),
    }
}

/// Look for a match inside one manifest.
fn match_in_manifest(manifest: &Manifest, key: &str) -> Option<MatchResult> {
    let front = manifest.fronts().iter().find(|e| front_matches(e, key))?;
    let back = manifest.back_for(front).map(face);

    Some(MatchResult {
        front: face(front),
        back,
        manifest: manifest.path.clone(),
    })
}

/// Find the cards for one row.
pub fn match_row(row: &Row, index: &ManifestIndex) -> Option<MatchResult> {
    let key = normalize(&row.name);

    let found = index
        .manifests_by_recency()
        .iter()
        .find_map(|manifest| match_in_manifest(manifest, &key));

    match &found {
        Some(m) => info!(
            "Matched '{}' -> front '{}' ({}), back '{}' [{}]",
            row.name,
            m.front.query,
            m.front.id,
            m.back.as_ref().map_or("", |b| b.query.as_str()),
            m.manifest.display()
        ),
        None => debug!("No manifest card for '{}'", row.name),
    }

    found
}

/// Match every row against the index in parallel, keeping input order.
pub fn match_rows(rows: Vec<Row>, index: &ManifestIndex) -> Vec<EnrichedRow> {
    rows.into_par_iter()
        .map(|row| {
            let matched = match_row(&row, index);
            EnrichedRow::new(row, matched)
        })
        .collect()
}
