//! Order export rows and their matched counterparts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One line of demand from the order export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Card name, possibly double-faced (`Front // Back`).
    pub name: String,
    /// Set code.
    pub set_code: String,
    /// Collector number as written in the export.
    pub collector_number: Option<String>,
    /// Number of copies ordered.
    pub quantity: u32,
}

impl Row {
    /// Create a new row.
    pub fn new(
        name: impl Into<String>,
        set_code: impl Into<String>,
        collector_number: Option<&str>,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            set_code: set_code.into(),
            collector_number: collector_number.map(str::to_string),
            quantity,
        }
    }
}

/// A printable face found in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    /// Search string used by the print service.
    pub query: String,
    /// Printed-card identifier.
    pub id: String,
}

/// The manifest cards a row resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Matched front face.
    pub front: CardFace,
    /// Back face sharing the front's slot, if the manifest had one.
    pub back: Option<CardFace>,
    /// Manifest the match came from.
    pub manifest: PathBuf,
}

/// A row together with the result of matching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRow {
    pub row: Row,
    pub matched: Option<MatchResult>,
}

impl EnrichedRow {
    pub fn new(row: Row, matched: Option<MatchResult>) -> Self {
        Self { row, matched }
    }

    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    pub fn front(&self) -> &str {
        self.matched.as_ref().map_or("", |m| m.front.query.as_str())
    }

    pub fn front_id(&self) -> &str {
        self.matched.as_ref().map_or("", |m| m.front.id.as_str())
    }

    pub fn back(&self) -> &str {
        self.back_face().map_or("", |b| b.query.as_str())
    }

    pub fn back_id(&self) -> &str {
        self.back_face().map_or("", |b| b.id.as_str())
    }

    fn back_face(&self) -> Option<&CardFace> {
        self.matched.as_ref().and_then(|m| m.back.as_ref())
    }
}
