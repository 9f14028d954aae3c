//! MPC Autofill order manifests.
//!
//! The XML shape is:
//!
//! ```xml
//! <order>
//!   <details>...</details>
//!   <fronts><card><id/><slots/><name/><query/></card>...</fronts>
//!   <backs>...</backs>
//!   <cardback>...</cardback>
//! </order>
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One card record inside a `fronts` or `backs` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardEntry {
    /// Printed-card identifier.
    pub id: String,
    /// Slot list; its text ties a front to the back printed on the same card.
    pub slots: String,
    /// Human card name.
    pub name: String,
    /// Search string used by the print service.
    pub query: String,
}

impl CardEntry {
    /// Create a new card entry.
    pub fn new(
        id: impl Into<String>,
        slots: impl Into<String>,
        name: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slots: slots.into(),
            name: name.into(),
            query: query.into(),
        }
    }

    /// Key pairing this entry with its counterpart face.
    pub fn slot(&self) -> &str {
        &self.slots
    }
}

/// A `fronts` or `backs` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardSection {
    pub card: Vec<CardEntry>,
}

/// Order-level settings, kept verbatim so they survive a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Details {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foil: Option<String>,
}

/// Which face list of an order to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Fronts,
    Backs,
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Fronts => write!(f, "fronts"),
            Face::Backs => write!(f, "backs"),
        }
    }
}

/// A parsed `<order>` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename = "order")]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fronts: Option<CardSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backs: Option<CardSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardback: Option<String>,
}

impl Order {
    /// Cards of one section; empty when the section is absent.
    pub fn cards(&self, face: Face) -> &[CardEntry] {
        let section = match face {
            Face::Fronts => self.fronts.as_ref(),
            Face::Backs => self.backs.as_ref(),
        };
        section.map(|s| s.card.as_slice()).unwrap_or(&[])
    }

    /// Mutable cards of one section, if the section exists.
    pub fn cards_mut(&mut self, face: Face) -> Option<&mut Vec<CardEntry>> {
        let section = match face {
            Face::Fronts => self.fronts.as_mut(),
            Face::Backs => self.backs.as_mut(),
        };
        section.map(|s| &mut s.card)
    }
}

/// One manifest file loaded from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Source path.
    pub path: PathBuf,
    /// Last modification time, used only for recency ordering.
    pub modified: SystemTime,
    /// Parsed document.
    pub order: Order,
}

impl Manifest {
    /// Create a manifest from an already-parsed order.
    pub fn new(path: impl Into<PathBuf>, modified: SystemTime, order: Order) -> Self {
        Self {
            path: path.into(),
            modified,
            order,
        }
    }

    pub fn fronts(&self) -> &[CardEntry] {
        self.order.cards(Face::Fronts)
    }

    pub fn backs(&self) -> &[CardEntry] {
        self.order.cards(Face::Backs)
    }

    /// Back entry printed in the same slot as `front`.
    pub fn back_for(&self, front: &CardEntry) -> Option<&CardEntry> {
        self.backs().iter().find(|b| b.slot() == front.slot())
    }

    /// File name used as the recency tie-break.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
