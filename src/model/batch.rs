//! Batch definitions: capacity-bounded sub-orders written as CSV files.

use serde::{Deserialize, Serialize};

use super::EnrichedRow;

/// One output line of a batch file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Front")]
    pub front: String,
    #[serde(rename = "Front ID")]
    pub front_id: String,
    #[serde(rename = "Back")]
    pub back: String,
    #[serde(rename = "Back ID")]
    pub back_id: String,
}

/// A numbered group of line items whose quantities never exceed the capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Sequential batch number, starting at 0.
    pub number: usize,
    /// Line items in row order.
    pub items: Vec<LineItem>,
}

impl Batch {
    /// Create an empty batch.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            items: Vec::new(),
        }
    }

    /// Total quantity across all items.
    pub fn total(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Something that can be drained into batches.
pub trait Demand {
    /// Copies requested.
    fn quantity(&self) -> u32;

    /// A line item carrying this demand's card data with the given quantity.
    fn line_item(&self, quantity: u32) -> LineItem;
}

impl Demand for EnrichedRow {
    fn quantity(&self) -> u32 {
        self.row.quantity
    }

    fn line_item(&self, quantity: u32) -> LineItem {
        LineItem {
            quantity,
            front: self.front().to_string(),
            front_id: self.front_id().to_string(),
            back: self.back().to_string(),
            back_id: self.back_id().to_string(),
        }
    }
}

impl Demand for LineItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn line_item(&self, quantity: u32) -> LineItem {
        LineItem {
            quantity,
            ..self.clone()
        }
    }
}
