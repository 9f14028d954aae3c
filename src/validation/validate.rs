//! Validation of batch plans before they are written.

use crate::model::{Batch, EnrichedRow};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Check that `batches` is a valid partition of `demand_total` cards.
pub fn validate_batches(demand_total: u64, batches: &[Batch], capacity: u32) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let capacity = u64::from(capacity);

    let planned: u64 = batches.iter().map(Batch::total).sum();
    if planned != demand_total {
        result.add_error(format!(
            "Batches hold {} card(s) but the order asks for {}",
            planned, demand_total
        ));
    }

    let last = batches.len().saturating_sub(1);
    for (idx, batch) in batches.iter().enumerate() {
        if batch.number != idx {
            result.add_error(format!(
                "Batch at position {} is numbered {}",
                idx, batch.number
            ));
        }

        let total = batch.total();
        if total > capacity {
            result.add_error(format!(
                "Batch {}: {} card(s) exceeds capacity {}",
                batch.number, total, capacity
            ));
        } else if idx < last && total < capacity {
            result.add_error(format!(
                "Batch {}: only {} of {} card(s) before the last batch",
                batch.number, total, capacity
            ));
        }

        if batch.items.iter().any(|i| i.quantity == 0) {
            result.add_warning(format!("Batch {}: contains an empty line item", batch.number));
        }
    }

    result
}

/// Warn about every row that found no manifest card.
pub fn validate_matches(rows: &[EnrichedRow]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for enriched in rows.iter().filter(|r| !r.is_matched()) {
        let row = &enriched.row;
        result.add_warning(format!(
            "No manifest card for '{}' ({} #{}), {} card(s) will have no image",
            row.name,
            row.set_code,
            row.collector_number.as_deref().unwrap_or("?"),
            row.quantity
        ));
    }

    result
}
