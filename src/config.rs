//! Configuration constants and settings for the pipelines.

use std::time::Duration;

use crate::error::{FillError, Result};

/// Maximum number of cards in one MakePlayingCards bulk order.
pub const DEFAULT_BATCH_CAPACITY: u32 = 612;

/// Separator between the faces of a double-faced card name.
pub const DFC_SEPARATOR: &str = " // ";

/// Apostrophe variants folded together when comparing card names.
pub const APOSTROPHE_VARIANTS: [char; 3] = ['\u{2019}', '\'', '`'];

/// Replacement for every apostrophe variant.
pub const APOSTROPHE_REPLACEMENT: char = '_';

/// Default output path of the manifest reconciler.
pub const DEFAULT_RECONCILED_OUTPUT: &str = "updated.xml";

/// Header names of the batch CSV files, in column order.
pub const BATCH_HEADERS: [&str; 5] = ["Quantity", "Front", "Front ID", "Back", "Back ID"];

/// Header names of the order export columns the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Card name column.
    pub name: String,
    /// Set code column.
    pub set_code: String,
    /// Collector number column.
    pub collector_number: String,
    /// Quantity column.
    pub quantity: String,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            set_code: "Set Code".to_string(),
            collector_number: "Collector Number".to_string(),
            quantity: "Quantity".to_string(),
        }
    }
}

/// Settings shared by both pipelines.
#[derive(Debug, Clone)]
pub struct FillConfig {
    /// Card capacity of one batch file.
    pub capacity: u32,
    /// Order export column names.
    pub columns: ColumnLayout,
    /// Upper bound on loading a manifest directory.
    pub load_timeout: Option<Duration>,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BATCH_CAPACITY,
            columns: ColumnLayout::default(),
            load_timeout: None,
        }
    }
}

impl FillConfig {
    /// Create a configuration with the given batch capacity.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Set the manifest load timeout.
    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = Some(timeout);
        self
    }

    /// Reject settings the pipelines cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(FillError::InvalidCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FillConfig::default();
        assert_eq!(config.capacity, 612);
        assert_eq!(config.columns.name, "Name");
        assert!(config.load_timeout.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = FillConfig::new(0);
        assert!(matches!(config.validate(), Err(FillError::InvalidCapacity)));
    }

    #[test]
    fn test_with_load_timeout() {
        let config = FillConfig::new(10).with_load_timeout(Duration::from_secs(3));
        assert_eq!(config.capacity, 10);
        assert_eq!(config.load_timeout, Some(Duration::from_secs(3)));
    }
}
