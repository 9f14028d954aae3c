//! Matching, ordering, batching and reconciliation logic.

mod batcher;
mod matcher;
mod normalize;
mod reconcile;
mod sort;

pub use batcher::partition;
pub use matcher::{front_matches, match_row, match_rows};
pub use normalize::normalize;
pub use reconcile::{reconcile, Reconciliation};
pub use sort::{collector_key, locale_cmp, sort_rows};
