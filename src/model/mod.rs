//! Data model types for order matching and batching.

mod batch;
mod manifest;
mod row;

pub use batch::{Batch, Demand, LineItem};
pub use manifest::{CardEntry, CardSection, Details, Face, Manifest, Order};
pub use row::{CardFace, EnrichedRow, MatchResult, Row};
