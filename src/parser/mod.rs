//! Input readers: order exports and XML manifests.

mod manifest;
mod order_csv;
mod order_xml;

pub use manifest::{load_manifest, ManifestIndex};
pub use order_csv::{parse_leading_int, read_order_csv, read_order_rows};
pub use order_xml::parse_order;
