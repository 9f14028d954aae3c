//! Output generators: batch CSV files and manifest XML.

mod batch_csv;
mod manifest_xml;

pub use batch_csv::{batch_file_path, render_batch, write_batch, write_batches};
pub use manifest_xml::{render_order, write_order};
