//! Manifest XML generator.

use serde::Serialize;
use std::path::Path;

use crate::error::{FillError, Result};
use crate::model::Order;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Render an order as an indented XML document.
pub fn render_order(order: &Order) -> Result<String> {
    let mut xml = String::from(XML_DECLARATION);

    let mut serializer = quick_xml::se::Serializer::new(&mut xml);
    serializer.indent(' ', 2);
    order
        .serialize(serializer)
        .map_err(|source| FillError::ManifestWrite { source })?;

    xml.push('\n');
    Ok(xml)
}

/// Write an order to `path`, replacing any existing file.
pub fn write_order(order: &Order, path: &Path) -> Result<()> {
    let xml = render_order(order)?;
    std::fs::write(path, xml).map_err(|e| FillError::io(path, e))
}
