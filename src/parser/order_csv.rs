//! Order export (CSV) reader.

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::config::ColumnLayout;
use crate::error::{FillError, Result};
use crate::model::Row;

/// Parse the leading integer of a string, the way a lenient `parseInt` does.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Returns `None` when no digit is found.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long numbers.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Column positions resolved from a header record.
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    name: usize,
    set_code: usize,
    collector_number: usize,
    quantity: usize,
}

impl ColumnIndices {
    fn resolve(headers: &csv::StringRecord, layout: &ColumnLayout, path: &Path) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column.trim()))
                .ok_or_else(|| FillError::MissingColumn {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                })
        };

        Ok(Self {
            name: find(&layout.name)?,
            set_code: find(&layout.set_code)?,
            collector_number: find(&layout.collector_number)?,
            quantity: find(&layout.quantity)?,
        })
    }
}

/// Read order rows from any CSV source. `path` is used for error messages.
pub fn read_order_rows<R: Read>(source: R, layout: &ColumnLayout, path: &Path) -> Result<Vec<Row>> {
    let csv_err = |source: csv::Error| FillError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let columns = ColumnIndices::resolve(&headers, layout, path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let collector_number = cell(columns.collector_number);
        let quantity = parse_leading_int(cell(columns.quantity))
            .and_then(|q| u32::try_from(q).ok())
            .unwrap_or(0);

        rows.push(Row::new(
            cell(columns.name),
            cell(columns.set_code),
            (!collector_number.is_empty()).then_some(collector_number),
            quantity,
        ));
    }

    debug!("Read {} row(s) from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read order rows from a CSV file.
pub fn read_order_csv(path: &Path, layout: &ColumnLayout) -> Result<Vec<Row>> {
    let file = std::fs::File::open(path).map_err(|e| FillError::io(path, e))?;
    read_order_rows(file, layout, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(text: &str) -> Result<Vec<Row>> {
        read_order_rows(text.as_bytes(), &ColumnLayout::default(), Path::new("order.csv"))
    }

    // ==================== parse_leading_int tests ====================

    #[test]
    fn test_parse_leading_int_plain() {
        assert_eq!(parse_leading_int("42"), Some(42));
    }

    #[test]
    fn test_parse_leading_int_suffix() {
        assert_eq!(parse_leading_int("12a"), Some(12));
        assert_eq!(parse_leading_int("  7★"), Some(7));
    }

    #[test]
    fn test_parse_leading_int_signed() {
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("+5"), Some(5));
    }

    #[test]
    fn test_parse_leading_int_non_numeric() {
        assert_eq!(parse_leading_int("x"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    // ==================== read_order_rows tests ====================

    #[test]
    fn test_read_rows_by_header_name() {
        let rows = read(
            "Quantity,Name,Finish,Set Code,Collector Number\n\
             4,Lightning Bolt,Normal,2X2,117\n\
             1,Delver of Secrets // Insectile Aberration,Foil,ISD,51\n",
        )
        .unwrap();

        assert_eq!(
            rows,
            vec![
                Row::new("Lightning Bolt", "2X2", Some("117"), 4),
                Row::new(
                    "Delver of Secrets // Insectile Aberration",
                    "ISD",
                    Some("51"),
                    1
                ),
            ]
        );
    }

    #[test]
    fn test_read_rows_headers_case_insensitive() {
        let rows = read("name,set code,collector number,quantity\nOpt,XLN,65,2\n").unwrap();
        assert_eq!(rows, vec![Row::new("Opt", "XLN", Some("65"), 2)]);
    }

    #[test]
    fn test_read_rows_empty_and_bad_cells() {
        let rows = read("Name,Set Code,Collector Number,Quantity\nOpt,XLN,,many\nShock,M19\n").unwrap();
        assert_eq!(
            rows,
            vec![
                Row::new("Opt", "XLN", None, 0),
                Row::new("Shock", "M19", None, 0),
            ]
        );
    }

    #[test]
    fn test_read_rows_negative_quantity_is_zero() {
        let rows = read("Name,Set Code,Collector Number,Quantity\nOpt,XLN,65,-3\n").unwrap();
        assert_eq!(rows[0].quantity, 0);
    }

    #[test]
    fn test_read_rows_quoted_names() {
        let rows = read(
            "Name,Set Code,Collector Number,Quantity\n\"Borborygmos, Enraged\",GTC,151,1\n",
        )
        .unwrap();
        assert_eq!(rows[0].name, "Borborygmos, Enraged");
    }

    #[test]
    fn test_read_rows_missing_column() {
        let err = read("Name,Set Code,Quantity\nOpt,XLN,1\n").unwrap_err();
        match err {
            FillError::MissingColumn { column, .. } => assert_eq!(column, "Collector Number"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_read_order_csv_missing_file() {
        let err = read_order_csv(Path::new("/no/such/order.csv"), &ColumnLayout::default())
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Io);
    }
}
