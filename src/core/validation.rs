use crate::core::{Header, Row};
use crate::error::{ChartError, ChartResult};

/// Checks the structural invariants a chart must satisfy before generation.
///
/// Order of checks is fixed: title, width, height, then row arity in
/// insertion order. Cell types are not compared against header types.
pub fn validate_chart_structure(
    title: &str,
    width: u32,
    height: u32,
    headers: &[Header],
    rows: &[Row],
) -> ChartResult<()> {
    if title.is_empty() {
        return Err(ChartError::MissingTitle);
    }
    if width == 0 {
        return Err(ChartError::MissingWidth);
    }
    if height == 0 {
        return Err(ChartError::MissingHeight);
    }

    let expected = headers.len();
    if let Some((row, actual)) = rows
        .iter()
        .map(Row::len)
        .enumerate()
        .find(|(_, len)| *len != expected)
    {
        return Err(ChartError::RowHeaderMismatch {
            row,
            expected,
            actual,
        });
    }

    Ok(())
}
