use thiserror::Error;

use crate::core::ChartStyle;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read data source: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed delimited data at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("header type `{0}` not supported (expected one of: date, string, number)")]
    UnsupportedHeaderType(String),

    #[error("option `{option}` is incompatible with chart style {style}")]
    IncompatibleStyle {
        option: &'static str,
        style: ChartStyle,
    },

    #[error("the chart is missing a required title")]
    MissingTitle,

    #[error("the chart is missing a required width")]
    MissingWidth,

    #[error("the chart is missing a required height")]
    MissingHeight,

    #[error("the number of values in row {row} ({actual}) does not match the header count ({expected})")]
    RowHeaderMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
