use chrono::{Datelike, Timelike};

use crate::api::OptionValue;
use crate::core::CellValue;

/// Formats a cell as a script literal for the data table.
///
/// Text is embedded between single quotes without escaping. Dates become a
/// `new Date(..)` call with a 0-based month, using the wall-clock fields of
/// the value's own offset.
#[must_use]
pub fn cell_literal(value: &CellValue) -> String {
    match value {
        CellValue::Integer(value) => value.to_string(),
        CellValue::Float(value) => float_literal(*value),
        CellValue::Boolean(value) => quoted(if *value { "true" } else { "false" }),
        CellValue::Text(value) => quoted(value),
        CellValue::DateTime(value) => format!(
            "new Date({}, {}, {}, {}, {}, {})",
            value.year(),
            value.month0(),
            value.day(),
            value.hour(),
            value.minute(),
            value.second()
        ),
    }
}

#[must_use]
pub fn option_literal(value: &OptionValue) -> String {
    match value {
        OptionValue::Text(text) => quoted(text),
        OptionValue::Literal(literal) => literal.clone(),
    }
}

pub(crate) fn quoted(text: &str) -> String {
    format!("'{text}'")
}

fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else {
        format!("{value:.6}")
    }
}
