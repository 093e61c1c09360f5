use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CellValue;
use crate::error::ChartError;

/// Chart family drawn by the generated document.
///
/// Serialized with the charting library class names so persisted configs
/// read the same as the emitted draw directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartStyle {
    #[serde(rename = "LineChart")]
    Line,
    #[serde(rename = "AreaChart")]
    Area,
    #[serde(rename = "ColumnChart")]
    Column,
}

impl ChartStyle {
    /// Visualization class instantiated by the draw directive.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Line => "LineChart",
            Self::Area => "AreaChart",
            Self::Column => "ColumnChart",
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Column type declared to the data table.
///
/// Descriptive only: stored cell values are never checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderType {
    Date,
    String,
    Number,
}

impl HeaderType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for HeaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            other => Err(ChartError::UnsupportedHeaderType(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub header_type: HeaderType,
}

impl Header {
    #[must_use]
    pub fn new(name: impl Into<String>, header_type: HeaderType) -> Self {
        Self {
            name: name.into(),
            header_type,
        }
    }
}

/// One data-table row; its arity is only checked at validation time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub values: Vec<CellValue>,
}

impl Row {
    #[must_use]
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<CellValue>> for Row {
    fn from(values: Vec<CellValue>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<CellValue> for Row {
    fn from_iter<I: IntoIterator<Item = CellValue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
