use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc, Weekday};

/// Layout of the Unix `date` command after its leading weekday, e.g.
/// `Jan  2 15:04:05 MST 2006` from `Mon Jan  2 15:04:05 MST 2006`.
///
/// Applied after whitespace runs are collapsed, so space-padded days match.
/// The zone abbreviation is consumed but carries no offset; parsed values are
/// taken as UTC.
pub const UNIX_DATE_FORMAT: &str = "%b %d %H:%M:%S %Z %Y";

/// Typed content of a single data-table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<FixedOffset>),
    Text(String),
}

impl CellValue {
    /// Infers the most specific value for a raw text token.
    ///
    /// Candidates are tried in a fixed order and the first match wins:
    /// integer, float, boolean, Unix `date` layout, RFC 3339, then the token
    /// itself as text. Never fails, including for empty tokens.
    #[must_use]
    pub fn coerce(token: &str) -> Self {
        if let Ok(value) = token.parse::<i64>() {
            return Self::Integer(value);
        }
        if let Some(value) = parse_float(token) {
            return Self::Float(value);
        }
        if let Some(value) = parse_bool(token) {
            return Self::Boolean(value);
        }
        if let Some(value) = parse_unix_date(token) {
            return Self::DateTime(value);
        }
        if let Ok(value) = DateTime::parse_from_rfc3339(token) {
            return Self::DateTime(value);
        }
        Self::Text(token.to_owned())
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

fn parse_bool(token: &str) -> Option<bool> {
    match token {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Out-of-range magnitudes (`1e400`) are rejected; only spelled-out
/// infinities and NaN yield non-finite values.
fn parse_float(token: &str) -> Option<f64> {
    let value = token.parse::<f64>().ok()?;
    if value.is_finite() {
        return Some(value);
    }
    let unsigned = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|literal| unsigned.eq_ignore_ascii_case(literal))
        .then_some(value)
}

/// The weekday must be a well-formed three-letter name but is not checked
/// against the date.
fn parse_unix_date(token: &str) -> Option<DateTime<FixedOffset>> {
    let mut parts = token.split_whitespace();
    let weekday = parts.next()?;
    if weekday.len() != 3 || weekday.parse::<Weekday>().is_err() {
        return None;
    }
    let rest = parts.collect::<Vec<_>>().join(" ");
    NaiveDateTime::parse_from_str(&rest, UNIX_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<FixedOffset>> for CellValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.fixed_offset())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
