use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartStyle;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TITLE: &str = "GChart";
pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 400;

/// Value of one entry in the options block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum OptionValue {
    /// Emitted as a single-quoted script string.
    Text(String),
    /// Emitted verbatim, e.g. a nested option object.
    Literal(String),
}

impl OptionValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }
}

/// Serializable chart configuration, independent of headers and rows.
///
/// Hosts can persist/load the visual setup of a chart and re-apply it to
/// fresh data with `Chart::from_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub style: ChartStyle,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Insertion-ordered so the options block is byte-stable across runs.
    #[serde(default)]
    pub extra_options: IndexMap<String, OptionValue>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(style: ChartStyle) -> Self {
        Self {
            style,
            title: default_title(),
            width: default_width(),
            height: default_height(),
            extra_options: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Adds or replaces an extra option; a replaced key keeps its position.
    #[must_use]
    pub fn with_option(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.extra_options.insert(name.into(), value);
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_owned()
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}
