use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{ChartStyle, Header, HeaderType, Row, validate_chart_structure};
use crate::error::ChartResult;
use crate::render::{DocumentFrame, DocumentRenderer, HtmlRenderer};

use super::{ChartConfig, OptionValue};

/// Tabular chart data plus its visual configuration.
///
/// A chart is built up by the caller (headers, rows, options) and turned into
/// a self-contained document with [`Chart::generate`]. Generation never
/// mutates the chart, so it can be repeated after fixing inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub(super) config: ChartConfig,
    pub(super) headers: Vec<Header>,
    pub(super) rows: Vec<Row>,
}

impl Chart {
    #[must_use]
    pub fn new(style: ChartStyle) -> Self {
        Self::from_config(ChartConfig::new(style))
    }

    #[must_use]
    pub fn line() -> Self {
        Self::new(ChartStyle::Line)
    }

    #[must_use]
    pub fn area() -> Self {
        Self::new(ChartStyle::Area)
    }

    #[must_use]
    pub fn column() -> Self {
        Self::new(ChartStyle::Column)
    }

    /// Creates an empty chart (no headers, no rows) from a saved configuration.
    #[must_use]
    pub fn from_config(config: ChartConfig) -> Self {
        Self {
            config,
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.config.style
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.config.title
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.config.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.config.height
    }

    #[must_use]
    pub fn extra_options(&self) -> &IndexMap<String, OptionValue> {
        &self.config.extra_options
    }

    #[must_use]
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = title.into();
    }

    pub fn set_width(&mut self, width: u32) {
        self.config.width = width;
    }

    pub fn set_height(&mut self, height: u32) {
        self.config.height = height;
    }

    /// Sets a raw extra option; re-setting a name keeps its original position.
    pub fn set_option(&mut self, name: impl Into<String>, value: OptionValue) {
        let name = name.into();
        trace!(option = %name, "set extra option");
        self.config.extra_options.insert(name, value);
    }

    /// Declares the next column, parsing `header_type` at the boundary.
    pub fn add_header(&mut self, name: impl Into<String>, header_type: &str) -> ChartResult<()> {
        let header_type = header_type.parse::<HeaderType>()?;
        self.add_typed_header(name, header_type);
        Ok(())
    }

    pub fn add_typed_header(&mut self, name: impl Into<String>, header_type: HeaderType) {
        let header = Header::new(name, header_type);
        trace!(name = %header.name, header_type = %header.header_type, "add header");
        self.headers.push(header);
    }

    /// Appends a row unconditionally; arity is checked by [`Chart::validate`].
    pub fn add_row(&mut self, values: impl Into<Row>) {
        let row = values.into();
        trace!(values = row.len(), rows = self.rows.len() + 1, "add row");
        self.rows.push(row);
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_chart_structure(
            &self.config.title,
            self.config.width,
            self.config.height,
            &self.headers,
            &self.rows,
        )
        .inspect_err(|err| debug!(error = %err, "chart validation failed"))
    }

    /// Validates the chart and renders it as a standalone HTML document.
    pub fn generate(&self) -> ChartResult<String> {
        self.generate_with(&HtmlRenderer)
    }

    /// Validates the chart and renders it through `renderer`.
    pub fn generate_with<R: DocumentRenderer>(&self, renderer: &R) -> ChartResult<String> {
        self.validate()?;
        let frame = DocumentFrame::build(&self.config, &self.headers, &self.rows);
        let document = renderer.render(&frame);
        debug!(
            style = %self.config.style,
            columns = frame.columns.len(),
            rows = frame.rows.len(),
            bytes = document.len(),
            "generated chart document"
        );
        Ok(document)
    }
}
