use crate::api::ChartConfig;
use crate::core::{ChartStyle, Header, HeaderType, Row};
use crate::render::literal::{cell_literal, option_literal, quoted};

/// One `addColumn` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDeclaration {
    pub header_type: HeaderType,
    pub name: String,
}

/// Backend-agnostic payload for one generated document.
///
/// Every value is already formatted as a script literal, in insertion order,
/// so renderers only concatenate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFrame {
    pub style: ChartStyle,
    pub columns: Vec<ColumnDeclaration>,
    pub rows: Vec<Vec<String>>,
    /// `(name, literal)` pairs: title, width, height, then extra options.
    pub options: Vec<(String, String)>,
}

impl DocumentFrame {
    /// Materializes the frame; callers validate the chart beforehand.
    #[must_use]
    pub fn build(config: &ChartConfig, headers: &[Header], rows: &[Row]) -> Self {
        let columns = headers
            .iter()
            .map(|header| ColumnDeclaration {
                header_type: header.header_type,
                name: header.name.clone(),
            })
            .collect();

        let rows = rows
            .iter()
            .map(|row| row.values.iter().map(cell_literal).collect())
            .collect();

        let mut options = Vec::with_capacity(3 + config.extra_options.len());
        options.push(("title".to_owned(), quoted(&config.title)));
        options.push(("width".to_owned(), config.width.to_string()));
        options.push(("height".to_owned(), config.height.to_string()));
        options.extend(
            config
                .extra_options
                .iter()
                .map(|(name, value)| (name.clone(), option_literal(value))),
        );

        Self {
            style: config.style,
            columns,
            rows,
            options,
        }
    }

    #[must_use]
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
