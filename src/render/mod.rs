mod frame;
mod html;
mod literal;

pub use frame::{ColumnDeclaration, DocumentFrame};
pub use html::{CHART_CONTAINER_ID, CHARTS_LOADER_URL, HtmlRenderer};
pub use literal::{cell_literal, option_literal};

/// Contract implemented by any document backend.
///
/// Backends receive a validated, fully formatted `DocumentFrame` so template
/// code stays isolated from chart validation and value formatting.
pub trait DocumentRenderer {
    fn render(&self, frame: &DocumentFrame) -> String;
}
