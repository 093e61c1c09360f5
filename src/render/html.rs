use std::fmt::Write as _;

use crate::render::{DocumentFrame, DocumentRenderer};

/// Charting library loader embedded in every document.
pub const CHARTS_LOADER_URL: &str = "https://www.gstatic.com/charts/loader.js";
/// Id of the element the chart is drawn into.
pub const CHART_CONTAINER_ID: &str = "chart_div";

const HEAD_BEGIN: &str = "<html>\n  <head>\n    <script type=\"text/javascript\" src=\"";
const LOADER_END: &str = "\"></script>\n    <script type=\"text/javascript\">\n      google.charts.load('current', {'packages':['corechart']});\n      google.charts.setOnLoadCallback(drawChart);\n";
const DATA_BEGIN: &str =
    "      function drawChart() {\n\t\tvar data = new google.visualization.DataTable();\n";
const OPTIONS_BEGIN: &str = "\t\tvar options = {\n";
const OPTIONS_END: &str = "\t\t};\n";
const DRAW_BEGIN: &str = "\t\tvar chart = new google.visualization.";
const DRAW_MIDDLE: &str = "(document.getElementById('";
const DRAW_END: &str = "'));\n\t\tchart.draw(data, options);\n";
const DATA_END: &str = "      }\n";
const HEAD_END: &str = "    </script>\n  </head>\n";
const BODY_BEGIN: &str = "  <body>\n    <div id=\"";
const BODY_END: &str = "\"></div>\n  </body>\n";
const FOOTER: &str = "</html>\n";

/// Renders a frame into a standalone Google Charts HTML page.
///
/// Caller-supplied text (titles, column names, cells) is embedded verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl DocumentRenderer for HtmlRenderer {
    fn render(&self, frame: &DocumentFrame) -> String {
        let mut out = String::with_capacity(1024 + frame.rows.len() * 64);

        out.push_str(HEAD_BEGIN);
        out.push_str(CHARTS_LOADER_URL);
        out.push_str(LOADER_END);
        out.push_str(DATA_BEGIN);
        write_columns(&mut out, frame);
        write_rows(&mut out, frame);
        out.push_str(OPTIONS_BEGIN);
        write_options(&mut out, frame);
        out.push_str(OPTIONS_END);
        out.push_str(DRAW_BEGIN);
        out.push_str(frame.style.class_name());
        out.push_str(DRAW_MIDDLE);
        out.push_str(CHART_CONTAINER_ID);
        out.push_str(DRAW_END);
        out.push_str(DATA_END);
        out.push_str(HEAD_END);
        out.push_str(BODY_BEGIN);
        out.push_str(CHART_CONTAINER_ID);
        out.push_str(BODY_END);
        out.push_str(FOOTER);

        out
    }
}

// Writing into a String cannot fail, so `fmt::Result`s below are discarded.

fn write_columns(out: &mut String, frame: &DocumentFrame) {
    for column in &frame.columns {
        let _ = writeln!(
            out,
            "\t\tdata.addColumn('{}', '{}');",
            column.header_type, column.name
        );
    }
}

fn write_rows(out: &mut String, frame: &DocumentFrame) {
    out.push_str("\t\tdata.addRows([\n");
    for row in &frame.rows {
        let _ = writeln!(out, "\t\t\t[{}],", row.join(","));
    }
    out.push_str("\t\t]);\n");
}

fn write_options(out: &mut String, frame: &DocumentFrame) {
    for (name, value) in &frame.options {
        let _ = writeln!(out, "\t\t{name}:{value},");
    }
}

#[cfg(test)]
mod tests {
    use super::HtmlRenderer;
    use crate::core::{ChartStyle, HeaderType};
    use crate::render::{ColumnDeclaration, DocumentFrame, DocumentRenderer};

    #[test]
    fn empty_frame_still_renders_full_document() {
        let frame = DocumentFrame {
            style: ChartStyle::Area,
            columns: Vec::new(),
            rows: Vec::new(),
            options: Vec::new(),
        };
        let html = HtmlRenderer.render(&frame);
        assert!(html.starts_with("<html>\n"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("\t\tdata.addRows([\n\t\t]);\n"));
        assert!(html.contains("new google.visualization.AreaChart(document.getElementById('chart_div'))"));
    }

    #[test]
    fn rows_are_comma_joined_without_trailing_separator() {
        let frame = DocumentFrame {
            style: ChartStyle::Line,
            columns: vec![ColumnDeclaration {
                header_type: HeaderType::Number,
                name: "n".to_owned(),
            }],
            rows: vec![vec!["1".to_owned(), "'a'".to_owned()]],
            options: vec![("width".to_owned(), "10".to_owned())],
        };
        let html = HtmlRenderer.render(&frame);
        assert!(html.contains("\t\tdata.addColumn('number', 'n');\n"));
        assert!(html.contains("\t\t\t[1,'a'],\n"));
        assert!(html.contains("\t\twidth:10,\n"));
    }
}
