use chrono::{TimeZone, Utc};
use gchart_rs::api::{Chart, OptionValue};
use gchart_rs::core::CellValue;
use gchart_rs::error::ChartError;
use gchart_rs::render::{CHARTS_LOADER_URL, DocumentFrame, DocumentRenderer};

fn dated_amounts() -> Chart {
    let mut chart = Chart::line();
    chart.set_title("TESTING");
    chart.add_header("date", "date").expect("date header");
    chart.add_header("amount", "number").expect("amount header");
    chart.add_row(vec![
        CellValue::coerce("2021-01-01T00:00:00Z"),
        CellValue::coerce("10"),
    ]);
    chart.add_row(vec![
        CellValue::coerce("2021-01-02T00:00:00Z"),
        CellValue::coerce("20"),
    ]);
    chart
}

#[test]
fn columns_and_rows_are_emitted_in_insertion_order() {
    let html = dated_amounts().generate().expect("valid chart");

    assert_eq!(html.matches("data.addColumn(").count(), 2);
    assert_eq!(html.matches("\t\t\t[").count(), 2);

    let date_col = html
        .find("data.addColumn('date', 'date');")
        .expect("date column");
    let amount_col = html
        .find("data.addColumn('number', 'amount');")
        .expect("amount column");
    let first_row = html
        .find("[new Date(2021, 0, 1, 0, 0, 0),10],")
        .expect("first row");
    let second_row = html
        .find("[new Date(2021, 0, 2, 0, 0, 0),20],")
        .expect("second row");

    assert!(date_col < amount_col);
    assert!(amount_col < first_row);
    assert!(first_row < second_row);
}

#[test]
fn document_sections_follow_fixed_order() {
    let html = dated_amounts().generate().expect("valid chart");

    let positions: Vec<usize> = [
        "<html>",
        CHARTS_LOADER_URL,
        "var data = new google.visualization.DataTable();",
        "data.addColumn(",
        "data.addRows([",
        "var options = {",
        "title:'TESTING',",
        "width:900,",
        "height:400,",
        "new google.visualization.LineChart(",
        "chart.draw(data, options);",
        "<body>",
        "</html>",
    ]
    .iter()
    .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn value_literals_follow_their_tag() {
    let mut chart = Chart::column();
    for name in ["i", "f", "b", "s", "d"] {
        chart.add_header(name, "string").expect("header");
    }
    chart.add_row(vec![
        CellValue::Integer(-3),
        CellValue::Float(2.5),
        CellValue::Boolean(false),
        CellValue::from("hi"),
        CellValue::from(
            Utc.with_ymd_and_hms(2020, 12, 31, 23, 59, 58)
                .single()
                .expect("valid date"),
        ),
    ]);

    let html = chart.generate().expect("valid chart");
    assert!(html.contains("\t\t\t[-3,2.500000,'false','hi',new Date(2020, 11, 31, 23, 59, 58)],\n"));
}

#[test]
fn dates_use_wall_clock_of_their_offset() {
    let mut chart = Chart::line();
    chart.add_header("d", "date").expect("header");
    chart.add_row(vec![CellValue::coerce("2021-06-30T22:15:00-05:00")]);

    let html = chart.generate().expect("valid chart");
    assert!(html.contains("[new Date(2021, 5, 30, 22, 15, 0)]"));
}

#[test]
fn text_is_embedded_verbatim() {
    let mut chart = Chart::line();
    chart.set_title("Bob's <chart>");
    chart.add_header("name & co", "string").expect("header");
    chart.add_row(vec![CellValue::from("a\"b")]);

    let html = chart.generate().expect("valid chart");
    assert!(html.contains("title:'Bob's <chart>',"));
    assert!(html.contains("data.addColumn('string', 'name & co');"));
    assert!(html.contains("['a\"b']"));
}

#[test]
fn curved_line_lands_in_options_block() {
    let mut chart = dated_amounts();
    chart.set_curved_line().expect("line accepts curve");

    let html = chart.generate().expect("valid chart");
    let options_start = html.find("var options = {").expect("options block");
    let curve = html.find("\t\tcurveType:'function',\n").expect("curve option");
    let height = html.find("\t\theight:400,\n").expect("height option");
    assert!(options_start < height && height < curve);
}

#[test]
fn extra_options_render_in_insertion_order() {
    let mut chart = dated_amounts();
    chart.set_option("legend", OptionValue::text("none"));
    chart
        .set_logarithmic_vertical_axis()
        .expect("log axis accepted");
    chart.set_option("pointSize", OptionValue::literal("5"));

    let html = chart.generate().expect("valid chart");
    let legend = html.find("\t\tlegend:'none',\n").expect("legend");
    let v_axis = html.find("\t\tvAxis:{logScale: true},\n").expect("vAxis");
    let point_size = html.find("\t\tpointSize:5,\n").expect("pointSize");
    assert!(legend < v_axis && v_axis < point_size);
}

#[test]
fn generate_is_idempotent() {
    let mut chart = dated_amounts();
    chart.set_curved_line().expect("curve");
    chart.set_option("legend", OptionValue::text("bottom"));
    chart.set_option("backgroundColor", OptionValue::text("#fff"));

    let first = chart.generate().expect("first generation");
    let second = chart.generate().expect("second generation");
    assert_eq!(first, second);
}

#[test]
fn validation_errors_are_returned_unchanged() {
    let mut chart = dated_amounts();
    chart.add_row(vec![CellValue::Integer(1)]);

    let err = chart.generate().expect_err("third row mismatches");
    assert!(matches!(
        err,
        ChartError::RowHeaderMismatch {
            row: 2,
            expected: 2,
            actual: 1
        }
    ));

    chart.set_title("");
    let err = chart.generate().expect_err("missing title wins");
    assert!(matches!(err, ChartError::MissingTitle));
}

#[test]
fn empty_chart_still_generates_a_document() {
    let html = Chart::area().generate().expect("defaults are valid");
    assert!(html.contains("\t\tdata.addRows([\n\t\t]);\n"));
    assert!(html.contains("title:'GChart',"));
    assert!(html.contains("new google.visualization.AreaChart("));
}

struct RowCountRenderer;

impl DocumentRenderer for RowCountRenderer {
    fn render(&self, frame: &DocumentFrame) -> String {
        format!(
            "{}:{}x{}:{}",
            frame.style,
            frame.columns.len(),
            frame.rows.len(),
            frame.option("title").unwrap_or_default()
        )
    }
}

#[test]
fn custom_renderer_receives_validated_frame() {
    let chart = dated_amounts();
    let out = chart
        .generate_with(&RowCountRenderer)
        .expect("custom render");
    assert_eq!(out, "LineChart:2x2:'TESTING'");

    let mut broken = chart;
    broken.set_height(0);
    let err = broken
        .generate_with(&RowCountRenderer)
        .expect_err("validation runs first");
    assert!(matches!(err, ChartError::MissingHeight));
}
