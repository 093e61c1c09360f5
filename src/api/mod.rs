mod chart;
mod chart_config;
mod chart_options;
mod csv_loader;

pub use chart::Chart;
pub use chart_config::{ChartConfig, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, OptionValue};
pub use chart_options::{CURVE_TYPE_OPTION, VERTICAL_AXIS_OPTION};
