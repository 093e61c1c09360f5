//! gchart-rs: turn tabular data into self-contained chart documents.
//!
//! Rows are added programmatically or loaded from CSV (cells are typed by
//! inference), validated, and serialized into an HTML page that draws the
//! chart with Google Charts in the browser. Writing or serving the page is
//! left to the caller.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::api::{Chart, ChartConfig, OptionValue};
pub use crate::core::{CellValue, ChartStyle, HeaderType};
pub use crate::error::{ChartError, ChartResult};
