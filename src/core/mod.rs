pub mod types;
pub mod validation;
pub mod value;

pub use types::{ChartStyle, Header, HeaderType, Row};
pub use validation::validate_chart_structure;
pub use value::{CellValue, UNIX_DATE_FORMAT};
