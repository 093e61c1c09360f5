use crate::core::ChartStyle;
use crate::error::{ChartError, ChartResult};

use super::{Chart, OptionValue};

pub const CURVE_TYPE_OPTION: &str = "curveType";
pub const VERTICAL_AXIS_OPTION: &str = "vAxis";

impl Chart {
    /// Smooths line segments into curves. Only valid for line charts.
    pub fn set_curved_line(&mut self) -> ChartResult<()> {
        self.require_style(CURVE_TYPE_OPTION, &[ChartStyle::Line])?;
        self.set_option(CURVE_TYPE_OPTION, OptionValue::text("function"));
        Ok(())
    }

    /// Switches the vertical axis to a logarithmic scale.
    ///
    /// Replaces any previously set `vAxis` option object.
    pub fn set_logarithmic_vertical_axis(&mut self) -> ChartResult<()> {
        self.require_style(
            VERTICAL_AXIS_OPTION,
            &[ChartStyle::Line, ChartStyle::Area, ChartStyle::Column],
        )?;
        self.set_option(VERTICAL_AXIS_OPTION, OptionValue::literal("{logScale: true}"));
        Ok(())
    }

    fn require_style(&self, option: &'static str, allowed: &[ChartStyle]) -> ChartResult<()> {
        let style = self.config.style;
        if allowed.contains(&style) {
            Ok(())
        } else {
            Err(ChartError::IncompatibleStyle { option, style })
        }
    }
}
