//! Legend data: one swatch per palette class, boundary ticks between them.

use crate::format::fmt_temp;
use crate::palette::Palette;
use crate::scale::QuantizeScale;

/// A boundary value between two legend swatches (or at either end).
#[derive(Debug, Clone, PartialEq)]
pub struct LegendTick {
    pub value: f64,
    /// Display form, rounded to one decimal.
    pub label: String,
}

/// Everything the presentation layer needs to draw the legend: swatch colors
/// in class order and `colors.len() + 1` boundary ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub colors: Vec<String>,
    pub ticks: Vec<LegendTick>,
}

impl Legend {
    pub fn build(scale: &QuantizeScale, palette: &Palette) -> Self {
        let ticks = scale
            .thresholds()
            .into_iter()
            .map(|value| LegendTick { label: fmt_temp(value), value })
            .collect();
        Self { colors: palette.colors().to_vec(), ticks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn legend_has_one_more_tick_than_swatch() {
        let palette = Palette::diverging();
        let scale = QuantizeScale::new(1.684, 13.888, palette.len()).unwrap();
        let legend = Legend::build(&scale, &palette);
        assert_eq!(legend.colors.len(), 9);
        assert_eq!(legend.ticks.len(), 10);
        assert_relative_eq!(legend.ticks[0].value, 1.684);
        assert_relative_eq!(legend.ticks[9].value, 13.888);
        assert_eq!(legend.ticks[0].label, "1.7");
        assert_eq!(legend.ticks[9].label, "13.9");
    }
}
