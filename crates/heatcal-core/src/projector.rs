//! The projector: dataset + chart geometry -> cells, axis ticks, legend.
//!
//! All chart state lives in one explicit context (`ChartConfig` in,
//! `Projector` out); nothing is global and nothing mutates after
//! construction, so projecting the same dataset twice yields bit-identical
//! output.

use crate::dataset::{Dataset, TemperatureRecord};
use crate::format::{fmt_temp, tooltip_label};
use crate::legend::Legend;
use crate::palette::Palette;
use crate::scale::{MonthScale, MonthTick, QuantizeScale, ScaleError, YearScale, YearTick};

/// Per-side inner padding between the viewport edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn uniform(pad: f64) -> Self {
        Self { left: pad, right: pad, top: pad, bottom: pad }
    }
}

/// Viewport geometry, constructed once and passed explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    /// Year-axis tick interval in years.
    pub year_tick_step: i32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            padding: Padding::uniform(60.0),
            year_tick_step: 10,
        }
    }
}

/// One drawable rectangle, fully resolved: position, size, fill, and the
/// data attributes the presentation layer binds onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub year: i32,
    /// 0-indexed month, matching the upstream `data-month` convention.
    pub month_zero_indexed: u8,
    /// Absolute temperature to one decimal.
    pub temp_label: String,
    /// Hover label: year, month name, absolute temperature, variance.
    pub tooltip: String,
}

/// Complete renderable output for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub cells: Vec<CellGeometry>,
    pub year_ticks: Vec<YearTick>,
    pub month_ticks: Vec<MonthTick>,
    pub legend: Legend,
    pub base_temperature: f64,
}

/// Holds the three fitted scales plus the palette.
#[derive(Debug, Clone)]
pub struct Projector {
    years: YearScale,
    months: MonthScale,
    color: QuantizeScale,
    palette: Palette,
    base_temperature: f64,
}

impl Projector {
    /// Fit all three scales to the dataset within the given viewport.
    pub fn new(dataset: &Dataset, config: &ChartConfig, palette: Palette) -> Result<Self, ScaleError> {
        let pad = config.padding;
        let years = YearScale::fit(
            dataset.records().iter().map(|r| r.year),
            config.width,
            pad.left,
            pad.right,
        )?;
        let months = MonthScale::new(config.height, pad.top, pad.bottom)?;
        let (min_temp, max_temp) = dataset.temp_extent();
        let color = QuantizeScale::new(min_temp, max_temp, palette.len())?;
        Ok(Self {
            years,
            months,
            color,
            palette,
            base_temperature: dataset.base_temperature(),
        })
    }

    /// Project one record into screen space.
    pub fn cell(&self, record: &TemperatureRecord) -> CellGeometry {
        let temp = record.absolute_temp(self.base_temperature);
        CellGeometry {
            x: self.years.position(record.year),
            y: self.months.band(record.month),
            width: self.years.cell_width(),
            height: self.months.bandwidth(),
            fill: self.palette.color(self.color.bucket(temp)).to_owned(),
            year: record.year,
            month_zero_indexed: record.month - 1,
            temp_label: fmt_temp(temp),
            tooltip: tooltip_label(record, self.base_temperature),
        }
    }

    /// Hover label for one record.
    pub fn tooltip(&self, record: &TemperatureRecord) -> String {
        tooltip_label(record, self.base_temperature)
    }

    pub fn year_scale(&self) -> &YearScale {
        &self.years
    }

    pub fn month_scale(&self) -> &MonthScale {
        &self.months
    }

    /// Project the whole dataset: cells in input order plus both axes and
    /// the legend.
    pub fn layout(&self, dataset: &Dataset, config: &ChartConfig) -> ChartLayout {
        ChartLayout {
            cells: dataset.records().iter().map(|r| self.cell(r)).collect(),
            year_ticks: self.years.ticks(config.year_tick_step),
            month_ticks: self.months.ticks(),
            legend: Legend::build(&self.color, &self.palette),
            base_temperature: self.base_temperature,
        }
    }
}

/// Convenience one-shot: fit scales and project in a single call.
pub fn project(
    dataset: &Dataset,
    config: &ChartConfig,
    palette: Palette,
) -> Result<ChartLayout, ScaleError> {
    let projector = Projector::new(dataset, config, palette)?;
    Ok(projector.layout(dataset, config))
}
