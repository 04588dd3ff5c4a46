//! Core projection library for the monthly temperature calendar heatmap.
//!
//! Turns (year, month, variance) records into renderable geometry: one
//! rectangle per record with a quantized color class, axis ticks for both
//! axes, and legend swatch/tick data. Everything here is pure and
//! deterministic; fetching and drawing live in the tools.

pub mod dataset;
pub mod format;
pub mod legend;
pub mod palette;
pub mod pipeline;
pub mod projector;
pub mod scale;

pub use dataset::{Dataset, DatasetError, RawDataset, TemperatureRecord};
pub use legend::{Legend, LegendTick};
pub use palette::{Palette, PaletteError};
pub use pipeline::{DatasetSource, PipelineError, SourceError};
pub use projector::{project, CellGeometry, ChartConfig, ChartLayout, Padding, Projector};
pub use scale::{MonthScale, QuantizeScale, ScaleError, YearScale};
