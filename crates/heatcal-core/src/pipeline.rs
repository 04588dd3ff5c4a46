//! Fetch-then-project pipeline.
//!
//! The dataset is fetched exactly once; any failure is terminal for the
//! render pass. There is no retry, no timeout, and no partial layout: a
//! failed run produces an error and nothing else.

use thiserror::Error;

use crate::dataset::{Dataset, DatasetError, RawDataset};
use crate::palette::Palette;
use crate::projector::{project, ChartConfig, ChartLayout};
use crate::scale::ScaleError;

/// Where the raw dataset comes from. Implemented over HTTP and local files
/// by the render tool; test code substitutes stub sources.
pub trait DatasetSource {
    fn fetch(&self) -> Result<RawDataset, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed with HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("dataset fetch failed: {0}")]
    Fetch(#[from] SourceError),

    #[error("invalid dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("projection failed: {0}")]
    Project(#[from] ScaleError),
}

/// Fetch, validate, and project in one pass.
pub fn run(
    source: &dyn DatasetSource,
    config: &ChartConfig,
    palette: Palette,
) -> Result<ChartLayout, PipelineError> {
    let raw = source.fetch()?;
    let dataset = Dataset::from_raw(raw)?;
    Ok(project(&dataset, config, palette)?)
}
