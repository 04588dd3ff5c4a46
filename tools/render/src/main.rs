//! Calendar heatmap renderer: fetches the monthly temperature dataset over
//! HTTP (or reads it from disk), runs the projection pipeline, and writes a
//! standalone SVG document.
//!
//! The dataset is fetched exactly once; any failure aborts the run with a
//! single error report and no output file.

mod svg;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use heatcal_core::dataset::RawDataset;
use heatcal_core::pipeline::{self, DatasetSource, SourceError};
use heatcal_core::{ChartConfig, Padding, Palette};

const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "render",
    about = "Render the monthly global land-surface temperature heatmap to SVG"
)]
struct Args {
    /// Local dataset JSON file; fetched from --url when absent.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Dataset endpoint.
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Output SVG path.
    #[arg(short, long, default_value = "heatmap.svg")]
    output: PathBuf,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 500.0)]
    height: f64,

    /// Uniform inner padding in pixels.
    #[arg(long, default_value_t = 60.0)]
    padding: f64,

    /// Year-axis tick interval in years.
    #[arg(long, default_value_t = 10)]
    year_tick_step: i32,
}

// ── Dataset sources ──────────────────────────────────────────────────────────

struct HttpSource {
    url: String,
}

impl DatasetSource for HttpSource {
    fn fetch(&self) -> Result<RawDataset, SourceError> {
        let response = reqwest::blocking::get(&self.url)
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let body = response
            .text()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}

struct FileSource {
    path: PathBuf,
}

impl DatasetSource for FileSource {
    fn fetch(&self) -> Result<RawDataset, SourceError> {
        let body = fs::read_to_string(&self.path)
            .map_err(|e| SourceError::Transport(format!("{}: {e}", self.path.display())))?;
        Ok(serde_json::from_str(&body)?)
    }
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let config = ChartConfig {
        width: args.width,
        height: args.height,
        padding: Padding::uniform(args.padding),
        year_tick_step: args.year_tick_step,
    };

    let layout = match &args.input {
        Some(path) => {
            eprintln!("Reading dataset from {}…", path.display());
            pipeline::run(&FileSource { path: path.clone() }, &config, Palette::diverging())
        }
        None => {
            eprintln!("Fetching dataset from {}…", args.url);
            pipeline::run(&HttpSource { url: args.url.clone() }, &config, Palette::diverging())
        }
    }
    .context("render pass aborted")?;

    let document = svg::document(&layout, &config);
    fs::write(&args.output, document)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Wrote {} cells to {}", layout.cells.len(), args.output.display());
    Ok(())
}
