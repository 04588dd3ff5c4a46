//! Linear year scale for the x axis.

use super::{padded_range, ScaleError};

/// Maps the year domain `[min_year, max_year]` linearly onto the padded pixel
/// range `[left_pad, width - right_pad]`.
///
/// `position(min_year)` lands exactly on the range start and
/// `position(max_year)` exactly on the range end; one cell width separates
/// consecutive years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearScale {
    min_year: i32,
    max_year: i32,
    range_start: f64,
    cell_width: f64,
}

/// A labelled tick on the year axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearTick {
    pub year: i32,
    pub x: f64,
}

impl YearScale {
    /// Fit the scale to the years present in the dataset.
    ///
    /// A single-year domain has no defined per-year step; the cell width then
    /// falls back to the full padded span so the lone column stays visible.
    pub fn fit<I>(years: I, width: f64, left_pad: f64, right_pad: f64) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = i32>,
    {
        let (range_start, range_end) = padded_range(width, left_pad, right_pad)?;

        let mut min_year = i32::MAX;
        let mut max_year = i32::MIN;
        let mut seen = false;
        for year in years {
            min_year = min_year.min(year);
            max_year = max_year.max(year);
            seen = true;
        }
        if !seen {
            return Err(ScaleError::EmptyDomain);
        }

        let span = range_end - range_start;
        let cell_width = if max_year > min_year {
            span / f64::from(max_year - min_year)
        } else {
            span
        };

        Ok(Self { min_year, max_year, range_start, cell_width })
    }

    /// Pixel x-position for a year. Monotonic non-decreasing over the domain.
    #[inline]
    pub fn position(&self, year: i32) -> f64 {
        if self.max_year == self.min_year {
            return self.range_start;
        }
        self.range_start + f64::from(year - self.min_year) * self.cell_width
    }

    /// Horizontal extent of one year column.
    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    #[inline]
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    #[inline]
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Ticks at multiples of `step` years within the domain, in ascending
    /// order. `step` below 1 is treated as 1.
    pub fn ticks(&self, step: i32) -> Vec<YearTick> {
        let step = step.max(1);
        let first = self.min_year + (step - self.min_year.rem_euclid(step)) % step;
        (first..=self.max_year)
            .step_by(step as usize)
            .map(|year| YearTick { year, x: self.position(year) })
            .collect()
    }
}
