//! Wire format and validated dataset for monthly temperature variances.
//!
//! The upstream JSON carries a single `baseTemperature` plus one record per
//! (year, month) pair. Validation is fail-fast: a dataset either passes all
//! invariant checks at construction or is rejected with a descriptive error,
//! so no NaN or out-of-range value can reach the geometry stage.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One monthly observation: degrees Celsius deviation from the base temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub year: i32,
    /// 1-indexed calendar month (January = 1).
    pub month: u8,
    pub variance: f64,
}

impl TemperatureRecord {
    /// Absolute temperature for this record given the dataset base temperature.
    #[inline]
    pub fn absolute_temp(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// Serde mirror of the upstream JSON body, prior to validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<TemperatureRecord>,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset contains no monthly records")]
    Empty,

    #[error("record {year}/{month}: month out of range 1-12")]
    MonthOutOfRange { year: i32, month: u8 },

    #[error("duplicate record for {year}/{month}")]
    DuplicateEntry { year: i32, month: u8 },

    #[error("record {year}/{month}: variance is not finite")]
    NonFiniteVariance { year: i32, month: u8 },

    #[error("base temperature {0} is not finite")]
    NonFiniteBaseTemperature(f64),
}

/// Validated, immutable dataset. Construction is the only mutation point;
/// every record satisfies `month in 1..=12`, all numbers are finite, and
/// (year, month) pairs are unique.
#[derive(Debug, Clone)]
pub struct Dataset {
    base_temperature: f64,
    records: Vec<TemperatureRecord>,
}

impl Dataset {
    /// Validate a raw dataset. Input order is preserved; the upstream feed is
    /// not guaranteed to be sorted and the projector does not require it.
    pub fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        if !raw.base_temperature.is_finite() {
            return Err(DatasetError::NonFiniteBaseTemperature(raw.base_temperature));
        }
        if raw.monthly_variance.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen: HashSet<(i32, u8)> = HashSet::with_capacity(raw.monthly_variance.len());
        for rec in &raw.monthly_variance {
            if !(1..=12).contains(&rec.month) {
                return Err(DatasetError::MonthOutOfRange { year: rec.year, month: rec.month });
            }
            if !rec.variance.is_finite() {
                return Err(DatasetError::NonFiniteVariance { year: rec.year, month: rec.month });
            }
            if !seen.insert((rec.year, rec.month)) {
                return Err(DatasetError::DuplicateEntry { year: rec.year, month: rec.month });
            }
        }

        Ok(Self {
            base_temperature: raw.base_temperature,
            records: raw.monthly_variance,
        })
    }

    /// Parse and validate a JSON body in one step.
    pub fn from_json(body: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(body)?;
        Self::from_raw(raw)
    }

    #[inline]
    pub fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    #[inline]
    pub fn records(&self) -> &[TemperatureRecord] {
        &self.records
    }

    /// (min, max) over record years.
    pub fn year_extent(&self) -> (i32, i32) {
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for rec in &self.records {
            min = min.min(rec.year);
            max = max.max(rec.year);
        }
        (min, max)
    }

    /// (min, max) over absolute temperatures.
    pub fn temp_extent(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for rec in &self.records {
            let t = rec.absolute_temp(self.base_temperature);
            min = min.min(t);
            max = max.max(t);
        }
        (min, max)
    }
}
