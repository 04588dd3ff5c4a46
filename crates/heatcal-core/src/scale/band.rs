//! Discrete band scale over the twelve months for the y axis.

use crate::format::month_name;

use super::{padded_range, ScaleError};

pub const MONTHS: u8 = 12;

/// Splits the padded vertical range into twelve equal contiguous bands,
/// January on top. All bands share one bandwidth and together cover
/// `[top_pad, height - bottom_pad]` exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthScale {
    range_start: f64,
    bandwidth: f64,
}

/// A labelled tick on the month axis, positioned at the band center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTick {
    pub month: u8,
    pub label: &'static str,
    pub center: f64,
}

impl MonthScale {
    pub fn new(height: f64, top_pad: f64, bottom_pad: f64) -> Result<Self, ScaleError> {
        let (range_start, range_end) = padded_range(height, top_pad, bottom_pad)?;
        Ok(Self {
            range_start,
            bandwidth: (range_end - range_start) / f64::from(MONTHS),
        })
    }

    /// Top offset of the band for `month` (1-indexed). The caller passes
    /// validated months; out-of-range input extrapolates linearly rather
    /// than panicking.
    #[inline]
    pub fn band(&self, month: u8) -> f64 {
        self.range_start + (f64::from(month) - 1.0) * self.bandwidth
    }

    #[inline]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Month-name ticks centered within each band, January first.
    pub fn ticks(&self) -> Vec<MonthTick> {
        (1..=MONTHS)
            .map(|month| MonthTick {
                month,
                label: month_name(month),
                center: self.band(month) + self.bandwidth / 2.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bands_cover_padded_range_without_gaps() {
        let scale = MonthScale::new(500.0, 60.0, 60.0).unwrap();
        assert_relative_eq!(scale.band(1), 60.0);
        for month in 1..MONTHS {
            // Next band starts where the previous one ends.
            assert_relative_eq!(scale.band(month) + scale.bandwidth(), scale.band(month + 1));
        }
        assert_relative_eq!(scale.band(MONTHS) + scale.bandwidth(), 440.0);
    }

    #[test]
    fn bandwidth_is_one_twelfth_of_padded_height() {
        let scale = MonthScale::new(500.0, 60.0, 60.0).unwrap();
        assert_relative_eq!(scale.bandwidth(), 380.0 / 12.0);
    }

    #[test]
    fn ticks_ascend_from_january() {
        let scale = MonthScale::new(500.0, 60.0, 60.0).unwrap();
        let ticks = scale.ticks();
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0].label, "January");
        assert_eq!(ticks[11].label, "December");
        for pair in ticks.windows(2) {
            assert!(pair[0].center < pair[1].center);
        }
        assert_relative_eq!(ticks[0].center, 60.0 + 380.0 / 24.0);
    }

    #[test]
    fn oversized_padding_is_rejected() {
        assert!(matches!(
            MonthScale::new(500.0, 300.0, 60.0),
            Err(ScaleError::BadPadding { .. })
        ));
    }
}
