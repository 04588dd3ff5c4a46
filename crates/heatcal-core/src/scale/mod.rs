//! Scale primitives mapping data domains onto pixel ranges.
//!
//! Three kinds, matching the three axes of the heatmap: a linear year scale
//! (x), a discrete band scale over the twelve months (y), and a quantize
//! scale from the temperature extent onto palette indices (fill).

mod band;
mod linear;
mod quantize;

pub use band::{MonthScale, MonthTick};
pub use linear::{YearScale, YearTick};
pub use quantize::QuantizeScale;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("scale domain is empty")]
    EmptyDomain,

    #[error("viewport extent {0} must be finite and positive")]
    BadExtent(f64),

    #[error("padding {pad} must be non-negative and less than half the extent {extent}")]
    BadPadding { pad: f64, extent: f64 },

    #[error("quantize domain [{min}, {max}] must be finite with min <= max")]
    BadQuantizeDomain { min: f64, max: f64 },

    #[error("quantize scale needs at least one bucket")]
    ZeroBuckets,
}

/// Shared validation for a padded 1-D pixel range. Returns (start, end).
pub(crate) fn padded_range(
    extent: f64,
    pad_lo: f64,
    pad_hi: f64,
) -> Result<(f64, f64), ScaleError> {
    if !extent.is_finite() || extent <= 0.0 {
        return Err(ScaleError::BadExtent(extent));
    }
    for pad in [pad_lo, pad_hi] {
        if !pad.is_finite() || pad < 0.0 || pad >= extent / 2.0 {
            return Err(ScaleError::BadPadding { pad, extent });
        }
    }
    Ok((pad_lo, extent - pad_hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_range_rejects_oversized_padding() {
        assert!(padded_range(800.0, 60.0, 60.0).is_ok());
        assert_eq!(
            padded_range(800.0, 400.0, 60.0),
            Err(ScaleError::BadPadding { pad: 400.0, extent: 800.0 })
        );
        assert_eq!(
            padded_range(800.0, 60.0, -1.0),
            Err(ScaleError::BadPadding { pad: -1.0, extent: 800.0 })
        );
    }

    #[test]
    fn padded_range_rejects_degenerate_extent() {
        assert_eq!(padded_range(0.0, 0.0, 0.0), Err(ScaleError::BadExtent(0.0)));
        assert!(matches!(
            padded_range(f64::NAN, 0.0, 0.0),
            Err(ScaleError::BadExtent(_))
        ));
    }
}
