//! Quantize scale: continuous temperature range onto discrete bucket indices.

use super::ScaleError;

/// Equal-width bucketing of `[min, max]` into `bucket_count` intervals.
///
/// The top interval is closed: a value equal to `max` lands in the last
/// bucket, never out of range. A degenerate domain (`min == max`) maps every
/// value to bucket 0 without dividing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizeScale {
    min: f64,
    max: f64,
    bucket_count: usize,
}

impl QuantizeScale {
    pub fn new(min: f64, max: f64, bucket_count: usize) -> Result<Self, ScaleError> {
        if bucket_count == 0 {
            return Err(ScaleError::ZeroBuckets);
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ScaleError::BadQuantizeDomain { min, max });
        }
        Ok(Self { min, max, bucket_count })
    }

    /// Bucket index in `[0, bucket_count)` for `value`. Values outside the
    /// domain clamp to the first or last bucket.
    #[inline]
    pub fn bucket(&self, value: f64) -> usize {
        if self.max == self.min {
            return 0;
        }
        let t = (value - self.min) / (self.max - self.min);
        // `as usize` saturates at 0 for negative t; min() closes the top.
        ((t * self.bucket_count as f64) as usize).min(self.bucket_count - 1)
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    #[inline]
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// The `bucket_count + 1` evenly spaced boundary values from `min` to
    /// `max` inclusive.
    pub fn thresholds(&self) -> Vec<f64> {
        let step = (self.max - self.min) / self.bucket_count as f64;
        (0..=self.bucket_count)
            .map(|i| {
                if i == self.bucket_count {
                    self.max // avoid accumulated rounding on the top boundary
                } else {
                    self.min + step * i as f64
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn extent_endpoints_map_to_first_and_last_bucket() {
        let scale = QuantizeScale::new(6.437, 7.294, 9).unwrap();
        assert_eq!(scale.bucket(6.437), 0);
        assert_eq!(scale.bucket(7.294), 8);
    }

    #[test]
    fn two_buckets_split_at_midpoint() {
        // base 8.66 with variances -1.366 / -2.223: absolute temps 7.294 and
        // 6.437, midpoint 6.8655.
        let scale = QuantizeScale::new(6.437, 7.294, 2).unwrap();
        assert_eq!(scale.bucket(7.294), 1);
        assert_eq!(scale.bucket(6.437), 0);
        assert_eq!(scale.bucket(6.87), 1);
        assert_eq!(scale.bucket(6.86), 0);
    }

    #[test]
    fn degenerate_domain_short_circuits_to_bucket_zero() {
        let scale = QuantizeScale::new(8.66, 8.66, 5).unwrap();
        assert_eq!(scale.bucket(8.66), 0);
        assert_eq!(scale.bucket(100.0), 0);
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let scale = QuantizeScale::new(0.0, 10.0, 4);
        let scale = scale.unwrap();
        assert_eq!(scale.bucket(-5.0), 0);
        assert_eq!(scale.bucket(15.0), 3);
    }

    #[test]
    fn thresholds_are_evenly_spaced_and_inclusive() {
        let scale = QuantizeScale::new(2.0, 12.0, 5).unwrap();
        let t = scale.thresholds();
        assert_eq!(t.len(), 6);
        assert_relative_eq!(t[0], 2.0);
        assert_relative_eq!(t[5], 12.0);
        for pair in t.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 2.0);
        }
    }

    #[test]
    fn invalid_construction_is_rejected() {
        assert_eq!(QuantizeScale::new(0.0, 1.0, 0), Err(ScaleError::ZeroBuckets));
        assert!(matches!(
            QuantizeScale::new(2.0, 1.0, 3),
            Err(ScaleError::BadQuantizeDomain { .. })
        ));
        assert!(matches!(
            QuantizeScale::new(f64::NAN, 1.0, 3),
            Err(ScaleError::BadQuantizeDomain { .. })
        ));
    }
}
