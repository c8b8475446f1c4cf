//! Min-max normalization
//!
//! A [`MinMaxScaler`] is fitted on one batch of values and maps that batch
//! into `[0, 1]`. The bounds come only from the batch itself, so the same raw
//! value can land on different scaled values in two different batches.

/// Min-max bounds of a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxScaler {
    /// Smallest value seen while fitting
    pub min: f64,
    /// Largest value seen while fitting
    pub max: f64,
}

impl MinMaxScaler {
    /// Fits the scaler on a batch of values.
    ///
    /// Returns `None` if `values` is empty.
    #[must_use]
    pub fn fit(values: &[f64]) -> Option<Self> {
        let min = values.iter().copied().min_by(f64::total_cmp)?;
        let max = values.iter().copied().max_by(f64::total_cmp)?;
        Some(Self { min, max })
    }

    /// Maps a value into the fitted range.
    ///
    /// A column with zero range maps every value to `0.0`.
    #[must_use]
    pub fn transform(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range == 0.0 {
            0.0
        } else if range.is_finite() {
            (value - self.min) / range
        } else {
            // the span of extreme finite bounds overflows, but half of it does not
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }

    /// Fits on `values` and returns the rescaled column.
    ///
    /// # Examples
    ///
    /// ```
    /// use kelas_stats::scaling::MinMaxScaler;
    ///
    /// let scaled = MinMaxScaler::fit_transform(&[60.0, 70.0, 80.0, 100.0]).unwrap();
    /// assert_eq!(scaled, vec![0.0, 0.25, 0.5, 1.0]);
    /// ```
    #[must_use]
    pub fn fit_transform(values: &[f64]) -> Option<Vec<f64>> {
        let scaler = Self::fit(values)?;
        Some(values.iter().map(|&v| scaler.transform(v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch_cannot_be_fitted() {
        assert!(MinMaxScaler::fit(&[]).is_none());
        assert!(MinMaxScaler::fit_transform(&[]).is_none());
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        let scaled = MinMaxScaler::fit_transform(&[80.0, 80.0, 80.0]).unwrap();
        assert_eq!(scaled, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_bounds_are_reached() {
        let scaled = MinMaxScaler::fit_transform(&[90.0, 65.0, 77.5]).unwrap();
        assert_eq!(scaled, vec![1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_extreme_bounds_stay_in_unit_range() {
        let scaled = MinMaxScaler::fit_transform(&[-1e308, 0.0, 1e308]).unwrap();
        assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
        let scaled = MinMaxScaler::fit_transform(&[f64::MAX, -f64::MAX]).unwrap();
        assert_eq!(scaled, vec![1.0, 0.0]);
    }

    #[test]
    fn test_same_value_scales_differently_per_batch() {
        let first = MinMaxScaler::fit(&[70.0, 80.0, 90.0]).unwrap();
        let second = MinMaxScaler::fit(&[60.0, 80.0, 100.0]).unwrap();
        assert_eq!(first.transform(85.0), 0.75);
        assert_eq!(second.transform(85.0), 0.625);
    }
}
