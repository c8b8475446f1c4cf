use crate::percentiles::compute_percentile;

/// Descriptive statistics summarizing a column.
///
/// This structure mirrors the usual tabular "describe" output: the count,
/// central tendency, dispersion and quartiles of a dataset of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The sample standard deviation (`n - 1` denominator).
    ///
    /// `NaN` for a single-value dataset.
    pub std_dev: f64,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The 25th percentile.
    pub p25: f64,
    /// The median (50th percentile).
    pub median: f64,
    /// The 75th percentile.
    pub p75: f64,
    /// The maximum value in the dataset.
    pub max: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values will be collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use kelas_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let std_dev = if count > 1 {
            let sum_sq = sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        } else {
            f64::NAN
        };

        Some(Self {
            count,
            mean,
            std_dev,
            min,
            p25: compute_percentile(sorted_values, 25.0),
            median: compute_percentile(sorted_values, 50.0),
            p75: compute_percentile(sorted_values, 75.0),
            max,
        })
    }
}
