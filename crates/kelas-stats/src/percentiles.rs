/// Computes a single percentile value from sorted data.
///
/// This function uses linear interpolation between the two closest ranks.
/// For a dataset with n values, the k-th percentile lies at the fractional
/// position `(n - 1) * k / 100`.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `percentile` - The percentile to compute (0.0 to 100.0)
///
/// # Returns
///
/// The value at the specified percentile. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use kelas_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
///
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 25.0), 1.75);
/// assert_eq!(compute_percentile(&values, 100.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let Some(last) = sorted_values.len().checked_sub(1) else {
        return f64::NAN;
    };
    let position = (last as f64 * percentile.clamp(0.0, 100.0)) / 100.0;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - position.floor();
    let lower_value = sorted_values[lower];
    let upper_value = sorted_values[upper];
    lower_value + (upper_value - lower_value) * fraction
}
