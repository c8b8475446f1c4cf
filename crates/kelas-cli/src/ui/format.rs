//! Text formatting shared by the terminal UI and the printed report

use kelas_analysis::classifier::Cell;
use kelas_stats::descriptive::DescriptiveStats;

/// Statistic rows in display order, labelled the way `describe()` output
/// usually is.
pub const SUMMARY_ROWS: [(&str, fn(&DescriptiveStats) -> f64); 8] = [
    ("count", count),
    ("mean", |s| s.mean),
    ("std", |s| s.std_dev),
    ("min", |s| s.min),
    ("25%", |s| s.p25),
    ("50%", |s| s.median),
    ("75%", |s| s.p75),
    ("max", |s| s.max),
];

#[expect(clippy::cast_precision_loss)]
fn count(stats: &DescriptiveStats) -> f64 {
    stats.count as f64
}

pub fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else {
        format!("{value:.6}")
    }
}

/// Formats a table cell; whole numbers are shown without a fraction.
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Number(value) if value.fract() == 0.0 => format!("{value:.0}"),
        Cell::Number(value) => value.to_string(),
        Cell::Text(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(85.0), "85.000000");
        assert_eq!(format_stat(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&Cell::Number(75.0)), "75");
        assert_eq!(format_cell(&Cell::Number(76.5)), "76.5");
        assert_eq!(format_cell(&Cell::Text("Kelas C".into())), "Kelas C");
    }

    #[test]
    fn test_summary_rows_read_stats() {
        let stats = DescriptiveStats::new([70.0, 80.0, 90.0]).unwrap();
        let values = SUMMARY_ROWS
            .iter()
            .map(|(_, extract)| extract(&stats))
            .collect::<Vec<_>>();
        assert_eq!(values, vec![3.0, 80.0, 10.0, 70.0, 75.0, 80.0, 85.0, 90.0]);
    }
}
