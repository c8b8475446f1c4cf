//! Chart data derived from a classification run
//!
//! The rendering side only draws what these types hold:
//!
//! - [`LabelCounts`]: bar chart of how many students received each label
//! - [`ClusterScatter`]: raw `uts` against raw `uas`, one series per cluster

use std::collections::BTreeMap;

use crate::{classifier::ClassifiedTable, label::ClassLabel};

/// Number of students per label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCounts {
    /// Labels that occur at least once, most frequent first.
    ///
    /// Ties keep the order of [`ClassLabel::ALL`].
    pub counts: Vec<(ClassLabel, usize)>,
}

impl LabelCounts {
    #[must_use]
    pub fn from_table(table: &ClassifiedTable) -> Self {
        let mut map = BTreeMap::<ClassLabel, usize>::new();
        for record in table.records() {
            *map.entry(record.label).or_default() += 1;
        }
        let mut counts = map.into_iter().collect::<Vec<_>>();
        // stable sort keeps label order for equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Self { counts }
    }

    #[must_use]
    pub fn get(&self, label: ClassLabel) -> usize {
        self.counts
            .iter()
            .find_map(|&(l, count)| (l == label).then_some(count))
            .unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.counts.iter().map(|&(_, count)| count).max().unwrap_or(0)
    }
}

/// Points of one cluster in the scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSeries {
    pub cluster: usize,
    /// `(uts, uas)` pairs
    pub points: Vec<(f64, f64)>,
}

/// Scatter plot of the raw exam scores colored by cluster id.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterScatter {
    /// One series per cluster id `0..K`, including empty ones
    pub series: Vec<ClusterSeries>,
    /// `[min, max]` of the `uts` scores
    pub uts_bounds: [f64; 2],
    /// `[min, max]` of the `uas` scores
    pub uas_bounds: [f64; 2],
}

impl ClusterScatter {
    #[must_use]
    pub fn from_table(table: &ClassifiedTable) -> Self {
        let mut series = (0..table.clusters())
            .map(|cluster| ClusterSeries {
                cluster,
                points: vec![],
            })
            .collect::<Vec<_>>();
        for record in table.records() {
            if let Some(s) = series.get_mut(record.cluster) {
                s.points.push((record.scores.uts, record.scores.uas));
            }
        }

        let bounds = |extract: fn(&(f64, f64)) -> f64| {
            let values = series.iter().flat_map(|s| s.points.iter().map(extract));
            let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
            if min.is_finite() { [min, max] } else { [0.0, 0.0] }
        };
        let uts_bounds = bounds(|p: &(f64, f64)| p.0);
        let uas_bounds = bounds(|p: &(f64, f64)| p.1);

        Self {
            series,
            uts_bounds,
            uas_bounds,
        }
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        classifier::{ClassifierConfig, ScoreClassifier},
        record::StudentTable,
    };

    fn classified(totals: &[&str], clusters: usize) -> ClassifiedTable {
        let rows = totals
            .iter()
            .enumerate()
            .map(|(i, total)| {
                let base = 60 + i * 5;
                vec![base.to_string(), (base + 2).to_string(), (*total).to_owned()]
            })
            .collect();
        let table = StudentTable::new(
            vec!["uts".into(), "uas".into(), "total nilai".into()],
            rows,
        )
        .unwrap();
        ScoreClassifier::new(ClassifierConfig {
            clusters,
            seed: Some(4),
        })
        .classify(&table)
        .unwrap()
    }

    #[test]
    fn test_label_counts_most_frequent_first() {
        let table = classified(&["76,5", "90,0", "60,0", "82,0", "95,0"], 2);
        let counts = LabelCounts::from_table(&table);
        assert_eq!(
            counts.counts,
            vec![
                (ClassLabel::KelasUnggulan, 3),
                (ClassLabel::KelasC, 1),
                (ClassLabel::KelasB, 1),
            ]
        );
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.max(), 3);
        assert_eq!(counts.get(ClassLabel::KelasB), 1);
    }

    #[test]
    fn test_label_counts_skip_absent_labels() {
        let table = classified(&["82,0", "84,0"], 1);
        let counts = LabelCounts::from_table(&table);
        assert_eq!(counts.counts, vec![(ClassLabel::KelasB, 2)]);
        assert_eq!(counts.get(ClassLabel::KelasC), 0);
    }

    #[test]
    fn test_scatter_has_one_series_per_cluster() {
        let table = classified(&["70,0", "75,0", "80,0", "85,0"], 3);
        let scatter = ClusterScatter::from_table(&table);
        assert_eq!(scatter.series.len(), 3);
        assert_eq!(scatter.point_count(), 4);
        assert_eq!(scatter.uts_bounds, [60.0, 75.0]);
        assert_eq!(scatter.uas_bounds, [62.0, 77.0]);
        for (i, series) in scatter.series.iter().enumerate() {
            assert_eq!(series.cluster, i);
        }
    }
}
