//! K-means partitioning
//!
//! [`KMeans`] partitions fixed-width points into a requested number of
//! groups. Initial centroids are chosen with k-means++ seeding, then refined
//! with Lloyd iterations until the centroids stop moving or the iteration
//! limit is reached.
//!
//! # Convergence
//!
//! The run stops when the total squared centroid shift of an iteration is at
//! most [`TOLERANCE`] `* mean_variance`, where `mean_variance` is the mean of the
//! per-dimension variances of the input. This makes the tolerance independent
//! of the scale of the data.
//!
//! # Empty clusters
//!
//! A centroid that loses all of its points is moved onto the point that lies
//! farthest from its own centroid, so every run reports exactly `clusters`
//! centroids.

use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64;

/// Iteration limit for a single run
pub const MAX_ITERATIONS: usize = 300;

/// Relative convergence tolerance
pub const TOLERANCE: f64 = 1e-4;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum KMeansError {
    #[display("number of clusters must be at least 1")]
    ZeroClusters,
    #[display("n_samples={samples} should be >= n_clusters={clusters}")]
    TooFewSamples { samples: usize, clusters: usize },
}

/// K-means configuration.
///
/// # Example
///
/// ```
/// use kelas_stats::kmeans::KMeans;
///
/// let points = [[1.0], [1.2], [0.9], [8.0], [8.3]];
/// let fit = KMeans::new(2).with_seed(42).fit(&points).unwrap();
///
/// assert_eq!(fit.centroids.len(), 2);
/// assert_eq!(fit.assignments.len(), points.len());
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    clusters: usize,
    seed: Option<u64>,
}

/// Result of a K-means run.
#[derive(Debug, Clone)]
pub struct KMeansFit<const N: usize> {
    /// Final centroid of each cluster, indexed by cluster id
    pub centroids: Vec<[f64; N]>,
    /// Cluster id of each input point, in input order
    pub assignments: Vec<usize>,
    /// Sum of squared distances of points to their centroid
    pub inertia: f64,
    /// Number of Lloyd iterations performed
    pub iterations: usize,
}

impl KMeans {
    /// Creates a configuration for `clusters` groups.
    #[must_use]
    pub fn new(clusters: usize) -> Self {
        Self {
            clusters,
            seed: None,
        }
    }

    /// Fixes the random seed so that runs are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Like [`Self::with_seed`], but leaves the seed unset for `None`.
    #[must_use]
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Partitions `points` into the configured number of clusters.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::ZeroClusters`] if zero clusters were requested,
    /// and [`KMeansError::TooFewSamples`] if there are fewer points than clusters.
    pub fn fit<const N: usize>(&self, points: &[[f64; N]]) -> Result<KMeansFit<N>, KMeansError> {
        let k = self.clusters;
        if k == 0 {
            return Err(KMeansError::ZeroClusters);
        }
        if points.len() < k {
            return Err(KMeansError::TooFewSamples {
                samples: points.len(),
                clusters: k,
            });
        }

        let mut rng = match self.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::seed_from_u64(rand::rng().random()),
        };

        let threshold = TOLERANCE * mean_variance(points);
        let mut centroids = init_plus_plus(points, k, &mut rng);
        let mut assignments = vec![0; points.len()];
        let mut iterations = 0;

        while iterations < MAX_ITERATIONS {
            iterations += 1;
            assign_nearest(points, &centroids, &mut assignments);
            let updated = update_centroids(points, &centroids, &assignments);
            let shift = centroids
                .iter()
                .zip(&updated)
                .map(|(old, new)| distance_sq(old, new))
                .sum::<f64>();
            centroids = updated;
            if shift <= threshold {
                break;
            }
        }

        assign_nearest(points, &centroids, &mut assignments);
        let inertia: f64 = points
            .iter()
            .zip(&assignments)
            .map(|(point, &cluster)| distance_sq(point, &centroids[cluster]))
            .sum();

        tracing::debug!(clusters = k, iterations, inertia, "k-means finished");

        Ok(KMeansFit {
            centroids,
            assignments,
            inertia,
            iterations,
        })
    }
}

impl<const N: usize> KMeansFit<N> {
    /// Returns the id of the centroid nearest to `point`.
    #[must_use]
    pub fn predict(&self, point: &[f64; N]) -> usize {
        nearest(point, &self.centroids).0
    }
}

/// k-means++ seeding: each further centroid is drawn with probability
/// proportional to its squared distance from the nearest chosen centroid.
fn init_plus_plus<const N: usize, R>(points: &[[f64; N]], k: usize, rng: &mut R) -> Vec<[f64; N]>
where
    R: Rng,
{
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.random_range(0..points.len())]);
    let mut closest = points
        .iter()
        .map(|p| distance_sq(p, &centroids[0]))
        .collect::<Vec<_>>();

    while centroids.len() < k {
        let total = closest.iter().sum::<f64>();
        let chosen = if total > 0.0 {
            let mut target = rng.random::<f64>() * total;
            let mut chosen = closest.iter().rposition(|&d| d > 0.0).unwrap_or(0);
            for (i, &d) in closest.iter().enumerate() {
                if target < d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            chosen
        } else {
            // all points coincide with a chosen centroid
            rng.random_range(0..points.len())
        };

        let centroid = points[chosen];
        for (d, p) in closest.iter_mut().zip(points) {
            *d = d.min(distance_sq(p, &centroid));
        }
        centroids.push(centroid);
    }

    centroids
}

fn assign_nearest<const N: usize>(
    points: &[[f64; N]],
    centroids: &[[f64; N]],
    assignments: &mut [usize],
) {
    for (point, assignment) in points.iter().zip(assignments) {
        *assignment = nearest(point, centroids).0;
    }
}

#[expect(clippy::cast_precision_loss)]
fn update_centroids<const N: usize>(
    points: &[[f64; N]],
    previous: &[[f64; N]],
    assignments: &[usize],
) -> Vec<[f64; N]> {
    let k = previous.len();
    let mut sums = vec![[0.0; N]; k];
    let mut counts = vec![0_usize; k];
    for (point, &cluster) in points.iter().zip(assignments) {
        for (sum, value) in sums[cluster].iter_mut().zip(point) {
            *sum += value;
        }
        counts[cluster] += 1;
    }

    // points ordered from farthest to nearest to their own centroid
    let mut far_points = (0..points.len()).collect::<Vec<_>>();
    far_points.sort_by(|&a, &b| {
        let da = distance_sq(&points[a], &previous[assignments[a]]);
        let db = distance_sq(&points[b], &previous[assignments[b]]);
        db.total_cmp(&da)
    });
    let mut far_points = far_points.into_iter();

    sums.into_iter()
        .zip(counts)
        .zip(previous)
        .map(|((sum, count), previous)| {
            if count > 0 {
                sum.map(|s| s / count as f64)
            } else {
                far_points
                    .next()
                    .map_or(*previous, |index| points[index])
            }
        })
        .collect()
}

fn nearest<const N: usize>(point: &[f64; N], centroids: &[[f64; N]]) -> (usize, f64) {
    centroids
        .iter()
        .map(|centroid| distance_sq(point, centroid))
        .enumerate()
        .fold((0, f64::INFINITY), |best, (i, d)| {
            if d < best.1 { (i, d) } else { best }
        })
}

fn distance_sq<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

#[expect(clippy::cast_precision_loss)]
fn mean_variance<const N: usize>(points: &[[f64; N]]) -> f64 {
    if N == 0 || points.is_empty() {
        return 0.0;
    }
    let n = points.len() as f64;
    (0..N)
        .map(|dim| {
            let mean = points.iter().map(|p| p[dim]).sum::<f64>() / n;
            points.iter().map(|p| (p[dim] - mean).powi(2)).sum::<f64>() / n
        })
        .sum::<f64>()
        / N as f64
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn two_blobs() -> Vec<[f64; 2]> {
        vec![
            [0.0, 0.0],
            [0.1, 0.2],
            [0.2, 0.1],
            [0.15, 0.05],
            [5.0, 5.0],
            [5.2, 4.9],
            [4.9, 5.1],
            [5.1, 5.2],
        ]
    }

    #[test]
    fn test_zero_clusters_is_rejected() {
        let err = KMeans::new(0).fit(&two_blobs()).unwrap_err();
        assert!(matches!(err, KMeansError::ZeroClusters));
    }

    #[test]
    fn test_more_clusters_than_points_is_rejected() {
        let points = [[1.0, 2.0], [3.0, 4.0]];
        let err = KMeans::new(3).fit(&points).unwrap_err();
        assert!(matches!(
            err,
            KMeansError::TooFewSamples {
                samples: 2,
                clusters: 3
            }
        ));
        assert_eq!(err.to_string(), "n_samples=2 should be >= n_clusters=3");
    }

    #[test]
    fn test_single_cluster_assigns_everything_to_zero() {
        let points = two_blobs();
        let fit = KMeans::new(1).with_seed(1).fit(&points).unwrap();
        assert!(fit.assignments.iter().all(|&c| c == 0));
        assert_eq!(fit.centroids.len(), 1);
        let mean_x = points.iter().map(|p| p[0]).sum::<f64>() / 8.0;
        assert!((fit.centroids[0][0] - mean_x).abs() < 1e-9);
    }

    #[test]
    fn test_separates_distant_blobs() {
        let points = two_blobs();
        let fit = KMeans::new(2).with_seed(3).fit(&points).unwrap();
        let first = fit.assignments[0];
        assert!(fit.assignments[..4].iter().all(|&c| c == first));
        assert!(fit.assignments[4..].iter().all(|&c| c != first));
        assert!(fit.inertia < 1.0);
    }

    #[test]
    fn test_assignments_are_in_range_for_every_k() {
        let points = (0..12)
            .map(|i| [f64::from(i) * 0.7, f64::from(i % 4)])
            .collect::<Vec<_>>();
        for k in 1..=10 {
            let fit = KMeans::new(k).with_seed(11).fit(&points).unwrap();
            assert!((1..=MAX_ITERATIONS).contains(&fit.iterations), "k={k}");
            assert_eq!(fit.assignments.len(), points.len());
            assert_eq!(fit.centroids.len(), k);
            assert!(fit.assignments.iter().all(|&c| c < k), "k={k}");
        }
    }

    #[test]
    fn test_as_many_clusters_as_distinct_points() {
        let points = [[0.0], [1.0], [2.0], [3.0]];
        let fit = KMeans::new(4).with_seed(5).fit(&points).unwrap();
        let distinct = fit.assignments.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), 4);
        assert!(fit.inertia.abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_points_still_yield_valid_ids() {
        let points = [[1.0, 1.0]; 5];
        let fit = KMeans::new(3).with_seed(9).fit(&points).unwrap();
        assert_eq!(fit.centroids.len(), 3);
        assert!(fit.assignments.iter().all(|&c| c < 3));
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let points = two_blobs();
        let a = KMeans::new(3).with_seed(21).fit(&points).unwrap();
        let b = KMeans::new(3).with_seed(21).fit(&points).unwrap();
        assert_eq!(a.assignments, b.assignments);
        assert_eq!(a.centroids, b.centroids);
    }

    #[test]
    fn test_predict_matches_assignments() {
        let points = two_blobs();
        let fit = KMeans::new(2).with_seed(8).fit(&points).unwrap();
        for (point, &cluster) in points.iter().zip(&fit.assignments) {
            assert_eq!(fit.predict(point), cluster);
        }
    }
}
