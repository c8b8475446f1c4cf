//! Numeric building blocks for the class placement tool.
//!
//! This crate provides the small set of numeric tools the score classifier
//! is built from:
//!
//! - **Descriptive statistics**: count, mean, standard deviation, quartiles
//! - **Percentiles**: linear-interpolation percentiles over sorted data
//! - **Min-max scaling**: per-column rescaling into `[0, 1]`
//! - **K-means**: k-means++ seeded Lloyd iterations over fixed-width points
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing a column
//! - [`percentiles`]: Percentile computation
//! - [`scaling`]: Min-max normalization fitted on a single batch
//! - [`kmeans`]: K-means partitioning
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use kelas_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.count, 5);
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.p25, 2.0);
//! ```
//!
//! ## Rescaling a column
//!
//! ```
//! use kelas_stats::scaling::MinMaxScaler;
//!
//! let scaled = MinMaxScaler::fit_transform(&[50.0, 75.0, 100.0]).unwrap();
//! assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
//! ```
//!
//! ## Partitioning points
//!
//! ```
//! use kelas_stats::kmeans::KMeans;
//!
//! let points = [[0.0, 0.0], [0.1, 0.0], [5.0, 5.0], [5.1, 5.0]];
//! let fit = KMeans::new(2).with_seed(7).fit(&points).unwrap();
//! assert_eq!(fit.assignments[0], fit.assignments[1]);
//! assert_ne!(fit.assignments[0], fit.assignments[2]);
//! ```

pub mod descriptive;
pub mod kmeans;
pub mod percentiles;
pub mod scaling;
