//! Student score classification for class placement
//!
//! This crate turns an uploaded table of exam scores into proficiency groups.
//!
//! # Overview
//!
//! 1. **Load Table** ([`record::StudentTable`]): header row plus text cells,
//!    with the `uts`, `uas` and `total nilai` columns located by name
//! 2. **Classify** ([`classifier::ScoreClassifier`]): min-max rescale the
//!    three scores, run K-means, and label every student by total score band
//! 3. **Summarize** ([`summary::DatasetSummary`]): descriptive statistics of
//!    the numeric columns of the augmented table
//! 4. **Chart** ([`chart::LabelCounts`], [`chart::ClusterScatter`]): data for
//!    the label bar chart and the cluster scatter plot
//!
//! The band label ([`label::ClassLabel`]) depends only on the total score, not
//! on the cluster the student ends up in.
//!
//! # Example
//!
//! ```
//! use kelas_analysis::{
//!     chart::LabelCounts,
//!     classifier::{ClassifierConfig, ScoreClassifier},
//!     label::ClassLabel,
//!     record::StudentTable,
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let headers = vec!["uts".to_owned(), "uas".to_owned(), "total nilai".to_owned()];
//! let rows = vec![
//!     vec!["75".to_owned(), "78".to_owned(), "76,5".to_owned()],
//!     vec!["80".to_owned(), "84".to_owned(), "82,0".to_owned()],
//!     vec!["92".to_owned(), "88".to_owned(), "90,0".to_owned()],
//! ];
//! let table = StudentTable::new(headers, rows)?;
//!
//! let classifier = ScoreClassifier::new(ClassifierConfig { clusters: 2, seed: Some(1) });
//! let result = classifier.classify(&table)?;
//!
//! assert_eq!(result.records()[0].label, ClassLabel::KelasC);
//! assert_eq!(LabelCounts::from_table(&result).total(), 3);
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod classifier;
pub mod label;
pub mod record;
pub mod summary;
