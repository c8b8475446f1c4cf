//! Score classification
//!
//! [`ScoreClassifier`] runs one analysis over a [`StudentTable`]:
//!
//! 1. Parse the `uts`, `uas` and `total nilai` columns
//!    (the total uses `,` as decimal separator)
//! 2. Rescale each of the three columns independently into `[0, 1]` with
//!    min-max bounds taken from this table only
//! 3. Partition the rescaled points with K-means into the requested number of
//!    clusters
//! 4. Label every student from the raw total score with [`ClassLabel::from_total`]
//!
//! The label and the cluster id are computed independently of each other.
//!
//! A table that already carries [`CLUSTER_COLUMN`] or [`LABEL_COLUMN`] (a
//! previously exported result) has those columns overwritten in place.
//! Missing ones are appended after the uploaded columns.
//! Because the min-max bounds come from the current table, two different
//! uploads may rescale the same raw score to different values.

use kelas_stats::{
    kmeans::{KMeans, KMeansError},
    scaling::MinMaxScaler,
};

use crate::{
    label::ClassLabel,
    record::{self, ScoreColumns, StudentScores, StudentTable, TableError},
};

/// Column name of the cluster id in the augmented table
pub const CLUSTER_COLUMN: &str = "Cluster";
/// Column name of the class label in the augmented table
pub const LABEL_COLUMN: &str = "Cluster Name";

/// Smallest cluster count accepted by the input controls
pub const MIN_CLUSTERS: usize = 1;
/// Largest cluster count accepted by the input controls
pub const MAX_CLUSTERS: usize = 10;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ClassifyError {
    #[display("{_0}")]
    Table(TableError),
    #[display("table has no student rows")]
    Empty,
    #[display("clustering failed: {_0}")]
    Cluster(KMeansError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Number of clusters (K)
    pub clusters: usize,
    /// Seed for K-means; `None` draws a fresh seed per run
    pub seed: Option<u64>,
}

/// A single cell of the augmented table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Interprets an uploaded text cell: plain numbers become [`Cell::Number`].
    #[must_use]
    pub fn from_raw(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            _ => Self::Text(text.to_owned()),
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

/// A student row after classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    /// Original text cells, in header order
    pub fields: Vec<String>,
    /// Parsed scores
    pub scores: StudentScores,
    /// Rescaled `(uts, uas, total)` fed to K-means
    pub scaled: [f64; 3],
    /// Cluster id in `0..clusters`
    pub cluster: usize,
    /// Band label from the total score
    pub label: ClassLabel,
}

/// Result of one classification run.
#[derive(Debug, Clone)]
pub struct ClassifiedTable {
    headers: Vec<String>,
    columns: ScoreColumns,
    /// Uploaded column overwritten with the cluster id
    cluster_column: Option<usize>,
    /// Uploaded column overwritten with the label
    label_column: Option<usize>,
    records: Vec<ClassifiedRecord>,
    clusters: usize,
    inertia: f64,
    iterations: usize,
}

#[derive(Debug, Clone)]
pub struct ScoreClassifier {
    config: ClassifierConfig,
}

impl ScoreClassifier {
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classifies every student of `table`.
    ///
    /// # Errors
    ///
    /// Fails without a partial result if a score column is missing or a score
    /// cannot be parsed, if the table is empty, or if K-means rejects the
    /// cluster count (zero, or more clusters than students).
    pub fn classify(&self, table: &StudentTable) -> Result<ClassifiedTable, ClassifyError> {
        let columns = table.score_columns()?;
        let scores = table.scores()?;
        if scores.is_empty() {
            return Err(ClassifyError::Empty);
        }

        let scaled = rescale(&scores);
        let fit = KMeans::new(self.config.clusters)
            .with_optional_seed(self.config.seed)
            .fit(&scaled)?;

        tracing::info!(
            students = scores.len(),
            clusters = self.config.clusters,
            iterations = fit.iterations,
            inertia = fit.inertia,
            "classified students"
        );

        let records = table
            .rows()
            .iter()
            .zip(scores)
            .zip(scaled)
            .zip(&fit.assignments)
            .map(|(((fields, scores), scaled), &cluster)| ClassifiedRecord {
                fields: fields.clone(),
                scores,
                scaled,
                cluster,
                label: ClassLabel::from_total(scores.total),
            })
            .collect();

        Ok(ClassifiedTable {
            headers: table.headers().to_vec(),
            columns,
            cluster_column: record::find_column(table.headers(), CLUSTER_COLUMN),
            label_column: record::find_column(table.headers(), LABEL_COLUMN),
            records,
            clusters: self.config.clusters,
            inertia: fit.inertia,
            iterations: fit.iterations,
        })
    }
}

/// Min-max rescales each score column on its own.
fn rescale(scores: &[StudentScores]) -> Vec<[f64; 3]> {
    let column = |extract: fn(&StudentScores) -> f64| {
        let values = scores.iter().map(extract).collect::<Vec<_>>();
        MinMaxScaler::fit_transform(&values).unwrap_or_default()
    };
    let uts = column(|s: &StudentScores| s.uts);
    let uas = column(|s: &StudentScores| s.uas);
    let total = column(|s: &StudentScores| s.total);
    uts.into_iter()
        .zip(uas)
        .zip(total)
        .map(|((uts, uas), total)| [uts, uas, total])
        .collect()
}

impl ClassifiedTable {
    /// Original headers of the uploaded table.
    #[must_use]
    pub fn source_headers(&self) -> &[String] {
        &self.headers
    }

    /// Headers of the augmented table.
    ///
    /// The original columns come first. [`CLUSTER_COLUMN`] and [`LABEL_COLUMN`]
    /// replace an uploaded column of the same name, or are appended.
    #[must_use]
    pub fn headers(&self) -> Vec<String> {
        let mut headers = self.headers.clone();
        for (column, name) in [
            (self.cluster_column, CLUSTER_COLUMN),
            (self.label_column, LABEL_COLUMN),
        ] {
            place(&mut headers, column, name.to_owned());
        }
        headers
    }

    #[must_use]
    pub fn columns(&self) -> ScoreColumns {
        self.columns
    }

    #[must_use]
    pub fn records(&self) -> &[ClassifiedRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Requested cluster count (K).
    #[must_use]
    pub fn clusters(&self) -> usize {
        self.clusters
    }

    #[must_use]
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the augmented rows as typed cells, in [`Self::headers`] order.
    ///
    /// Score columns hold the parsed values, so the total appears as a number
    /// rather than as the original comma-formatted text.
    #[expect(clippy::cast_precision_loss)]
    pub fn output_rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        self.records.iter().map(|record| {
            let mut row = record
                .fields
                .iter()
                .enumerate()
                .map(|(index, text)| match self.columns.name_of(index) {
                    Some(_) if index == self.columns.uts => Cell::Number(record.scores.uts),
                    Some(_) if index == self.columns.uas => Cell::Number(record.scores.uas),
                    Some(_) => Cell::Number(record.scores.total),
                    None => Cell::from_raw(text),
                })
                .collect::<Vec<_>>();
            place(&mut row, self.cluster_column, Cell::Number(record.cluster as f64));
            place(
                &mut row,
                self.label_column,
                Cell::Text(record.label.as_str().to_owned()),
            );
            row
        })
    }
}

/// Overwrites `row[index]`, or appends when there is no such column.
fn place<T>(row: &mut Vec<T>, index: Option<usize>, value: T) {
    match index.and_then(|index| row.get_mut(index)) {
        Some(slot) => *slot = value,
        None => row.push(value),
    }
}
