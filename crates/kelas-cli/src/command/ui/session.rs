//! State of the analysis page, independent of the terminal

use std::path::{Path, PathBuf};

use anyhow::Context;
use kelas_analysis::{
    chart::{ClusterScatter, LabelCounts},
    classifier::{ClassifiedTable, ClassifierConfig, MAX_CLUSTERS, MIN_CLUSTERS, ScoreClassifier},
    record::StudentTable,
    summary::DatasetSummary,
};

use crate::{content, util, workbook};

/// Everything displayed after one classification run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub table: ClassifiedTable,
    pub summary: DatasetSummary,
    pub counts: LabelCounts,
    pub scatter: ClusterScatter,
}

impl AnalysisResult {
    fn new(table: ClassifiedTable) -> Self {
        let summary = DatasetSummary::describe(&table);
        let counts = LabelCounts::from_table(&table);
        let scatter = ClusterScatter::from_table(&table);
        Self {
            table,
            summary,
            counts,
            scatter,
        }
    }
}

#[derive(Debug)]
pub struct AnalysisSession {
    input_path: Option<PathBuf>,
    table: Option<StudentTable>,
    clusters: usize,
    seed: Option<u64>,
    export_path: PathBuf,
    result: Option<AnalysisResult>,
}

impl AnalysisSession {
    pub fn new(clusters: usize, seed: Option<u64>, export_path: Option<PathBuf>) -> Self {
        Self {
            input_path: None,
            table: None,
            clusters: clusters.clamp(MIN_CLUSTERS, MAX_CLUSTERS),
            seed,
            export_path: export_path.unwrap_or_else(|| PathBuf::from(workbook::DEFAULT_EXPORT_FILE)),
            result: None,
        }
    }

    pub fn input_path(&self) -> Option<&Path> {
        self.input_path.as_deref()
    }

    pub fn table(&self) -> Option<&StudentTable> {
        self.table.as_ref()
    }

    pub fn clusters(&self) -> usize {
        self.clusters
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Reads the CSV at `path`, replacing the loaded table.
    ///
    /// On failure the previously loaded table stays in place.
    pub fn load(&mut self, path: &Path) -> anyhow::Result<&StudentTable> {
        let table = util::read_student_csv(path)?;
        self.input_path = Some(path.to_owned());
        self.result = None;
        Ok(self.table.insert(table))
    }

    pub fn set_clusters(&mut self, clusters: usize) {
        self.clusters = clusters.clamp(MIN_CLUSTERS, MAX_CLUSTERS);
    }

    pub fn increment_clusters(&mut self) {
        self.set_clusters(self.clusters.saturating_add(1));
    }

    pub fn decrement_clusters(&mut self) {
        self.set_clusters(self.clusters.saturating_sub(1));
    }

    /// Classifies the loaded table with the current cluster count.
    ///
    /// The previous result is discarded first, so a failed run leaves nothing
    /// on display.
    pub fn run(&mut self) -> anyhow::Result<&AnalysisResult> {
        self.result = None;
        let table = self.table.as_ref().context(content::UPLOAD_PROMPT)?;
        let classifier = ScoreClassifier::new(ClassifierConfig {
            clusters: self.clusters,
            seed: self.seed,
        });
        let classified = classifier.classify(table)?;
        Ok(self.result.insert(AnalysisResult::new(classified)))
    }

    /// Writes the current result to the export path.
    pub fn export(&self) -> anyhow::Result<&Path> {
        let result = self
            .result
            .as_ref()
            .context("Nothing to export, run the clustering first")?;
        workbook::write_workbook(&result.table, &self.export_path)?;
        Ok(&self.export_path)
    }
}
