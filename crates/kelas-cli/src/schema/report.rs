use kelas_analysis::{
    chart::LabelCounts, classifier::ClassifiedTable, label::ClassLabel, record::StudentScores,
    summary::DatasetSummary,
};
use serde::Serialize;

/// Machine-readable result of a `classify` run
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    /// Path of the input CSV file
    pub input: String,
    /// Number of clusters (K)
    pub clusters: usize,
    /// K-means seed, when one was given
    pub seed: Option<u64>,
    /// Sum of squared distances of the scaled points to their centroid
    pub inertia: f64,
    /// Lloyd iterations until convergence
    pub iterations: usize,
    /// Descriptive statistics of the numeric columns
    pub summary: Vec<ColumnReport>,
    /// Students per label, most frequent first
    pub label_counts: Vec<LabelCountReport>,
    /// Original column names
    pub headers: Vec<String>,
    pub students: Vec<StudentReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `null` for a single row
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelCountReport {
    pub label: ClassLabel,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentReport {
    /// Original cells in header order
    pub fields: Vec<String>,
    pub scores: StudentScores,
    pub cluster: usize,
    pub label: ClassLabel,
}

impl ClassificationReport {
    pub fn new(
        input: String,
        seed: Option<u64>,
        table: &ClassifiedTable,
        summary: &DatasetSummary,
        counts: &LabelCounts,
    ) -> Self {
        let summary = summary
            .columns
            .iter()
            .map(|column| {
                let stats = &column.stats;
                ColumnReport {
                    name: column.name.clone(),
                    count: stats.count,
                    mean: stats.mean,
                    std: stats.std_dev,
                    min: stats.min,
                    p25: stats.p25,
                    median: stats.median,
                    p75: stats.p75,
                    max: stats.max,
                }
            })
            .collect();
        let label_counts = counts
            .counts
            .iter()
            .map(|&(label, count)| LabelCountReport { label, count })
            .collect();
        let students = table
            .records()
            .iter()
            .map(|record| StudentReport {
                fields: record.fields.clone(),
                scores: record.scores,
                cluster: record.cluster,
                label: record.label,
            })
            .collect();
        Self {
            input,
            clusters: table.clusters(),
            seed,
            inertia: table.inertia(),
            iterations: table.iterations(),
            summary,
            label_counts,
            headers: table.source_headers().to_vec(),
            students,
        }
    }
}

#[cfg(test)]
mod tests {
    use kelas_analysis::{
        classifier::{ClassifierConfig, ScoreClassifier},
        record::StudentTable,
    };

    use super::*;

    #[test]
    fn test_report_serializes_labels_by_name() {
        let table = StudentTable::new(
            ["uts", "uas", "total nilai"].map(ToString::to_string).to_vec(),
            vec![
                ["75", "78", "76,5"].map(ToString::to_string).to_vec(),
                ["80", "84", "82,0"].map(ToString::to_string).to_vec(),
            ],
        )
        .unwrap();
        let classified = ScoreClassifier::new(ClassifierConfig {
            clusters: 1,
            seed: Some(2),
        })
        .classify(&table)
        .unwrap();
        let report = ClassificationReport::new(
            "siswa.csv".into(),
            Some(2),
            &classified,
            &DatasetSummary::describe(&classified),
            &LabelCounts::from_table(&classified),
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["clusters"], 1);
        assert_eq!(json["students"][0]["label"], "Kelas C");
        assert_eq!(json["students"][1]["label"], "Kelas B");
        assert_eq!(json["students"][0]["scores"]["total"], 76.5);
        assert_eq!(json["label_counts"].as_array().unwrap().len(), 2);
        assert_eq!(json["summary"][0]["name"], "uts");
    }
}
