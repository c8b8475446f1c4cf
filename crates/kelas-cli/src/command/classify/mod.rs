//! Non-interactive classification command
//!
//! Reads a CSV score table, classifies it once and prints the same views the
//! terminal UI shows: descriptive statistics, the augmented table and the
//! label counts. Optionally writes the workbook and a JSON report.

mod table;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use kelas_analysis::{
    chart::LabelCounts,
    classifier::{ClassifierConfig, ScoreClassifier},
    summary::DatasetSummary,
};

use crate::{
    content,
    schema::report::ClassificationReport,
    util,
    workbook::{self, ExportedTable},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct ClassifyArg {
    /// Semicolon-separated CSV file with `uts`, `uas` and `total nilai` columns
    pub input: PathBuf,

    /// Number of clusters (recommended range: 2-5)
    #[arg(long, short = 'k', default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..=10))]
    pub clusters: u16,

    /// Seed for K-means; a fresh seed is drawn when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the augmented table as an XLSX workbook to this path
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write a JSON report to this path (`-` for stdout, which replaces the
    /// printed tables)
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub(crate) fn run(arg: &ClassifyArg) -> anyhow::Result<()> {
    let ClassifyArg {
        input,
        clusters,
        seed,
        output,
        json,
    } = arg;

    let table = util::read_student_csv(input)?;
    let classifier = ScoreClassifier::new(ClassifierConfig {
        clusters: usize::from(*clusters),
        seed: *seed,
    });
    let classified = classifier
        .classify(&table)
        .with_context(|| format!("Failed to classify {}", input.display()))?;
    let summary = DatasetSummary::describe(&classified);
    let counts = LabelCounts::from_table(&classified);

    let json_to_stdout = json.as_ref().is_some_and(|p| p.as_os_str() == "-");
    if !json_to_stdout {
        println!("{}", content::ANALYSIS_TITLE);
        println!("{}\n", "=".repeat(content::ANALYSIS_TITLE.chars().count()));

        println!("{}", content::SUMMARY_TITLE);
        table::print_summary_table(&summary);
        println!();

        println!("{}", content::TABLE_TITLE);
        table::print_record_table(&classified);
        println!();

        println!("{}", content::BAR_CHART_TITLE);
        table::print_label_counts(&counts);
    }

    if let Some(output) = output {
        workbook::write_workbook(&classified, output)?;
        ExportedTable::read(output)?
            .verify(&classified)
            .with_context(|| format!("Exported workbook is inconsistent: {}", output.display()))?;
        if !json_to_stdout {
            println!("\nWorkbook saved to: {}", output.display());
        }
    }

    if let Some(json) = json {
        let report = ClassificationReport::new(
            input.display().to_string(),
            *seed,
            &classified,
            &summary,
            &counts,
        );
        util::Output::save_json(&report, Some(json.clone()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use kelas_analysis::label::ClassLabel;

    use super::*;

    #[test]
    fn test_classify_writes_workbook_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("siswa.csv");
        fs::write(
            &input,
            "no;nama;uts;uas;total nilai\n\
             1;Adi;75;78;76,5\n\
             2;Budi;80;84;82,0\n\
             3;Citra;92;88;90,0\n\
             4;Dewi;58;62;60,0\n\
             5;Eko;79;80;79,5\n",
        )
        .unwrap();
        let output = dir.path().join(workbook::DEFAULT_EXPORT_FILE);
        let json = dir.path().join("report.json");

        run(&ClassifyArg {
            input,
            clusters: 2,
            seed: Some(9),
            output: Some(output.clone()),
            json: Some(json.clone()),
        })
        .unwrap();

        let exported = ExportedTable::read(&output).unwrap();
        assert_eq!(exported.rows.len(), 5);
        assert!(exported.cluster_ids().unwrap().iter().all(|&c| c < 2));

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(report["clusters"], 2);
        assert_eq!(report["seed"], 9);
        assert_eq!(report["students"].as_array().unwrap().len(), 5);
        assert_eq!(report["students"][4]["label"], "Kelas Unggulan");
    }

    #[test]
    fn test_classify_accepts_previous_result_columns() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("hasil.csv");
        fs::write(
            &input,
            "nama;uts;uas;total nilai;Cluster;Cluster Name\n\
             Adi;75;78;76,5;1;Kelas B\n\
             Budi;80;84;82,0;0;Kelas C\n\
             Citra;92;88;90,0;1;Kelas B\n\
             Dewi;58;62;60,0;0;Kelas C\n",
        )
        .unwrap();
        let output = dir.path().join(workbook::DEFAULT_EXPORT_FILE);

        run(&ClassifyArg {
            input,
            clusters: 2,
            seed: Some(4),
            output: Some(output.clone()),
            json: Some(dir.path().join("report.json")),
        })
        .unwrap();

        let exported = ExportedTable::read(&output).unwrap();
        assert_eq!(
            exported.headers,
            ["nama", "uts", "uas", "total nilai", "Cluster", "Cluster Name"]
        );
        assert_eq!(
            exported.labels().unwrap(),
            [
                ClassLabel::KelasC,
                ClassLabel::KelasB,
                ClassLabel::KelasUnggulan,
                ClassLabel::KelasUnggulan,
            ]
        );
    }

    #[test]
    fn test_classify_reports_bad_score() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("siswa.csv");
        fs::write(&input, "uts;uas;total nilai\n75;78;delapan\n").unwrap();
        let err = run(&ClassifyArg {
            input,
            clusters: 1,
            seed: None,
            output: None,
            json: None,
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid number 'delapan'"));
    }
}
