//! Spreadsheet export of classification results
//!
//! The augmented table is written as a single-sheet XLSX workbook: one header
//! row followed by one row per student. Numeric cells are stored as numbers,
//! everything else as text. [`ExportedTable`] reads such a workbook back.

use std::{fs, io::Cursor, path::Path};

use anyhow::{Context, bail, ensure};
use calamine::{Data, Reader, Xlsx};
use kelas_analysis::{
    classifier::{CLUSTER_COLUMN, Cell, ClassifiedTable, LABEL_COLUMN},
    label::ClassLabel,
};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// Name of the only worksheet
pub const SHEET_NAME: &str = "Sheet1";
/// Default file name offered for the export
pub const DEFAULT_EXPORT_FILE: &str = "pembagian_kelas_unggulan.xlsx";

/// Writes the augmented table to an XLSX file at `path`.
pub fn write_workbook<P>(table: &ClassifiedTable, path: P) -> anyhow::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = workbook_bytes(table)?;
    fs::write(path, bytes)
        .with_context(|| format!("Failed to save workbook: {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = table.len(), "exported workbook");
    Ok(())
}

/// Encodes the augmented table as XLSX bytes.
pub fn workbook_bytes(table: &ClassifiedTable) -> anyhow::Result<Vec<u8>> {
    let mut workbook = build_workbook(table)?;
    workbook
        .save_to_buffer()
        .context("Failed to encode workbook")
}

fn build_workbook(table: &ClassifiedTable) -> anyhow::Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .context("Failed to name worksheet")?;
    fill_worksheet(worksheet, table)?;
    Ok(workbook)
}

fn fill_worksheet(worksheet: &mut Worksheet, table: &ClassifiedTable) -> anyhow::Result<()> {
    let header_format = Format::new().set_bold();
    for (col, name) in table.headers().iter().enumerate() {
        worksheet
            .write_string_with_format(0, column_index(col)?, name, &header_format)
            .with_context(|| format!("Failed to write header '{name}'"))?;
    }

    for (i, row) in table.output_rows().enumerate() {
        let row_index = u32::try_from(i + 1).context("Too many rows for a worksheet")?;
        for (col, cell) in row.iter().enumerate() {
            let col_index = column_index(col)?;
            let written = match cell {
                Cell::Number(value) => worksheet.write_number(row_index, col_index, *value),
                Cell::Text(text) => worksheet.write_string(row_index, col_index, text),
            };
            written.with_context(|| {
                format!("Failed to write cell at row {row_index}, column {col}")
            })?;
        }
    }
    Ok(())
}

fn column_index(col: usize) -> anyhow::Result<u16> {
    u16::try_from(col).context("Too many columns for a worksheet")
}

/// A workbook read back from disk or memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ExportedTable {
    pub fn read<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
        Self::from_bytes(bytes)
            .with_context(|| format!("Failed to read workbook: {}", path.display()))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> anyhow::Result<Self> {
        let mut workbook: Xlsx<_> =
            calamine::open_workbook_from_rs(Cursor::new(bytes)).context("Failed to open workbook")?;
        let range = workbook
            .worksheet_range(SHEET_NAME)
            .with_context(|| format!("Missing worksheet '{SHEET_NAME}'"))?;
        let mut rows = range.rows();
        let headers = rows
            .next()
            .context("Workbook has no header row")?
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        let rows = rows
            .map(|row| row.iter().map(cell_from_data).collect())
            .collect();
        Ok(Self { headers, rows })
    }

    /// Checks that this workbook holds the same students, cluster ids and
    /// labels as `table`.
    pub fn verify(&self, table: &ClassifiedTable) -> anyhow::Result<()> {
        ensure!(
            self.headers == table.headers(),
            "Exported columns differ: {:?}",
            self.headers
        );
        ensure!(
            self.rows.len() == table.len(),
            "Exported {} rows, expected {}",
            self.rows.len(),
            table.len()
        );
        let clusters = self.cluster_ids()?;
        let labels = self.labels()?;
        for (i, record) in table.records().iter().enumerate() {
            ensure!(
                clusters[i] == record.cluster && labels[i] == record.label,
                "Exported row {} does not match",
                i + 1
            );
        }
        Ok(())
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cluster ids of every row.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cluster_ids(&self) -> anyhow::Result<Vec<usize>> {
        let column = self
            .column(CLUSTER_COLUMN)
            .with_context(|| format!("Missing column '{CLUSTER_COLUMN}'"))?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| match row.get(column).and_then(Cell::as_number) {
                Some(value) if value >= 0.0 && value.fract() == 0.0 => Ok(value as usize),
                _ => bail!("Invalid cluster id in row {}", i + 1),
            })
            .collect()
    }

    /// Class labels of every row.
    pub fn labels(&self) -> anyhow::Result<Vec<ClassLabel>> {
        let column = self
            .column(LABEL_COLUMN)
            .with_context(|| format!("Missing column '{LABEL_COLUMN}'"))?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| match row.get(column) {
                Some(Cell::Text(text)) => text
                    .parse::<ClassLabel>()
                    .with_context(|| format!("Invalid label in row {}", i + 1)),
                _ => bail!("Missing label in row {}", i + 1),
            })
            .collect()
    }
}

#[expect(clippy::cast_precision_loss)]
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Number(*value as f64),
        Data::String(text) => Cell::Text(text.clone()),
        Data::Empty => Cell::Text(String::new()),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use kelas_analysis::{
        classifier::{ClassifierConfig, ScoreClassifier},
        record::StudentTable,
    };

    use super::*;

    fn classified() -> ClassifiedTable {
        let rows = [
            ["Adi", "75", "78", "76,5"],
            ["Budi", "80", "84", "82,0"],
            ["Citra", "92", "88", "90,0"],
            ["Dewi", "58", "62", "60,0"],
            ["Eko", "79", "80", "79,5"],
        ]
        .iter()
        .map(|row| row.map(ToString::to_string).to_vec())
        .collect();
        let table = StudentTable::new(
            ["nama", "uts", "uas", "total nilai"]
                .map(ToString::to_string)
                .to_vec(),
            rows,
        )
        .unwrap();
        ScoreClassifier::new(ClassifierConfig {
            clusters: 3,
            seed: Some(12),
        })
        .classify(&table)
        .unwrap()
    }

    fn assert_round_trip(table: &ClassifiedTable, exported: &ExportedTable) {
        assert_eq!(exported.headers, table.headers());
        assert_eq!(exported.rows.len(), table.len());
        let clusters = table
            .records()
            .iter()
            .map(|r| r.cluster)
            .collect::<Vec<_>>();
        let labels = table.records().iter().map(|r| r.label).collect::<Vec<_>>();
        assert_eq!(exported.cluster_ids().unwrap(), clusters);
        assert_eq!(exported.labels().unwrap(), labels);
        assert_eq!(exported.rows, table.output_rows().collect::<Vec<_>>());
        exported.verify(table).unwrap();
    }

    #[test]
    fn test_round_trip_in_memory() {
        let table = classified();
        let bytes = workbook_bytes(&table).unwrap();
        let exported = ExportedTable::from_bytes(bytes).unwrap();
        assert_round_trip(&table, &exported);
    }

    #[test]
    fn test_round_trip_through_file() {
        let table = classified();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);
        write_workbook(&table, &path).unwrap();
        let exported = ExportedTable::read(&path).unwrap();
        assert_round_trip(&table, &exported);
    }

    #[test]
    fn test_reclassified_export_round_trips() {
        let first = classified();
        let exported = ExportedTable::from_bytes(workbook_bytes(&first).unwrap()).unwrap();
        let rows = exported
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Number(value) => value.to_string(),
                        Cell::Text(text) => text.clone(),
                    })
                    .collect()
            })
            .collect();
        let table = StudentTable::new(exported.headers.clone(), rows).unwrap();

        let second = ScoreClassifier::new(ClassifierConfig {
            clusters: 2,
            seed: Some(3),
        })
        .classify(&table)
        .unwrap();
        assert_eq!(second.headers(), first.headers());

        let exported = ExportedTable::from_bytes(workbook_bytes(&second).unwrap()).unwrap();
        assert_round_trip(&second, &exported);
    }

    #[test]
    fn test_total_is_exported_as_number() {
        let table = classified();
        let exported = ExportedTable::from_bytes(workbook_bytes(&table).unwrap()).unwrap();
        let total = exported.column("total nilai").unwrap();
        assert_eq!(exported.rows[0][total], Cell::Number(76.5));
        assert_eq!(exported.rows[4][total], Cell::Number(79.5));
    }

    #[test]
    fn test_verify_detects_changed_label() {
        let table = classified();
        let mut exported = ExportedTable::from_bytes(workbook_bytes(&table).unwrap()).unwrap();
        let label = exported.column(LABEL_COLUMN).unwrap();
        exported.rows[0][label] = Cell::Text("Kelas B".into());
        assert!(exported.verify(&table).is_err());
        exported.rows.pop();
        assert!(exported.verify(&table).is_err());
    }

    #[test]
    fn test_missing_label_column_is_reported() {
        let exported = ExportedTable {
            headers: vec!["uts".into()],
            rows: vec![vec![Cell::Number(75.0)]],
        };
        assert!(exported.labels().is_err());
        assert!(exported.cluster_ids().is_err());
    }
}
