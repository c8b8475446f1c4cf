use std::{
    fs::File,
    io::{self, BufWriter, Read, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use kelas_analysis::record::StudentTable;

/// Field delimiter of uploaded score tables
pub const CSV_DELIMITER: u8 = b';';

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    /// Opens `output_path`, with `None` or `-` meaning stdout.
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) if path.as_os_str() != "-" => Output::open(path),
            _ => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Read a semicolon-separated student score table
///
/// # Arguments
///
/// * `path` - Path to the CSV file
///
/// # Errors
///
/// Returns error if the file cannot be opened, a record is malformed, or
/// rows have differing field counts
pub fn read_student_csv<P>(path: P) -> anyhow::Result<StudentTable>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    let table = read_student_csv_from(file)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers().len(),
        "loaded student table"
    );
    Ok(table)
}

pub fn read_student_csv_from<R>(reader: R) -> anyhow::Result<StudentTable>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(CSV_DELIMITER)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .context("Failed to read CSV header row")?
        .iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();

    let rows = reader
        .records()
        .enumerate()
        .map(|(i, record)| {
            let record = record.with_context(|| format!("Failed to parse CSV row {}", i + 1))?;
            Ok(record.iter().map(str::to_owned).collect())
        })
        .collect::<anyhow::Result<Vec<Vec<String>>>>()?;

    Ok(StudentTable::new(headers, rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_semicolon_table_with_comma_decimals() {
        let csv = "nama;uts;uas;total nilai\nAdi;75;78;76,5\nBudi;80;84;82,0\n";
        let table = read_student_csv_from(csv.as_bytes()).unwrap();
        assert_eq!(table.headers(), ["nama", "uts", "uas", "total nilai"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][3], "76,5");
        assert_eq!(table.scores().unwrap()[1].total, 82.0);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv = " uts ; uas ; total nilai \n 75 ; 78 ; 76,5 \n";
        let table = read_student_csv_from(csv.as_bytes()).unwrap();
        assert_eq!(table.headers(), ["uts", "uas", "total nilai"]);
        assert_eq!(table.rows()[0], ["75", "78", "76,5"]);
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let csv = "uts;uas;total nilai\n75;78\n";
        assert!(read_student_csv_from(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_header_only_file_is_an_empty_table() {
        let csv = "uts;uas;total nilai\n";
        let table = read_student_csv_from(csv.as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_missing_file_mentions_path() {
        let err = read_student_csv("/nonexistent/siswa.csv").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/siswa.csv"));
    }
}
