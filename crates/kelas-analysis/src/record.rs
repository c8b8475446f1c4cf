//! Student score tables
//!
//! A [`StudentTable`] holds an uploaded table exactly as it was read: a header
//! row and rows of text cells. The three score columns are located by name and
//! parsed on demand into [`StudentScores`]; every other column is carried
//! along untouched.
//!
//! # Score format
//!
//! Scores may use a comma as decimal separator (`"76,5"`), which is how the
//! combined total is exported by the school's spreadsheet. See
//! [`parse_locale_decimal`].

use serde::Serialize;

/// Column name of the midterm score
pub const UTS_COLUMN: &str = "uts";
/// Column name of the final-exam score
pub const UAS_COLUMN: &str = "uas";
/// Column name of the combined total score
pub const TOTAL_COLUMN: &str = "total nilai";

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParseScoreError {
    #[display("empty value")]
    Empty,
    #[display("invalid number '{text}'")]
    Invalid { text: String },
    #[display("non-finite number '{text}'")]
    NonFinite { text: String },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TableError {
    #[display("missing column '{name}'")]
    MissingColumn { name: &'static str },
    #[display("row {row} has {found} fields, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[display("row {row}, column '{column}': {source}")]
    InvalidScore {
        row: usize,
        column: &'static str,
        source: ParseScoreError,
    },
}

/// Parses a decimal number that may use `,` as decimal separator.
///
/// Every `,` is replaced with `.` before parsing, so `"76,5"` and `"76.5"`
/// parse to the same value. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use kelas_analysis::record::parse_locale_decimal;
///
/// assert_eq!(parse_locale_decimal("76,5").unwrap(), 76.5);
/// assert_eq!(parse_locale_decimal(" 82 ").unwrap(), 82.0);
/// assert!(parse_locale_decimal("tujuh puluh").is_err());
/// ```
pub fn parse_locale_decimal(text: &str) -> Result<f64, ParseScoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseScoreError::Empty);
    }
    let value = trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ParseScoreError::Invalid {
            text: trimmed.to_owned(),
        })?;
    if !value.is_finite() {
        return Err(ParseScoreError::NonFinite {
            text: trimmed.to_owned(),
        });
    }
    Ok(value)
}

/// Parsed scores of one student.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StudentScores {
    /// Midterm score
    pub uts: f64,
    /// Final-exam score
    pub uas: f64,
    /// Combined total score
    pub total: f64,
}

impl StudentScores {
    /// Returns the scores as a point in `(uts, uas, total)` order.
    #[must_use]
    pub fn to_point(&self) -> [f64; 3] {
        [self.uts, self.uas, self.total]
    }
}

/// Positions of the score columns within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreColumns {
    pub uts: usize,
    pub uas: usize,
    pub total: usize,
}

impl ScoreColumns {
    /// Locates the score columns in a header row.
    ///
    /// Names are matched case-insensitively after trimming whitespace.
    pub fn locate<S>(headers: &[S]) -> Result<Self, TableError>
    where
        S: AsRef<str>,
    {
        let find =
            |name: &'static str| find_column(headers, name).ok_or(TableError::MissingColumn { name });
        Ok(Self {
            uts: find(UTS_COLUMN)?,
            uas: find(UAS_COLUMN)?,
            total: find(TOTAL_COLUMN)?,
        })
    }

    /// Returns the score column name stored at `index`, if any.
    #[must_use]
    pub fn name_of(&self, index: usize) -> Option<&'static str> {
        if index == self.uts {
            Some(UTS_COLUMN)
        } else if index == self.uas {
            Some(UAS_COLUMN)
        } else if index == self.total {
            Some(TOTAL_COLUMN)
        } else {
            None
        }
    }
}

/// Returns the index of the first header matching `name`, ignoring case and
/// surrounding whitespace.
#[must_use]
pub fn find_column<S>(headers: &[S], name: &str) -> Option<usize>
where
    S: AsRef<str>,
{
    headers
        .iter()
        .position(|h| h.as_ref().trim().eq_ignore_ascii_case(name))
}

/// An uploaded table of student rows.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl StudentTable {
    /// Builds a table, checking that every row has one field per header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(TableError::RowWidth {
                row: i + 1,
                found: row.len(),
                expected: headers.len(),
            });
        }
        Ok(Self { headers, rows })
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn score_columns(&self) -> Result<ScoreColumns, TableError> {
        ScoreColumns::locate(&self.headers)
    }

    /// Parses the score columns of every row.
    ///
    /// Rows are numbered from 1 in errors, not counting the header.
    pub fn scores(&self) -> Result<Vec<StudentScores>, TableError> {
        let columns = self.score_columns()?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let parse = |index: usize, column: &'static str| {
                    parse_locale_decimal(&row[index]).map_err(|source| {
                        TableError::InvalidScore {
                            row: i + 1,
                            column,
                            source,
                        }
                    })
                };
                Ok(StudentScores {
                    uts: parse(columns.uts, UTS_COLUMN)?,
                    uas: parse(columns.uas, UAS_COLUMN)?,
                    total: parse(columns.total, TOTAL_COLUMN)?,
                })
            })
            .collect()
    }
}
