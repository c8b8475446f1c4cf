//! Descriptive statistics of the augmented table
//!
//! A column is summarized when every one of its cells is numeric. In practice
//! that is the three score columns, the cluster id, and any other all-numeric
//! column of the uploaded table (a student number, for example).

use kelas_stats::descriptive::DescriptiveStats;

use crate::classifier::{Cell, ClassifiedTable};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub stats: DescriptiveStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    /// Summaries in table column order
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    #[must_use]
    pub fn describe(table: &ClassifiedTable) -> Self {
        let headers = table.headers();
        let mut values = vec![Some(Vec::with_capacity(table.len())); headers.len()];
        for row in table.output_rows() {
            for (column, cell) in values.iter_mut().zip(row) {
                match cell {
                    Cell::Number(value) => {
                        if let Some(column) = column {
                            column.push(value);
                        }
                    }
                    Cell::Text(_) => *column = None,
                }
            }
        }

        let columns = headers
            .into_iter()
            .zip(values)
            .filter_map(|(name, values)| {
                let stats = DescriptiveStats::new(values?)?;
                Some(ColumnSummary { name, stats })
            })
            .collect();
        Self { columns }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DescriptiveStats> {
        self.columns
            .iter()
            .find_map(|c| (c.name == name).then_some(&c.stats))
    }
}
