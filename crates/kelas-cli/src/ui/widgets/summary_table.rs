use kelas_analysis::summary::DatasetSummary;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    symbols::merge::MergeStrategy,
    widgets::{Block, Cell, Row, Table, Widget},
};

use crate::ui::{
    format::{SUMMARY_ROWS, format_stat},
    widgets::style,
};

/// Descriptive statistics with one column per numeric table column.
#[derive(Debug)]
pub struct SummaryTable<'a> {
    title: &'a str,
    summary: &'a DatasetSummary,
}

impl<'a> SummaryTable<'a> {
    pub fn new(title: &'a str, summary: &'a DatasetSummary) -> Self {
        Self { title, summary }
    }

    /// Height needed to show every statistic row.
    #[expect(clippy::cast_possible_truncation)]
    pub const fn height() -> u16 {
        // rows + header + borders
        SUMMARY_ROWS.len() as u16 + 3
    }
}

impl Widget for SummaryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let header = Row::new(
            std::iter::once(Cell::from(""))
                .chain(self.summary.columns.iter().map(|c| Cell::from(c.name.as_str()))),
        )
        .style(style::HEADER);

        let rows = SUMMARY_ROWS.iter().map(|(name, extract)| {
            Row::new(
                std::iter::once(Cell::from(*name).style(style::HEADER)).chain(
                    self.summary
                        .columns
                        .iter()
                        .map(|c| Cell::from(format_stat(extract(&c.stats)))),
                ),
            )
        });

        let widths = std::iter::once(Constraint::Length(6))
            .chain(self.summary.columns.iter().map(|_| Constraint::Min(10)));

        let table = Table::new(rows, widths).header(header).column_spacing(2).block(
            Block::bordered()
                .merge_borders(MergeStrategy::Exact)
                .title(self.title),
        );
        Widget::render(table, area, buf);
    }
}
