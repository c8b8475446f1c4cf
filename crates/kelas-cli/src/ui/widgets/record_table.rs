use kelas_analysis::classifier::{Cell as TableCell, ClassifiedTable};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Block, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::ui::{format::format_cell, widgets::style};

/// The augmented table, scrolled to `offset`.
#[derive(Debug)]
pub struct RecordTable<'a> {
    title: &'a str,
    table: &'a ClassifiedTable,
    offset: usize,
}

impl<'a> RecordTable<'a> {
    pub fn new(title: &'a str, table: &'a ClassifiedTable, offset: usize) -> Self {
        Self {
            title,
            table,
            offset,
        }
    }
}

impl Widget for RecordTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let headers = self.table.headers();
        let rows = self
            .table
            .output_rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        TableCell::Number(_) => {
                            Cell::from(Line::raw(format_cell(cell)).right_aligned())
                        }
                        TableCell::Text(_) => Cell::from(format_cell(cell)),
                    })
                    .collect::<Row>()
            })
            .collect::<Vec<_>>();

        let widths = headers
            .iter()
            .map(|h| Constraint::Min(u16::try_from(h.chars().count()).unwrap_or(u16::MAX).max(6)))
            .collect::<Vec<_>>();
        let header = headers.iter().map(String::as_str).collect::<Row>().style(style::HEADER);

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(self.title)
                    .title_bottom(format!(
                        "{}/{}",
                        (self.offset + 1).min(self.table.len()),
                        self.table.len()
                    )),
            );
        let mut state = TableState::default().with_offset(self.offset);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
