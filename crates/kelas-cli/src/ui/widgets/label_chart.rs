use kelas_analysis::chart::LabelCounts;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::merge::MergeStrategy,
    text::Line,
    widgets::{Bar, BarChart, Block, Widget},
};

use crate::ui::widgets::{color, style};

/// Vertical bar chart of the number of students per label.
#[derive(Debug)]
pub struct LabelChart<'a> {
    title: &'a str,
    x_title: &'a str,
    y_title: &'a str,
    counts: &'a LabelCounts,
}

impl<'a> LabelChart<'a> {
    pub fn new(
        title: &'a str,
        x_title: &'a str,
        y_title: &'a str,
        counts: &'a LabelCounts,
    ) -> Self {
        Self {
            title,
            x_title,
            y_title,
            counts,
        }
    }
}

impl Widget for LabelChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title(self.title)
            .title_top(Line::styled(self.y_title, style::HINT).right_aligned())
            .title_bottom(Line::styled(self.x_title, style::HINT).centered());

        let bars = self
            .counts
            .counts
            .iter()
            .map(|&(label, count)| {
                Bar::with_label(label.as_str(), count as u64).text_value(count.to_string())
            })
            .collect::<Vec<_>>();

        let slots = u16::try_from(self.counts.counts.len().max(1)).unwrap_or(u16::MAX);
        let bar_width = (block.inner(area).width / slots).saturating_sub(2).clamp(3, 16);

        let chart = BarChart::new(bars)
            .block(block)
            .bar_width(bar_width)
            .bar_gap(2)
            .bar_style(Style::new().fg(color::SKY_BLUE))
            .max(self.counts.max() as u64);
        Widget::render(chart, area, buf);
    }
}
