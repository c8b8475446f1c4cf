use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    symbols::merge::MergeStrategy,
    text::Text,
    widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::ui::widgets::style;

/// Sidebar with the application title and the page menu.
#[derive(Debug)]
pub struct Menu<'a> {
    title: &'a str,
    items: &'a [&'a str],
    selected: usize,
}

impl<'a> Menu<'a> {
    pub fn new(title: &'a str, items: &'a [&'a str], selected: usize) -> Self {
        Self {
            title,
            items,
            selected,
        }
    }
}

impl Widget for Menu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered().merge_borders(MergeStrategy::Exact);
        let inner = block.inner(area);
        let [title_area, list_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(inner);

        let title = Paragraph::new(Text::from(self.title).style(style::HEADER))
            .wrap(Wrap { trim: true });

        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| ListItem::new(format!("{}. {item}", i + 1)))
            .collect::<Vec<_>>();
        let list = List::new(items)
            .highlight_style(style::HIGHLIGHT)
            .highlight_symbol(">> ");
        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));

        Widget::render(block, area, buf);
        Widget::render(title, title_area, buf);
        StatefulWidget::render(list, list_area, buf, &mut list_state);
    }
}
