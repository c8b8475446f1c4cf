use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::merge::MergeStrategy,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::{
    content::{InfoBlock, InfoPage},
    ui::widgets::style,
};

/// Scrollable view of a static informational page.
#[derive(Debug)]
pub struct InfoPageView<'a> {
    page: &'a InfoPage,
    scroll: u16,
}

impl<'a> InfoPageView<'a> {
    pub fn new(page: &'a InfoPage, scroll: u16) -> Self {
        Self { page, scroll }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![];
        let mut step = 0;
        for block in self.page.blocks {
            match *block {
                InfoBlock::Heading(text) => {
                    lines.push(Line::default());
                    lines.push(Line::styled(text, style::HEADER.add_modifier(Modifier::UNDERLINED)));
                }
                InfoBlock::Paragraph(text) => {
                    lines.push(Line::default());
                    lines.push(Line::raw(text));
                }
                InfoBlock::Bullet(text) => lines.push(Line::raw(format!("  • {text}"))),
                InfoBlock::Step(text) => {
                    step += 1;
                    lines.push(Line::raw(format!("  {step}. {text}")));
                }
                InfoBlock::Image { url, caption } => {
                    lines.push(Line::from(vec![
                        Span::styled("Gambar: ", style::HEADER),
                        Span::raw(caption),
                    ]));
                    lines.push(Line::styled(url, style::HINT));
                }
            }
        }
        lines
    }
}

impl Widget for InfoPageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::bordered()
            .merge_borders(MergeStrategy::Exact)
            .title(Line::styled(self.page.title, Style::new().add_modifier(Modifier::BOLD)));
        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        Widget::render(paragraph, area, buf);
    }
}
