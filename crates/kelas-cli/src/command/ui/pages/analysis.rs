use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Spacing},
    style::{Color, Style},
    symbols::merge::MergeStrategy,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::{
    command::ui::session::AnalysisSession,
    content,
    ui::widgets::{ClusterScatterChart, LabelChart, RecordTable, SummaryTable, style},
};

/// The analysis page: input controls followed by the results of the last run.
#[derive(Debug)]
pub struct AnalysisView<'a> {
    session: &'a AnalysisSession,
    path_input: Option<&'a str>,
    table_offset: usize,
}

impl<'a> AnalysisView<'a> {
    pub fn new(
        session: &'a AnalysisSession,
        path_input: Option<&'a str>,
        table_offset: usize,
    ) -> Self {
        Self {
            session,
            path_input,
            table_offset,
        }
    }

    fn controls(&self) -> Paragraph<'a> {
        let file_line = match self.path_input {
            Some(input) => Line::from(vec![
                Span::styled("File: ", style::HEADER),
                Span::styled(format!("{input}_"), style::HIGHLIGHT),
            ]),
            None => {
                let path = self.session.input_path().map_or_else(
                    || "(belum ada file)".to_owned(),
                    |p| p.display().to_string(),
                );
                Line::from(vec![Span::styled("File: ", style::HEADER), Span::raw(path)])
            }
        };
        let clusters_line = Line::from(vec![
            Span::styled(format!("{}: ", content::CLUSTERS_LABEL), style::HEADER),
            Span::styled(format!("< {} >", self.session.clusters()), style::HIGHLIGHT),
        ]);
        let export_line = Line::from(vec![
            Span::styled("Export: ", style::HEADER),
            Span::raw(self.session.export_path().display().to_string()),
        ]);
        Paragraph::new(vec![file_line, clusters_line, export_line]).block(
            Block::bordered()
                .merge_borders(MergeStrategy::Exact)
                .title(content::FILE_LABEL),
        )
    }
}

impl Widget for AnalysisView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [title_area, controls_area, body_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .areas(area);

        let title = Paragraph::new(Line::styled(content::ANALYSIS_TITLE, style::HEADER))
            .wrap(Wrap { trim: true });
        Widget::render(title, title_area, buf);
        Widget::render(self.controls(), controls_area, buf);

        if self.session.table().is_none() {
            let prompt = Paragraph::new(Line::styled(
                content::UPLOAD_PROMPT,
                Style::new().fg(Color::LightBlue),
            ))
            .block(Block::bordered().merge_borders(MergeStrategy::Exact));
            Widget::render(prompt, body_area, buf);
            return;
        }

        let Some(result) = self.session.result() else {
            let rows = self.session.table().map_or(0, |t| t.len());
            let hint = Paragraph::new(Line::raw(format!(
                "{rows} baris dimuat. Tekan Enter untuk Perform K-Means Clustering."
            )))
            .block(Block::bordered().merge_borders(MergeStrategy::Exact));
            Widget::render(hint, body_area, buf);
            return;
        };

        let [summary_area, detail_area] = Layout::vertical([
            Constraint::Length(SummaryTable::height()),
            Constraint::Fill(1),
        ])
        .spacing(Spacing::Overlap(1))
        .areas(body_area);
        let [table_area, chart_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .spacing(Spacing::Overlap(1))
                .areas(detail_area);
        let [bar_area, scatter_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(chart_area);

        Widget::render(
            SummaryTable::new(content::SUMMARY_TITLE, &result.summary),
            summary_area,
            buf,
        );
        Widget::render(
            RecordTable::new(content::TABLE_TITLE, &result.table, self.table_offset),
            table_area,
            buf,
        );
        Widget::render(
            LabelChart::new(
                content::BAR_CHART_TITLE,
                content::BAR_CHART_X_LABEL,
                content::BAR_CHART_Y_LABEL,
                &result.counts,
            ),
            bar_area,
            buf,
        );
        Widget::render(
            ClusterScatterChart::new(
                content::SCATTER_TITLE,
                content::SCATTER_X_LABEL,
                content::SCATTER_Y_LABEL,
                &result.scatter,
            ),
            scatter_area,
            buf,
        );
    }
}
