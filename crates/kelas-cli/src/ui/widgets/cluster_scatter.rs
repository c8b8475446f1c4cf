use kelas_analysis::chart::ClusterScatter;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    symbols::{Marker, merge::MergeStrategy},
    widgets::{Axis, Block, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use crate::ui::widgets::cluster_color;

/// Scatter plot of UTS against UAS with one colored series per cluster.
#[derive(Debug)]
pub struct ClusterScatterChart<'a> {
    title: &'a str,
    x_title: &'a str,
    y_title: &'a str,
    scatter: &'a ClusterScatter,
}

impl<'a> ClusterScatterChart<'a> {
    pub fn new(
        title: &'a str,
        x_title: &'a str,
        y_title: &'a str,
        scatter: &'a ClusterScatter,
    ) -> Self {
        Self {
            title,
            x_title,
            y_title,
            scatter,
        }
    }
}

/// Widens a `[min, max]` range by a margin so points do not sit on the border.
fn padded([min, max]: [f64; 2]) -> [f64; 2] {
    let margin = ((max - min) * 0.05).max(1.0);
    [min - margin, max + margin]
}

fn axis_labels([min, max]: [f64; 2]) -> [String; 3] {
    [
        format!("{min:.1}"),
        format!("{:.1}", f64::midpoint(min, max)),
        format!("{max:.1}"),
    ]
}

impl Widget for ClusterScatterChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let clusters = self.scatter.series.len();
        let datasets = self
            .scatter
            .series
            .iter()
            .map(|series| {
                Dataset::default()
                    .name(format!("Cluster {}", series.cluster))
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Scatter)
                    .style(Style::new().fg(cluster_color(series.cluster, clusters)))
                    .data(&series.points)
            })
            .collect::<Vec<_>>();

        let x_bounds = padded(self.scatter.uts_bounds);
        let y_bounds = padded(self.scatter.uas_bounds);
        let x_axis = Axis::default()
            .title(self.x_title)
            .bounds(x_bounds)
            .labels(axis_labels(x_bounds));
        let y_axis = Axis::default()
            .title(self.y_title)
            .bounds(y_bounds)
            .labels(axis_labels(y_bounds));

        let chart = Chart::new(datasets)
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(self.title),
            )
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));
        Widget::render(chart, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_never_collapses() {
        assert_eq!(padded([80.0, 80.0]), [79.0, 81.0]);
        assert_eq!(padded([0.0, 100.0]), [-5.0, 105.0]);
    }
}
