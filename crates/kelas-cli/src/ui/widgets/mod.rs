pub use self::{
    cluster_scatter::*, info_page::*, label_chart::*, menu::*, record_table::*, summary_table::*,
};

mod cluster_scatter;
mod info_page;
mod label_chart;
mod menu;
mod record_table;
mod summary_table;

mod color {
    use ratatui::style::Color;

    pub const SKY_BLUE: Color = Color::Rgb(135, 206, 235);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);

    /// Ten evenly spaced samples of the viridis color map
    pub const VIRIDIS: [Color; 10] = [
        Color::Rgb(0x44, 0x01, 0x54),
        Color::Rgb(0x48, 0x28, 0x78),
        Color::Rgb(0x3e, 0x49, 0x89),
        Color::Rgb(0x31, 0x68, 0x8e),
        Color::Rgb(0x26, 0x82, 0x8e),
        Color::Rgb(0x1f, 0x9e, 0x89),
        Color::Rgb(0x35, 0xb7, 0x79),
        Color::Rgb(0x6e, 0xce, 0x58),
        Color::Rgb(0xb5, 0xde, 0x2b),
        Color::Rgb(0xfd, 0xe7, 0x25),
    ];
}

pub mod style {
    use ratatui::style::{Modifier, Style};

    use crate::ui::widgets::color;

    pub const HIGHLIGHT: Style = Style::new().fg(color::YELLOW).add_modifier(Modifier::BOLD);
    pub const HEADER: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const HINT: Style = Style::new().fg(color::GRAY);
}

/// Color of cluster `cluster` out of `clusters`, spread over the viridis map.
#[must_use]
pub fn cluster_color(cluster: usize, clusters: usize) -> ratatui::style::Color {
    let last = color::VIRIDIS.len() - 1;
    let index = match clusters {
        0 | 1 => 0,
        n => (cluster.min(n - 1) * last + (n - 1) / 2) / (n - 1),
    };
    color::VIRIDIS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_colors_span_palette() {
        assert_eq!(cluster_color(0, 3), color::VIRIDIS[0]);
        assert_eq!(cluster_color(2, 3), color::VIRIDIS[9]);
        assert_eq!(cluster_color(0, 1), color::VIRIDIS[0]);
        let distinct = (0..10)
            .map(|i| cluster_color(i, 10))
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), 10);
    }
}
