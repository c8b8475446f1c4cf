//! Plain-text rendering of the classification result

use kelas_analysis::{
    chart::LabelCounts,
    classifier::{Cell, ClassifiedTable},
    summary::DatasetSummary,
};

use crate::{
    content,
    ui::format::{SUMMARY_ROWS, format_cell, format_stat},
};

const STAT_LABEL_WIDTH: usize = 6;

/// Print the `describe()`-style table, one column per numeric column
pub(super) fn print_summary_table(summary: &DatasetSummary) {
    let widths = summary
        .columns
        .iter()
        .map(|c| c.name.chars().count().max(12))
        .collect::<Vec<_>>();

    let mut header = format!("  {:<STAT_LABEL_WIDTH$}", "");
    for (column, width) in summary.columns.iter().zip(&widths) {
        header.push_str(&format!(" {:>width$}", column.name));
    }
    println!("{header}");
    print_separator(STAT_LABEL_WIDTH + widths.iter().map(|w| w + 1).sum::<usize>());

    for (name, extract) in SUMMARY_ROWS {
        let mut line = format!("  {name:<STAT_LABEL_WIDTH$}");
        for (column, width) in summary.columns.iter().zip(&widths) {
            line.push_str(&format!(" {:>width$}", format_stat(extract(&column.stats))));
        }
        println!("{line}");
    }
}

/// Print the augmented table; numbers right-aligned, text left-aligned
pub(super) fn print_record_table(table: &ClassifiedTable) {
    let headers = table.headers();
    let rows = table.output_rows().collect::<Vec<_>>();
    let widths = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|row| format_cell(&row[i]).chars().count())
                .chain([h.chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, &width)| format!("{h:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    println!("  {header}");
    print_separator(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1));

    for row in &rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| match cell {
                Cell::Number(_) => format!("{:>width$}", format_cell(cell)),
                Cell::Text(_) => format!("{:<width$}", format_cell(cell)),
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {}", line.trim_end());
    }
}

/// Print label counts with a proportional bar
pub(super) fn print_label_counts(counts: &LabelCounts) {
    const BAR_WIDTH: usize = 40;
    let max = counts.max().max(1);
    println!(
        "  {:<16} {:>8}",
        content::BAR_CHART_X_LABEL,
        content::BAR_CHART_Y_LABEL
    );
    print_separator(16 + 1 + 8 + 1 + BAR_WIDTH);
    for &(label, count) in &counts.counts {
        let bar = "#".repeat(count * BAR_WIDTH / max);
        println!("  {:<16} {count:>8} {bar}", label.as_str());
    }
    println!("  {:<16} {:>8}", "Total", counts.total());
}

fn print_separator(width: usize) {
    println!("  {}", "-".repeat(width));
}
