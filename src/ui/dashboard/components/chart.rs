//! Dashboard chart component
//!
//! Renders the daily collections time series

use super::super::state::DashboardState;
use crate::consts::cli_consts::CURRENCY_LABEL;
use crate::format::format_grouped;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

/// Render the daily collections chart.
pub fn render_collection_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("DAILY COLLECTIONS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let chart = match &state.chart {
        Some(chart) if !chart.points().is_empty() => chart,
        _ => {
            let empty = Paragraph::new(Span::styled(
                "Waiting for collection data...",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(empty, area);
            return;
        }
    };

    let points = chart.points();
    let labels = chart.labels();
    let max_x = (chart.len().saturating_sub(1)).max(1) as f64;
    // Y axis starts at zero with some headroom above the highest day
    let max_y = (chart.max_value() * 1.1).max(1.0);

    let x_labels: Vec<Span> = axis_label_indices(chart.len())
        .into_iter()
        .filter_map(|i| labels.get(i))
        .map(|label| Span::raw(label.clone()))
        .collect();

    let y_labels = vec![
        Span::raw(format!("{} 0", CURRENCY_LABEL)),
        Span::raw(format!("{} {}", CURRENCY_LABEL, format_grouped(max_y / 2.0, 0))),
        Span::raw(format!("{} {}", CURRENCY_LABEL, format_grouped(max_y, 0))),
    ];

    let datasets = vec![
        Dataset::default()
            .name("Daily Collections")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::LightBlue))
            .data(&points),
    ];

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_y])
                .labels(y_labels),
        )
        .legend_position(None);

    f.render_widget(widget, area);
}

/// First, middle and last index of a series, without duplicates.
fn axis_label_indices(len: usize) -> Vec<usize> {
    match len {
        0 => Vec::new(),
        1 => vec![0],
        2 => vec![0, 1],
        _ => vec![0, (len - 1) / 2, len - 1],
    }
}
