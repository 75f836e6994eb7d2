//! Dashboard header component
//!
//! Renders the title and the status indicator

use super::super::state::{DashboardState, StatusState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and live/offline status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(format!(
        "ZAKAT FUND DASHBOARD v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let status_color = match state.status.state {
        StatusState::Normal => Color::LightGreen,
        StatusState::Error => Color::LightRed,
    };

    // Pulse the dot while live
    let dot = if state.status.state == StatusState::Normal && (state.tick / 10) % 2 == 1 {
        "○"
    } else {
        "●"
    };

    let status_line = Line::from(vec![
        Span::styled(format!("{} ", dot), Style::default().fg(status_color)),
        Span::styled(
            state.status.text.clone(),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  |  Last update: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.status.last_update.clone(),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let status = Paragraph::new(status_line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, header_chunks[1]);
}
