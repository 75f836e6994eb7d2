//! Dashboard info panel component
//!
//! Renders connection information

use crate::environment::Environment;

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render connection info panel.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Local => Color::LightBlue,
        Environment::Custom { .. } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )]));

    info_lines.push(Line::from(vec![Span::styled(
        format!("API: {}", state.environment.api_url()),
        Style::default().fg(Color::Gray),
    )]));

    info_lines.push(Line::from(vec![Span::styled(
        format!("Refresh: every {}s", state.refresh_interval.as_secs()),
        Style::default().fg(Color::LightYellow),
    )]));

    let uptime = state.start_time.elapsed().as_secs();
    let uptime_string = if uptime >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime / 3600,
            (uptime % 3600) / 60,
            uptime % 60
        )
    } else {
        format!("Uptime: {}m {}s", uptime / 60, uptime % 60)
    };
    info_lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )]));

    let info_block = Block::default()
        .title("CONNECTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
