//! Dashboard scalar cards
//!
//! Renders the four headline amounts

use super::super::state::{CardValue, DashboardState, ScalarCard};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the row of scalar cards.
pub fn render_scalar_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28), // Total collections is the headline card
            Constraint::Percentage(24),
            Constraint::Percentage(24),
            Constraint::Percentage(24),
        ])
        .split(area);

    for (i, card) in state.scalar_cards().into_iter().enumerate() {
        render_card(f, card_chunks[i], card, i == 0, state.tick);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &ScalarCard, headline: bool, tick: usize) {
    let value_color = match card.value {
        CardValue::Error => Color::LightRed,
        CardValue::Pending => Color::DarkGray,
        CardValue::Amount(_) if headline => Color::LightYellow,
        CardValue::Amount(_) => Color::White,
    };

    let mut value_style = Style::default().fg(value_color).add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    if card.loading {
        value_style = value_style.add_modifier(Modifier::DIM);
        spans.push(Span::styled(
            format!("{} ", SPINNER[(tick / 2) % SPINNER.len()]),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(card.display_text(), value_style));

    let border_color = if headline { Color::LightBlue } else { Color::Cyan };
    let block = Block::default()
        .title(card.title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}
