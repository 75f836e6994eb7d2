//! Dashboard category components
//!
//! Renders the beneficiary distribution and the investment card

use super::super::state::{CardList, DashboardState};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the beneficiary distribution panel.
pub fn render_beneficiary_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    render_card_list(f, area, "BENEFICIARY DISTRIBUTION", &state.beneficiaries);
}

/// Render the investment panel.
pub fn render_investment_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    render_card_list(f, area, "INVESTMENTS", &state.investment);
}

fn render_card_list(f: &mut Frame, area: Rect, title: &str, region: &Option<CardList>) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let paragraph = match region {
        None => Paragraph::new(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        Some(CardList::Placeholder) => Paragraph::new(Line::from(Span::styled(
            CardList::placeholder_text(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center),
        Some(CardList::Cards(cards)) => {
            let lines: Vec<Line> = cards
                .iter()
                .map(|card| {
                    Line::from(vec![
                        Span::raw(format!("{} ", card.icon)),
                        Span::styled(card.name.clone(), Style::default().fg(Color::White)),
                        Span::raw("  "),
                        Span::styled(
                            card.display_amount(),
                            Style::default()
                                .fg(Color::LightGreen)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                })
                .collect();
            Paragraph::new(lines).wrap(Wrap { trim: true })
        }
    };

    f.render_widget(paragraph.block(block), area);
}
