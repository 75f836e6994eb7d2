//! Dashboard main renderer

use super::components::{cards, categories, chart, footer, header, info_panel, logs};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    cards::render_scalar_cards(f, main_chunks[1], state);

    let middle_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[2]);

    let list_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(5)])
        .split(middle_chunks[0]);

    categories::render_beneficiary_panel(f, list_chunks[0], state);
    categories::render_investment_panel(f, list_chunks[1], state);
    chart::render_collection_chart(f, middle_chunks[1], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[3]);

    info_panel::render_info_panel(f, bottom_chunks[0], state);
    logs::render_logs_panel(f, bottom_chunks[1], state);
    footer::render_footer(f, main_chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::snapshot::{Amount, Category, DashboardSnapshot};
    use crate::ui::app::UIConfig;
    use chrono::Local;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    fn render_to_text(state: &DashboardState) -> String {
        let backend = TestBackend::new(160, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn new_state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, Duration::from_secs(60)),
        )
    }

    #[test]
    fn test_failure_renders_offline_and_error_cards() {
        let mut state = new_state();
        state.apply_failure();

        let text = render_to_text(&state);
        assert!(text.contains("Offline"));
        assert!(text.contains("Error"));
    }

    #[test]
    fn test_empty_distribution_renders_placeholder() {
        let mut state = new_state();
        let snapshot = DashboardSnapshot {
            beneficiary_distribution: Some(Vec::new()),
            investments: Some(Category {
                name: "Sukuk".to_string(),
                amount: Amount(2500.0),
            }),
            total_collections: Amount::missing(),
            roi: Amount::missing(),
            total_expenses: Amount::missing(),
            account_balance: Amount::missing(),
            chart: None,
            error: None,
        };
        state.apply_snapshot(&snapshot, Local::now());

        let text = render_to_text(&state);
        assert!(text.contains("No data"));
        assert!(text.contains("Sukuk"));
        assert!(text.contains("Live"));
    }
}
