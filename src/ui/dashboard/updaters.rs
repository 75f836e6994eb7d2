//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::{
    CardList, CardValue, CollectionChart, DashboardState, ExpenseCard, StatusState,
};
use super::utils::{INVESTMENT_ICON, beneficiary_icon};

use crate::consts::cli_consts::ERROR_MARKER;
use crate::events::{Event as WorkerEvent, EventType, PollOutcome, Worker};
use crate::format::{format_clock_time, format_currency};
use crate::snapshot::{Category, ChartSeries, DashboardSnapshot};

use chrono::{DateTime, Local};

impl DashboardState {
    /// Update the dashboard state with a new tick and any queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            if event.should_display() {
                self.add_to_activity_log(event.clone());
            }
            self.process_event(&event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        if event.worker != Worker::Poller {
            return;
        }

        match (&event.event_type, &event.outcome) {
            (EventType::Refresh, _) => self.mark_loading(),
            (_, Some(PollOutcome::Snapshot(snapshot))) => {
                self.apply_snapshot(snapshot, Local::now());
            }
            (_, Some(PollOutcome::Failed)) => self.apply_failure(),
            _ => {}
        }
    }

    /// A refresh cycle started: scalar cards enter their loading state.
    pub fn mark_loading(&mut self) {
        for card in self.scalar_cards_mut() {
            card.loading = true;
        }
    }

    /// Render a successful snapshot. Regions absent from the snapshot keep their
    /// previous content.
    pub fn apply_snapshot(&mut self, snapshot: &DashboardSnapshot, now: DateTime<Local>) {
        self.update_scalar_cards(snapshot);

        if let Some(categories) = &snapshot.beneficiary_distribution {
            self.update_beneficiary_cards(categories);
        }
        if let Some(investment) = &snapshot.investments {
            self.update_investment_card(Some(investment));
        }
        if let Some(chart) = &snapshot.chart {
            self.update_collection_chart(chart);
        }

        self.set_status_live(now);
    }

    /// Render a failed refresh. Category, investment and chart regions are untouched.
    pub fn apply_failure(&mut self) {
        for card in self.scalar_cards_mut() {
            card.value = CardValue::Error;
            card.loading = false;
        }
        self.set_status_error();
    }

    pub fn update_scalar_cards(&mut self, snapshot: &DashboardSnapshot) {
        let amounts = [
            snapshot.total_collections,
            snapshot.roi,
            snapshot.total_expenses,
            snapshot.account_balance,
        ];
        for (card, amount) in self.scalar_cards_mut().into_iter().zip(amounts) {
            card.value = CardValue::Amount(format_currency(amount.value()));
            card.loading = false;
        }
    }

    pub fn update_beneficiary_cards(&mut self, categories: &[Category]) {
        if categories.is_empty() {
            self.beneficiaries = Some(CardList::Placeholder);
            return;
        }

        let cards = categories
            .iter()
            .map(|category| ExpenseCard {
                icon: beneficiary_icon(&category.name),
                name: category.name.clone(),
                amount: format_currency(category.amount.value()),
            })
            .collect();
        self.beneficiaries = Some(CardList::Cards(cards));
    }

    pub fn update_investment_card(&mut self, investment: Option<&Category>) {
        let list = match investment {
            Some(investment) => CardList::Cards(vec![ExpenseCard {
                icon: INVESTMENT_ICON,
                name: investment.name.clone(),
                amount: format_currency(investment.amount.value()),
            }]),
            None => CardList::Placeholder,
        };
        self.investment = Some(list);
    }

    pub fn update_collection_chart(&mut self, series: &ChartSeries) {
        self.chart
            .get_or_insert_with(CollectionChart::new)
            .update(series.labels.clone(), series.values.clone());
    }

    pub fn set_status_live(&mut self, now: DateTime<Local>) {
        self.status.state = StatusState::Normal;
        self.status.text = "Live".to_string();
        self.status.last_update = format_clock_time(&now);
    }

    pub fn set_status_error(&mut self) {
        self.status.state = StatusState::Error;
        self.status.text = "Offline".to_string();
        self.status.last_update = ERROR_MARKER.to_string();
    }

    /// Plain-text rendering of the current state, for headless output.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Status: {} (last update {})",
            self.status.text, self.status.last_update
        )];

        for card in self.scalar_cards() {
            lines.push(format!("{}: {}", card.title, card.display_text()));
        }

        for (title, region) in [
            ("BENEFICIARY DISTRIBUTION", &self.beneficiaries),
            ("INVESTMENTS", &self.investment),
        ] {
            lines.push(format!("{}:", title));
            match region {
                None => lines.push("  --".to_string()),
                Some(CardList::Placeholder) => {
                    lines.push(format!("  {}", CardList::placeholder_text()))
                }
                Some(CardList::Cards(cards)) => {
                    for card in cards {
                        lines.push(format!(
                            "  {} {}: {}",
                            card.icon,
                            card.name,
                            card.display_amount()
                        ));
                    }
                }
            }
        }

        if let Some(chart) = self.chart.as_ref().filter(|chart| !chart.is_empty()) {
            lines.push(format!("DAILY COLLECTIONS: {} points", chart.points().len()));
        }

        lines
    }
}
