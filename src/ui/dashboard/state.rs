//! Dashboard state management
//!
//! Display model for every region of the dashboard. The renderer only reads
//! it; the updaters are the only writers.

use crate::consts::cli_consts::{
    CURRENCY_LABEL, ERROR_MARKER, MAX_ACTIVITY_LOGS, NO_DATA_PLACEHOLDER,
};
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Content of a scalar card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValue {
    /// Nothing received yet.
    Pending,
    /// Formatted amount without the currency label, e.g. `1,234.50`.
    Amount(String),
    /// The last refresh failed.
    Error,
}

/// One of the four headline amounts.
#[derive(Debug, Clone)]
pub struct ScalarCard {
    pub title: &'static str,
    pub value: CardValue,
    /// Set while a refresh is in flight
    pub loading: bool,
}

impl ScalarCard {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            value: CardValue::Pending,
            loading: false,
        }
    }

    /// Text shown in the card body.
    pub fn display_text(&self) -> String {
        match &self.value {
            CardValue::Pending => "--".to_string(),
            CardValue::Amount(amount) => format!("{} {}", CURRENCY_LABEL, amount),
            CardValue::Error => ERROR_MARKER.to_string(),
        }
    }
}

/// A beneficiary category or investment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseCard {
    pub icon: &'static str,
    pub name: String,
    /// Formatted amount without the currency label
    pub amount: String,
}

impl ExpenseCard {
    pub fn display_amount(&self) -> String {
        format!("{} {}", CURRENCY_LABEL, self.amount)
    }
}

/// Content of a card-list region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardList {
    /// The server sent nothing to show.
    Placeholder,
    Cards(Vec<ExpenseCard>),
}

impl CardList {
    pub fn placeholder_text() -> &'static str {
        NO_DATA_PLACEHOLDER
    }
}

/// Daily collections time series widget.
///
/// Labels and values are replaced together on every update; nothing is merged.
#[derive(Debug, Clone, Default)]
pub struct CollectionChart {
    labels: Vec<String>,
    values: Vec<f64>,
    redraws: u64,
}

impl CollectionChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// How many times the series has been replaced.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    pub fn update(&mut self, labels: Vec<String>, values: Vec<f64>) {
        self.labels = labels;
        self.values = values;
        self.redraws += 1;
    }

    /// Number of plotted slots. Extra entries in the longer array are ignored.
    pub fn len(&self) -> usize {
        self.labels.len().min(self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Plot points `(index, value)`. Non-finite values are left out; later
    /// points keep their x position.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values[..self.len()]
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_finite())
            .map(|(i, value)| (i as f64, *value))
            .collect()
    }

    /// Largest finite value, or zero for an empty series.
    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

/// Normal or error look of the status indicator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatusState {
    Normal,
    Error,
}

/// Status dot, status text and last-update timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub state: StatusState,
    pub text: String,
    pub last_update: String,
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self {
            state: StatusState::Normal,
            text: "Connecting".to_string(),
            last_update: "--:--".to_string(),
        }
    }
}

/// Dashboard state: display regions plus the activity log.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment the snapshots come from.
    pub environment: Environment,
    /// Interval between unconditional refreshes.
    pub refresh_interval: Duration,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,

    pub total_collections: ScalarCard,
    pub roi: ScalarCard,
    pub expenses: ScalarCard,
    pub balance: ScalarCard,
    /// `None` until the first snapshot carrying the region arrives
    pub beneficiaries: Option<CardList>,
    pub investment: Option<CardList>,
    /// Created lazily on the first chart update
    pub chart: Option<CollectionChart>,
    pub status: StatusIndicator,

    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            refresh_interval: ui_config.refresh_interval,
            start_time,
            with_background_color: ui_config.with_background_color,

            total_collections: ScalarCard::new("TOTAL COLLECTIONS"),
            roi: ScalarCard::new("RETURN ON INVESTMENT"),
            expenses: ScalarCard::new("TOTAL EXPENSES"),
            balance: ScalarCard::new("ACCOUNT BALANCE"),
            beneficiaries: None,
            investment: None,
            chart: None,
            status: StatusIndicator::default(),

            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
        }
    }

    /// The four scalar cards in display order.
    pub fn scalar_cards(&self) -> [&ScalarCard; 4] {
        [
            &self.total_collections,
            &self.roi,
            &self.expenses,
            &self.balance,
        ]
    }

    pub fn scalar_cards_mut(&mut self) -> [&mut ScalarCard; 4] {
        [
            &mut self.total_collections,
            &mut self.roi,
            &mut self.expenses,
            &mut self.balance,
        ]
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
