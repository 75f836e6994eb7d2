//! Dashboard snapshot polling
//!
//! One cycle per trigger: start-up, every refresh interval, focus regained
//! and manual refresh. Cycles run as independent tasks and may overlap; the
//! UI applies results in arrival order, so the last response wins.

use super::core::EventSender;
use crate::api::DashboardApi;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{Event, EventType, Trigger};
use crate::logging::log_diagnostic;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct SnapshotPoller {
    api: Arc<dyn DashboardApi>,
    event_sender: EventSender,
    classifier: ErrorClassifier,
}

impl SnapshotPoller {
    pub fn new(api: Arc<dyn DashboardApi>, event_sender: EventSender) -> Self {
        Self {
            api,
            event_sender,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Run a single refresh cycle. Returns whether a snapshot was delivered.
    pub async fn poll_once(&self, trigger: Trigger) -> bool {
        self.event_sender
            .send_event(Event::poll_started(trigger))
            .await;

        match self.api.fetch_snapshot().await {
            Ok(snapshot) => {
                self.event_sender
                    .send_event(Event::poll_succeeded(snapshot))
                    .await;
                true
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                log_diagnostic(log_level, &format!("Error loading dashboard: {}", e));
                self.event_sender
                    .send_event(Event::poll_failed(e.to_string(), log_level))
                    .await;
                false
            }
        }
    }

    /// Start a refresh cycle in the background. Nothing waits for it.
    pub fn spawn_cycle(&self, trigger: Trigger) -> JoinHandle<bool> {
        let poller = self.clone();
        tokio::spawn(async move { poller.poll_once(trigger).await })
    }

    /// Poll on every interval tick (the first tick fires immediately) and on every
    /// external trigger until shutdown.
    pub fn run(
        self,
        interval: Duration,
        mut triggers: mpsc::UnboundedReceiver<Trigger>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.event_sender
                .send_poller_event(
                    format!(
                        "Polling {} every {}s",
                        self.api.environment().api_url(),
                        interval.as_secs()
                    ),
                    EventType::Waiting,
                    LogLevel::Info,
                )
                .await;

            let mut ticker = tokio::time::interval(interval);
            let mut started = false;
            loop {
                tokio::select! {
                    _ = shutdown.recv() => break,
                    _ = ticker.tick() => {
                        let trigger = if started { Trigger::Interval } else { Trigger::Startup };
                        started = true;
                        self.spawn_cycle(trigger);
                    }
                    Some(trigger) = triggers.recv() => {
                        self.spawn_cycle(trigger);
                    }
                }
            }
        })
    }
}
