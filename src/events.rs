//! Event System
//!
//! Types and implementations for poller events and logging

use crate::error_classifier::LogLevel;
use crate::logging::should_log_with_env;
use crate::snapshot::DashboardSnapshot;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that fetches dashboard snapshots from the reporting server.
    Poller,
    /// The UI loop itself (key presses, focus changes).
    Dashboard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

/// What caused a refresh cycle to start.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Trigger {
    #[strum(to_string = "startup")]
    Startup,
    #[strum(to_string = "interval")]
    Interval,
    #[strum(to_string = "focus regained")]
    FocusRegained,
    #[strum(to_string = "manual refresh")]
    Manual,
}

/// Result of one refresh cycle, carried to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Snapshot(Box<DashboardSnapshot>),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Set on the final event of a refresh cycle
    pub outcome: Option<PollOutcome>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            outcome: None,
        }
    }

    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Poller, msg, event_type, log_level)
    }

    pub fn dashboard_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Dashboard, msg, event_type, log_level)
    }

    /// A refresh cycle has started.
    pub fn poll_started(trigger: Trigger) -> Self {
        Self::poller_with_level(
            format!("Refreshing dashboard ({})", trigger),
            EventType::Refresh,
            LogLevel::Debug,
        )
    }

    /// A refresh cycle produced a snapshot.
    pub fn poll_succeeded(snapshot: DashboardSnapshot) -> Self {
        let mut event = Self::poller_with_level(
            "Dashboard updated".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        event.outcome = Some(PollOutcome::Snapshot(Box::new(snapshot)));
        event
    }

    /// A refresh cycle failed for any reason.
    pub fn poll_failed(msg: String, log_level: LogLevel) -> Self {
        let mut event = Self::poller_with_level(
            format!("Error loading dashboard: {}", msg),
            EventType::Error,
            log_level,
        );
        event.outcome = Some(PollOutcome::Failed);
        event
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_event_carries_outcome() {
        let event = Event::poll_failed("HTTP 500".to_string(), LogLevel::Warn);
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.outcome, Some(PollOutcome::Failed));
        assert!(event.msg.contains("HTTP 500"));
        assert!(event.to_string().starts_with("Error ["));
    }

    #[test]
    fn test_started_event_names_trigger() {
        let event = Event::poll_started(Trigger::FocusRegained);
        assert_eq!(event.event_type, EventType::Refresh);
        assert!(event.msg.contains("focus regained"));
        assert!(event.outcome.is_none());
    }
}
