//! Session setup and initialization

use crate::api::{DashboardClient, FetchError};
use crate::environment::Environment;
use crate::events::{Event, Trigger};
use crate::runtime::start_poller;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for poller events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Sends extra refresh triggers (focus regained, manual refresh) to the poller
    pub trigger_sender: mpsc::UnboundedSender<Trigger>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Environment the dashboard reads from
    pub environment: Environment,
    /// Interval between unconditional refreshes
    pub refresh_interval: Duration,
}

/// Sets up a polling session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the API client
/// 2. Sets up the shutdown channel
/// 3. Starts the poller
///
/// # Arguments
/// * `environment` - Environment to read from
/// * `refresh_interval` - Interval between unconditional refreshes
pub fn setup_session(
    environment: Environment,
    refresh_interval: Duration,
) -> Result<SessionData, FetchError> {
    let client = DashboardClient::new(environment.clone())?;

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, trigger_sender, join_handles) = start_poller(
        Arc::new(client),
        refresh_interval,
        shutdown_sender.subscribe(),
    );

    Ok(SessionData {
        event_receiver,
        trigger_sender,
        join_handles,
        shutdown_sender,
        environment,
        refresh_interval,
    })
}
