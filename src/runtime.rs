//! Runtime wiring for the snapshot poller

use crate::api::DashboardApi;
use crate::events::{Event, Trigger};
use crate::workers::core::EventSender;
use crate::workers::poller::SnapshotPoller;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the poller and hand back the channels the UI talks to it through.
pub fn start_poller(
    api: Arc<dyn DashboardApi>,
    refresh_interval: Duration,
    shutdown: broadcast::Receiver<()>,
) -> (
    mpsc::Receiver<Event>,
    mpsc::UnboundedSender<Trigger>,
    Vec<JoinHandle<()>>,
) {
    let (event_sender, event_receiver) =
        mpsc::channel::<Event>(crate::consts::cli_consts::EVENT_QUEUE_SIZE);
    let (trigger_sender, trigger_receiver) = mpsc::unbounded_channel::<Trigger>();

    let poller = SnapshotPoller::new(api, EventSender::new(event_sender));
    let handle = poller.run(refresh_interval, trigger_receiver, shutdown);

    (event_receiver, trigger_sender, vec![handle])
}
