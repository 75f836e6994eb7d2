//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use std::error::Error;
use std::time::Instant;

/// Runs the dashboard in headless mode
///
/// Every displayable poller event is printed as it arrives. When a refresh
/// cycle finishes, the full dashboard is printed as plain text. Runs until
/// Ctrl+C.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let mut state = DashboardState::new(
        session.environment.clone(),
        Instant::now(),
        UIConfig::new(false, session.refresh_interval),
    );

    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
                let finished_cycle = event.outcome.is_some();
                state.add_event(event);
                state.update();
                if finished_cycle {
                    for line in state.summary_lines() {
                        println!("  {}", line);
                    }
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
