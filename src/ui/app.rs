//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::error_classifier::LogLevel;
use crate::events::{Event as WorkerEvent, EventType, Trigger};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Interval between unconditional refreshes, shown in the info panel.
    pub refresh_interval: Duration,
}

impl UIConfig {
    pub fn new(with_background_color: bool, refresh_interval: Duration) -> Self {
        Self {
            with_background_color,
            refresh_interval,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The dashboard itself.
    Dashboard,
}

/// What the loop should do after a terminal event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Action {
    None,
    Quit,
    Refresh(Trigger),
    SkipSplash,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Exists from the start so that snapshots arriving
    /// during the splash screen are not lost.
    dashboard: Box<DashboardState>,

    /// Receives events from the poller.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Requests immediate refresh cycles from the poller.
    trigger_sender: mpsc::UnboundedSender<Trigger>,

    /// Broadcasts shutdown signal to the poller.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        trigger_sender: mpsc::UnboundedSender<Trigger>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: Box::new(DashboardState::new(environment, Instant::now(), ui_config)),
            event_receiver,
            trigger_sender,
            shutdown_sender,
        }
    }

    /// Ask the poller for an immediate refresh and note it in the activity log.
    fn request_refresh(&mut self, trigger: Trigger) {
        if self.trigger_sender.send(trigger).is_err() {
            self.dashboard.add_event(WorkerEvent::dashboard_with_level(
                "Poller is not running, refresh ignored".to_string(),
                EventType::Error,
                LogLevel::Warn,
            ));
        }
    }

    fn shutdown(&self) {
        let _ = self.shutdown_sender.send(());
    }
}

/// Map a terminal event to an action for the given screen.
fn action_for(screen: Screen, event: &Event) -> Action {
    match event {
        Event::FocusGained => Action::Refresh(Trigger::FocusRegained),
        Event::Key(KeyEvent { kind, .. }) if *kind == event::KeyEventKind::Release => Action::None,
        Event::Key(key) => match (screen, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q')) => Action::Quit,
            // Any other key press will skip the splash screen
            (Screen::Splash, _) => Action::SkipSplash,
            (Screen::Dashboard, KeyCode::Char('r') | KeyCode::Char('R')) => {
                Action::Refresh(Trigger::Manual)
            }
            (Screen::Dashboard, _) => Action::None,
        },
        _ => Action::None,
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.dashboard.add_event(event);
        }
        app.dashboard.update();

        terminal.draw(|f| render(f, app.current_screen, &app.dashboard))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for terminal events
        if event::poll(Duration::from_millis(100))? {
            let terminal_event = event::read()?;
            match action_for(app.current_screen, &terminal_event) {
                Action::None => {}
                Action::Quit => {
                    // Send shutdown signal to the poller
                    app.shutdown();
                    return Ok(());
                }
                Action::SkipSplash => app.current_screen = Screen::Dashboard,
                Action::Refresh(trigger) => app.request_refresh(trigger),
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, state: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, state),
    }
}
