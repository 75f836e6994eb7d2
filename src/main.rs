mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod format;
mod logging;
mod runtime;
mod session;
mod snapshot;
mod ui;
mod workers;

use crate::api::{DashboardApi, DashboardClient};
use crate::config::{Config, get_config_path};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live dashboard
    Start {
        /// Base URL of the dashboard API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Seconds between unconditional refreshes
        #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
        refresh_secs: Option<u64>,

        /// Print events and a plain-text summary instead of drawing the TUI
        #[arg(long, action = ArgAction::SetTrue)]
        headless: bool,

        /// Paint a solid background behind the dashboard
        #[arg(long = "with-background", action = ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Fetch the dashboard once and print it
    Fetch {
        /// Base URL of the dashboard API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print the raw snapshot as JSON
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Query the reporting server's health endpoint
    Health {
        /// Base URL of the dashboard API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Save the API endpoint to the configuration file
    SetEndpoint {
        /// Base URL of the dashboard API
        #[arg(long, value_name = "URL")]
        api_url: String,

        /// Seconds between unconditional refreshes
        #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
        refresh_secs: Option<u64>,
    },
    /// Delete the configuration file
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_var = std::env::var("DASHBOARD_ENVIRONMENT").ok();
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            api_url,
            refresh_secs,
            headless,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let environment =
                config.resolve_environment(api_url.as_deref(), environment_var.as_deref())?;
            let refresh_interval = config.resolve_refresh_interval(refresh_secs);

            let session = setup_session(environment, refresh_interval)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Fetch { api_url, json } => {
            let config = Config::load_or_default(&config_path)?;
            let environment =
                config.resolve_environment(api_url.as_deref(), environment_var.as_deref())?;
            let refresh_interval = config.resolve_refresh_interval(None);
            let client = DashboardClient::new(environment.clone())?;

            let snapshot = match client.fetch_snapshot().await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    print_cmd_error!("Error loading dashboard", &e.to_string());
                    return Err(e.into());
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                let mut state = DashboardState::new(
                    environment,
                    Instant::now(),
                    UIConfig::new(false, refresh_interval),
                );
                state.apply_snapshot(&snapshot, chrono::Local::now());
                for line in state.summary_lines() {
                    println!("{}", line);
                }
            }
            Ok(())
        }
        Command::Health { api_url } => {
            let config = Config::load_or_default(&config_path)?;
            let environment =
                config.resolve_environment(api_url.as_deref(), environment_var.as_deref())?;
            let client = DashboardClient::new(environment.clone())?;

            match client.health().await {
                Ok(health) if health.is_healthy() => {
                    print_cmd_success!(
                        "Reporting server is healthy",
                        "{} (data file present: {}, cache active: {})",
                        environment.api_url(),
                        health.file_exists,
                        health.cache_active
                    );
                    Ok(())
                }
                Ok(health) => {
                    print_cmd_warn!(
                        "Reporting server is unhealthy",
                        "status: {}, data file present: {}, cache active: {}",
                        health.status,
                        health.file_exists,
                        health.cache_active
                    );
                    Err(Box::from(format!("Server reported status '{}'", health.status)))
                }
                Err(e) => {
                    print_cmd_error!("Health check failed", &e.to_string());
                    Err(e.into())
                }
            }
        }
        Command::SetEndpoint {
            api_url,
            refresh_secs,
        } => {
            // Validate before persisting
            let environment = api_url
                .parse::<environment::Environment>()
                .map_err(|_| format!("Invalid API URL: {}", api_url))?;

            let existing = Config::load_or_default(&config_path).unwrap_or_default();
            let config = Config::new(
                Some(environment.api_url()),
                refresh_secs.or(existing.refresh_interval_secs),
            );
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_info!(
                "Endpoint saved",
                "{} -> {}",
                environment.api_url(),
                config_path.display()
            );
            Ok(())
        }
        Command::ClearConfig => {
            println!("Clearing dashboard configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
