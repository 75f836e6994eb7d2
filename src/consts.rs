pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between the poller and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Currency label prefixed to every amount
    pub const CURRENCY_LABEL: &str = "MVR";

    /// Placeholder shown for a card region with nothing to show
    pub const NO_DATA_PLACEHOLDER: &str = "No data";

    /// Literal shown in place of values after a failed refresh
    pub const ERROR_MARKER: &str = "Error";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Polling configuration
    pub mod polling {
        use std::time::Duration;

        /// Interval between unconditional dashboard refreshes (seconds)
        pub const REFRESH_INTERVAL_SECS: u64 = 60;

        /// Helper function to get the default refresh interval
        pub const fn refresh_interval() -> Duration {
            Duration::from_secs(REFRESH_INTERVAL_SECS)
        }
    }

    /// HTTP transport configuration
    pub mod http {
        use std::time::Duration;

        /// Header that bypasses the tunnel's interstitial browser warning page
        pub const TUNNEL_WARNING_HEADER: &str = "ngrok-skip-browser-warning";

        /// Value sent with [`TUNNEL_WARNING_HEADER`]
        pub const TUNNEL_WARNING_VALUE: &str = "true";

        /// Connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
