pub mod cli_consts {
    //! Client Configuration Constants
    //!
    //! Tunables for the dashboard controller, the HTTP adapter and the terminal UI.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// Capacity of the channel carrying fetch completions back to the controller.
    /// Larger than the number of panels so a full bootstrap never blocks a fetch task.
    pub const EVENT_QUEUE_SIZE: usize = 64;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod network {
        use std::time::Duration;

        /// Upper bound on establishing a TCP connection (milliseconds).
        /// Whole-request timeouts are left to the transport.
        pub const CONNECT_TIMEOUT_MS: u64 = 10_000;

        pub const fn connect_timeout() -> Duration {
            Duration::from_millis(CONNECT_TIMEOUT_MS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the UI loop waits for a key press before redrawing.
        pub const INPUT_POLL_MS: u64 = 100;

        pub const fn input_poll() -> Duration {
            Duration::from_millis(INPUT_POLL_MS)
        }

        /// Name of the diagnostics log written while the TUI owns the terminal.
        pub const LOG_FILE_NAME: &str = "dashboard.log";
    }
}
