//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_log_location, print_session_starting},
};
use crate::config::get_app_dir;
use crate::consts::cli_consts::ui::LOG_FILE_NAME;
use crate::logging;
use crate::print_cmd_warn;
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the interactive dashboard.
///
/// Diagnostics go to a log file so they never draw over the screen. The
/// terminal is restored even when the UI loop fails.
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.environment.api_url());

    let log_path = get_app_dir()?.join(LOG_FILE_NAME);
    match logging::init_file(&log_path) {
        Ok(()) => print_session_log_location(&log_path.display().to_string()),
        Err(e) => print_cmd_warn!("Diagnostics disabled", "{}", e),
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(
        session.environment,
        session.dashboard,
        session.event_receiver,
        UIConfig::new(with_background),
    );
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    print_session_exit_success();
    Ok(())
}
