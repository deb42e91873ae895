//! Session setup and initialization

use crate::api::ApiClient;
use crate::dashboard::{Dashboard, DashboardEvent};
use crate::environment::Environment;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// The service deployment in use
    pub environment: Environment,
    /// Controller owning every panel
    pub dashboard: Dashboard,
    /// Fetch results for the controller
    pub event_receiver: mpsc::Receiver<DashboardEvent>,
}

/// Builds the HTTP client and the dashboard controller.
///
/// Must be called inside the tokio runtime: loads issued later spawn tasks.
pub fn setup_session(environment: Environment) -> Result<SessionData, Box<dyn Error>> {
    let client = ApiClient::new(environment.clone())?;
    let (dashboard, event_receiver) = Dashboard::new(Arc::new(client));
    log::debug!("Session ready for {:?}", environment);
    Ok(SessionData {
        environment,
        dashboard,
        event_receiver,
    })
}
