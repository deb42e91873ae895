//! Panel orchestration: per-panel state, filters, detail lookups and the
//! controller that ties them to the API.

mod command;
mod controller;
pub mod detail;
mod events;
pub mod filter;
pub mod panel;

pub use command::Command;
pub use controller::Dashboard;
pub use detail::{DetailState, DetailViewer};
pub use events::{DashboardEvent, PanelData};
pub use filter::{CountryOption, FilterControls, FilterCoordinator};
pub use panel::{Panel, PanelKind, PanelState, Ticket};
