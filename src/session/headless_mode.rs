//! Headless mode execution
//!
//! One-shot reports: issue exactly one panel (or detail) request, wait for it
//! to settle, print the result to stdout.

use super::SessionData;
use crate::dashboard::{
    Command, Dashboard, DashboardEvent, DetailState, FilterControls, PanelKind, PanelState,
};
use crate::print_cmd_warn;
use crate::render::{html, text};
use std::error::Error;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

/// What a one-shot command asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// An unparameterised panel.
    Panel(PanelKind),
    /// The billionaires list under the given filter controls.
    Billionaires(FilterControls),
    Search(String),
    Detail(u32),
}

/// Output of a settled report, and whether it represents a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutput {
    pub body: String,
    pub succeeded: bool,
}

/// Issues the report's request and applies events until it settles.
pub async fn execute_report(
    dashboard: &mut Dashboard,
    events: &mut mpsc::Receiver<DashboardEvent>,
    report: &Report,
) {
    match report {
        Report::Panel(kind) => dashboard.dispatch(Command::Refresh(*kind)),
        Report::Billionaires(controls) => {
            *dashboard.filters_mut().controls_mut() = controls.clone();
            dashboard.dispatch(Command::FiltersApplied);
        }
        Report::Search(query) => dashboard.dispatch(Command::SearchSubmitted(query.clone())),
        Report::Detail(rank) => dashboard.dispatch(Command::RecordSelected(*rank)),
    }
    dashboard.run_until_settled(events).await;
}

/// Projects the settled state the report asked for.
pub fn render_report(dashboard: &Dashboard, report: &Report, format: OutputFormat) -> ReportOutput {
    if let Report::Detail(_) = report {
        let viewer = dashboard.detail();
        let body = match format {
            OutputFormat::Text => text::detail(viewer),
            OutputFormat::Html => html::detail(viewer),
        };
        return ReportOutput {
            body,
            succeeded: matches!(viewer.state(), DetailState::Showing(_)),
        };
    }

    let kind = match report {
        Report::Panel(kind) => *kind,
        Report::Billionaires(_) => PanelKind::Billionaires,
        Report::Search(_) | Report::Detail(_) => PanelKind::Search,
    };
    let panel = dashboard.panel(kind);
    let body = match format {
        OutputFormat::Text => text::panel(panel),
        OutputFormat::Html => html::panel(panel),
    };
    let succeeded = !matches!(panel.state(), PanelState::Error | PanelState::Idle);
    ReportOutput { body, succeeded }
}

/// Runs one report in headless mode
///
/// # Returns
/// * `Ok(true)` - the report loaded (possibly empty)
/// * `Ok(false)` - the service failed or nothing was requested
/// * `Err` - interrupted
pub async fn run_headless_mode(
    session: SessionData,
    report: Report,
    format: OutputFormat,
) -> Result<bool, Box<dyn Error>> {
    let SessionData {
        mut dashboard,
        mut event_receiver,
        environment,
    } = session;
    log::debug!("Running {:?} against {}", report, environment.api_url());

    tokio::select! {
        _ = execute_report(&mut dashboard, &mut event_receiver, &report) => {}
        _ = tokio::signal::ctrl_c() => {
            return Err(Box::from("Interrupted before the service answered"));
        }
    }

    if let Report::Search(query) = &report {
        if query.trim().is_empty() {
            print_cmd_warn!("Nothing to search", "Pass a non-empty name or part of one");
            return Ok(false);
        }
    }

    let output = render_report(&dashboard, &report, format);
    println!("{}", output.body);
    Ok(output.succeeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FetchError, MockBillionairesApi};
    use crate::model::{DetailRecord, PersonRecord};
    use std::sync::Arc;

    #[tokio::test]
    async fn list_report_sends_only_set_filters() {
        let mut api = MockBillionairesApi::new();
        api.expect_billionaires()
            .withf(|params| {
                params.len() == 3
                    && params.get("country") == Some("Testland")
                    && params.get("limit") == Some("5")
                    && params.get("offset") == Some("10")
            })
            .times(1)
            .returning(|_| {
                Ok(vec![PersonRecord {
                    rank: 1,
                    person_name: "A & B".into(),
                    final_worth: Some(1_000_000.0),
                    ..PersonRecord::default()
                }])
            });
        let (mut dashboard, mut events) = Dashboard::new(Arc::new(api));
        let report = Report::Billionaires(FilterControls {
            country: "Testland".into(),
            limit: "5".into(),
            offset: "10".into(),
            ..FilterControls::default()
        });

        execute_report(&mut dashboard, &mut events, &report).await;
        let output = render_report(&dashboard, &report, OutputFormat::Html);

        assert!(output.succeeded);
        assert!(output.body.contains("<h3>A &amp; B</h3>"));
        assert!(output.body.contains("$1000.0 Billion"));
    }

    #[tokio::test]
    async fn failed_panel_reports_generic_error() {
        let mut api = MockBillionairesApi::new();
        api.expect_industries().returning(|| {
            Err(FetchError::Http {
                status: 502,
                message: "Bad Gateway".into(),
            })
        });
        let (mut dashboard, mut events) = Dashboard::new(Arc::new(api));
        let report = Report::Panel(PanelKind::Industries);

        execute_report(&mut dashboard, &mut events, &report).await;
        let output = render_report(&dashboard, &report, OutputFormat::Text);

        assert!(!output.succeeded);
        assert_eq!(output.body, "== Industries ==\nError loading industries");
    }

    #[tokio::test]
    async fn detail_report_prints_sections() {
        let mut api = MockBillionairesApi::new();
        api.expect_billionaire().returning(|rank| {
            Ok(DetailRecord {
                person: PersonRecord {
                    rank,
                    person_name: "Jane Doe".into(),
                    ..PersonRecord::default()
                },
                ..DetailRecord::default()
            })
        });
        let (mut dashboard, mut events) = Dashboard::new(Arc::new(api));
        let report = Report::Detail(3);

        execute_report(&mut dashboard, &mut events, &report).await;
        let output = render_report(&dashboard, &report, OutputFormat::Text);

        assert!(output.succeeded);
        assert!(output.body.starts_with("Detailed Information for Jane Doe"));
        assert!(output.body.contains("\n\nCountry Statistics\n"));
        assert!(output.body.contains("  Rank: #3"));
    }

    #[tokio::test]
    async fn blank_search_issues_no_request() {
        let api = MockBillionairesApi::new();
        let (mut dashboard, mut events) = Dashboard::new(Arc::new(api));
        let report = Report::Search("  ".into());

        execute_report(&mut dashboard, &mut events, &report).await;
        let output = render_report(&dashboard, &report, OutputFormat::Text);

        assert!(!output.succeeded);
        assert_eq!(
            dashboard.panel(PanelKind::Search).state(),
            &PanelState::Idle
        );
    }
}
