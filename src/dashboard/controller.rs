//! Dashboard controller: owns every panel, the filters and the detail viewer.
//!
//! Commands start fetches on spawned tasks; results come back as
//! [`DashboardEvent`]s and are applied by [`Dashboard::handle_event`] on the
//! task that owns the controller. A response is applied only while its ticket
//! is still the latest one issued for its panel.

use std::sync::Arc;

use log::{debug, error, warn};
use tokio::sync::mpsc;

use super::command::Command;
use super::detail::DetailViewer;
use super::events::{DashboardEvent, PanelData};
use super::filter::FilterCoordinator;
use super::panel::{Panel, PanelKind, Ticket};
use crate::api::{BillionairesApi, FetchError, QueryParams};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::render;

pub struct Dashboard {
    api: Arc<dyn BillionairesApi>,
    panels: Vec<Panel>,
    filters: FilterCoordinator,
    detail: DetailViewer,
    event_sender: mpsc::Sender<DashboardEvent>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn BillionairesApi>) -> (Self, mpsc::Receiver<DashboardEvent>) {
        let (event_sender, event_receiver) = mpsc::channel::<DashboardEvent>(EVENT_QUEUE_SIZE);
        let dashboard = Self {
            api,
            panels: PanelKind::ALL.iter().map(|k| Panel::new(*k)).collect(),
            filters: FilterCoordinator::new(),
            detail: DetailViewer::default(),
            event_sender,
        };
        (dashboard, event_receiver)
    }

    pub fn panel(&self, kind: PanelKind) -> &Panel {
        &self.panels[kind.index()]
    }

    pub fn filters(&self) -> &FilterCoordinator {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterCoordinator {
        &mut self.filters
    }

    pub fn detail(&self) -> &DetailViewer {
        &self.detail
    }

    /// True when no panel and no detail lookup is waiting for a response.
    pub fn is_settled(&self) -> bool {
        !self.detail.is_loading() && self.panels.iter().all(|p| !p.is_loading())
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Bootstrap => {
                for kind in PanelKind::STARTUP {
                    self.load(kind, None);
                }
            }
            Command::Refresh(kind) => {
                let params = self.panel(kind).last_params().cloned();
                if kind == PanelKind::Search && params.is_none() {
                    debug!("Nothing to refresh, no search has been submitted");
                    return;
                }
                self.load(kind, params);
            }
            Command::SearchSubmitted(text) => {
                let query = text.trim();
                if query.is_empty() {
                    self.panels[PanelKind::Search.index()].reset();
                    return;
                }
                self.load(
                    PanelKind::Search,
                    Some(QueryParams::new().with("q", query)),
                );
            }
            Command::FiltersApplied => {
                let params = self.filters.query_params();
                self.load(PanelKind::Billionaires, Some(params));
            }
            Command::FiltersCleared => {
                self.filters.clear();
                self.load(PanelKind::Billionaires, None);
            }
            Command::RecordSelected(rank) => self.open_detail(rank),
            Command::DetailDismissed => self.detail.dismiss(),
        }
    }

    /// Shows the loading placeholder, then fetches on a spawned task.
    pub fn load(&mut self, kind: PanelKind, params: Option<QueryParams>) -> Ticket {
        let ticket = self.panels[kind.index()].begin_load(params.clone());
        debug!(
            "Loading {} panel from /{} (request #{})",
            kind,
            kind.endpoint(),
            ticket.seq
        );

        let api = Arc::clone(&self.api);
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            let outcome = fetch_panel(api.as_ref(), kind, params.unwrap_or_default()).await;
            if sender
                .send(DashboardEvent::Panel { ticket, outcome })
                .await
                .is_err()
            {
                debug!("Dashboard closed before {} response #{} arrived", kind, ticket.seq);
            }
        });
        ticket
    }

    fn open_detail(&mut self, rank: u32) {
        let seq = self.detail.open(rank);
        debug!("Loading details for rank {} (request #{})", rank, seq);

        let api = Arc::clone(&self.api);
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            let outcome = api.billionaire(rank).await;
            if sender
                .send(DashboardEvent::Detail { seq, rank, outcome })
                .await
                .is_err()
            {
                debug!("Dashboard closed before details for rank {} arrived", rank);
            }
        });
    }

    pub fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Panel { ticket, outcome } => {
                let panel = &mut self.panels[ticket.kind.index()];
                if !panel.is_current(ticket) {
                    debug!(
                        "Discarding stale {} response #{}",
                        ticket.kind, ticket.seq
                    );
                    return;
                }
                match outcome {
                    Ok(data) => {
                        if let PanelData::Countries(countries) = &data {
                            self.filters.set_country_options(countries);
                        }
                        panel.populate(data.cards());
                    }
                    Err(e) => {
                        error!(
                            "Error loading {} panel ({}): {}",
                            ticket.kind,
                            e.kind(),
                            e
                        );
                        panel.fail();
                    }
                }
            }
            DashboardEvent::Detail { seq, rank, outcome } => {
                if !self.detail.is_current(seq) {
                    debug!("Discarding stale detail response for rank {}", rank);
                    return;
                }
                match outcome {
                    Ok(record) => self.detail.show(render::render_detail(&record)),
                    Err(e) if e.is_application_error() => {
                        warn!("Billionaire {} not found: {}", rank, e);
                        self.detail.not_found();
                    }
                    Err(e) => {
                        error!(
                            "Error loading billionaire details for rank {} ({}): {}",
                            rank,
                            e.kind(),
                            e
                        );
                        self.detail.fail();
                    }
                }
            }
        }
    }

    /// Applies events until every outstanding request has been answered.
    pub async fn run_until_settled(&mut self, events: &mut mpsc::Receiver<DashboardEvent>) {
        while !self.is_settled() {
            match events.recv().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
    }
}

async fn fetch_panel(
    api: &dyn BillionairesApi,
    kind: PanelKind,
    params: QueryParams,
) -> Result<PanelData, FetchError> {
    match kind {
        PanelKind::Statistics => api.statistics().await.map(PanelData::Statistics),
        PanelKind::Billionaires => api.billionaires(params).await.map(PanelData::People),
        PanelKind::Search => {
            let query = params.get("q").unwrap_or_default();
            api.search(query).await.map(PanelData::SearchResults)
        }
        PanelKind::Countries => api.countries().await.map(PanelData::Countries),
        PanelKind::Industries => api.industries().await.map(PanelData::Industries),
        PanelKind::Cities => api.cities().await.map(PanelData::Cities),
        PanelKind::AgeGroups => api.age_distribution().await.map(PanelData::AgeGroups),
        PanelKind::Companies => api.companies().await.map(PanelData::Companies),
    }
}
