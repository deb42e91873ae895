//! Fetch-render panel state machine.

use crate::api::QueryParams;
use crate::render::Card;

/// The independently loadable sections of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum PanelKind {
    Statistics,
    Billionaires,
    Countries,
    Industries,
    Search,
    Cities,
    AgeGroups,
    Companies,
}

impl PanelKind {
    pub const ALL: [PanelKind; 8] = [
        PanelKind::Statistics,
        PanelKind::Billionaires,
        PanelKind::Countries,
        PanelKind::Industries,
        PanelKind::Search,
        PanelKind::Cities,
        PanelKind::AgeGroups,
        PanelKind::Companies,
    ];

    /// Panels issued by the bootstrap, all at once.
    pub const STARTUP: [PanelKind; 4] = [
        PanelKind::Statistics,
        PanelKind::Billionaires,
        PanelKind::Countries,
        PanelKind::Industries,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            PanelKind::Statistics => "stats",
            PanelKind::Billionaires => "billionaires",
            PanelKind::Countries => "countries",
            PanelKind::Industries => "industries",
            PanelKind::Search => "search",
            PanelKind::Cities => "cities",
            PanelKind::AgeGroups => "age-distribution",
            PanelKind::Companies => "companies",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PanelKind::Statistics => "Overview",
            PanelKind::Billionaires => "Billionaires",
            PanelKind::Countries => "Countries",
            PanelKind::Industries => "Industries",
            PanelKind::Search => "Search",
            PanelKind::Cities => "Cities",
            PanelKind::AgeGroups => "Age Groups",
            PanelKind::Companies => "Companies",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            PanelKind::Statistics => "statistics",
            PanelKind::Billionaires => "billionaires",
            PanelKind::Countries => "countries",
            PanelKind::Industries => "industries",
            PanelKind::Search => "results",
            PanelKind::Cities => "cities",
            PanelKind::AgeGroups => "age groups",
            PanelKind::Companies => "companies",
        }
    }

    pub fn loading_message(self) -> String {
        match self {
            PanelKind::Search => "Searching...".to_string(),
            kind => format!("Loading {}...", kind.noun()),
        }
    }

    pub fn empty_message(self) -> String {
        format!("No {} found", self.noun())
    }

    pub fn error_message(self) -> String {
        match self {
            PanelKind::Search => "Error performing search".to_string(),
            kind => format!("Error loading {}", kind.noun()),
        }
    }
}

/// Identifies one issued request: the panel and its sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: PanelKind,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Loading,
    /// Always holds at least one card.
    Populated(Vec<Card>),
    Empty,
    Error,
}

#[derive(Debug, Clone)]
pub struct Panel {
    kind: PanelKind,
    state: PanelState,
    latest: u64,
    last_params: Option<QueryParams>,
}

impl Panel {
    pub fn new(kind: PanelKind) -> Self {
        Self {
            kind,
            state: PanelState::Idle,
            latest: 0,
            last_params: None,
        }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn last_params(&self) -> Option<&QueryParams> {
        self.last_params.as_ref()
    }

    /// Shows the loading placeholder and issues the ticket the response must carry.
    pub fn begin_load(&mut self, params: Option<QueryParams>) -> Ticket {
        self.latest += 1;
        self.state = PanelState::Loading;
        self.last_params = params;
        Ticket {
            kind: self.kind,
            seq: self.latest,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.kind == self.kind && ticket.seq == self.latest
    }

    /// Replaces the content with the cards of a successful response.
    pub fn populate(&mut self, cards: Vec<Card>) {
        self.state = if cards.is_empty() {
            PanelState::Empty
        } else {
            PanelState::Populated(cards)
        };
    }

    pub fn fail(&mut self) {
        self.state = PanelState::Error;
    }

    /// Back to idle. Requests still in flight become stale.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.state = PanelState::Idle;
        self.last_params = None;
    }

    pub fn cards(&self) -> &[Card] {
        match &self.state {
            PanelState::Populated(cards) => cards,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == PanelState::Loading
    }

    /// Placeholder text for every state that has no cards.
    pub fn placeholder(&self) -> Option<String> {
        match self.state {
            PanelState::Idle | PanelState::Populated(_) => None,
            PanelState::Loading => Some(self.kind.loading_message()),
            PanelState::Empty => Some(self.kind.empty_message()),
            PanelState::Error => Some(self.kind.error_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CardKind;

    #[test]
    fn messages_are_noun_specific() {
        assert_eq!(
            PanelKind::Billionaires.loading_message(),
            "Loading billionaires..."
        );
        assert_eq!(
            PanelKind::Billionaires.empty_message(),
            "No billionaires found"
        );
        assert_eq!(
            PanelKind::Countries.error_message(),
            "Error loading countries"
        );
        assert_eq!(PanelKind::Search.loading_message(), "Searching...");
        assert_eq!(PanelKind::Search.empty_message(), "No results found");
        assert_eq!(PanelKind::Search.error_message(), "Error performing search");
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, kind) in PanelKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn begin_load_switches_to_loading_before_any_response() {
        let mut panel = Panel::new(PanelKind::Industries);
        panel.populate(vec![Card::new(CardKind::Industry, "Tech")]);

        let ticket = panel.begin_load(None);

        assert_eq!(panel.state(), &PanelState::Loading);
        assert!(panel.cards().is_empty());
        assert_eq!(panel.placeholder().as_deref(), Some("Loading industries..."));
        assert!(panel.is_current(ticket));
    }

    #[test]
    fn only_the_latest_ticket_is_current() {
        let mut panel = Panel::new(PanelKind::Billionaires);
        let first = panel.begin_load(None);
        let second = panel.begin_load(Some(QueryParams::new().with("gender", "F")));

        assert!(!panel.is_current(first));
        assert!(panel.is_current(second));
        assert_eq!(panel.last_params().and_then(|p| p.get("gender")), Some("F"));

        panel.reset();
        assert!(!panel.is_current(second));
        assert_eq!(panel.state(), &PanelState::Idle);
    }

    #[test]
    fn zero_cards_means_empty() {
        let mut panel = Panel::new(PanelKind::Countries);
        panel.begin_load(None);
        panel.populate(Vec::new());
        assert_eq!(panel.state(), &PanelState::Empty);
        assert_eq!(panel.placeholder().as_deref(), Some("No countries found"));
    }

    #[test]
    fn tickets_do_not_cross_panels() {
        let mut countries = Panel::new(PanelKind::Countries);
        let mut industries = Panel::new(PanelKind::Industries);
        let ticket = countries.begin_load(None);
        industries.begin_load(None);
        assert!(!industries.is_current(ticket));
    }
}
