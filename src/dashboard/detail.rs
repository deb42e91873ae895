//! Detail viewer for a single record.

use crate::render::Disclosure;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Hidden,
    Loading { rank: u32 },
    Showing(Disclosure),
    NotFound,
    Failed,
}

#[derive(Debug, Clone)]
pub struct DetailViewer {
    state: DetailState,
    latest: u64,
}

impl Default for DetailViewer {
    fn default() -> Self {
        Self {
            state: DetailState::Hidden,
            latest: 0,
        }
    }
}

impl DetailViewer {
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state != DetailState::Hidden
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading { .. })
    }

    pub fn open(&mut self, rank: u32) -> u64 {
        self.latest += 1;
        self.state = DetailState::Loading { rank };
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest && self.is_loading()
    }

    pub fn show(&mut self, disclosure: Disclosure) {
        self.state = DetailState::Showing(disclosure);
    }

    pub fn not_found(&mut self) {
        self.state = DetailState::NotFound;
    }

    pub fn fail(&mut self) {
        self.state = DetailState::Failed;
    }

    /// Hides the viewer; a lookup still in flight is ignored when it lands.
    pub fn dismiss(&mut self) {
        self.latest += 1;
        self.state = DetailState::Hidden;
    }

    pub fn message(&self) -> Option<&'static str> {
        match self.state {
            DetailState::Loading { .. } => Some("Loading details..."),
            DetailState::NotFound => Some("Billionaire not found"),
            DetailState::Failed => Some("Error loading details"),
            DetailState::Hidden | DetailState::Showing(_) => None,
        }
    }
}
