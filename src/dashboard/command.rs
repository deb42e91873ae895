use super::panel::PanelKind;

/// User intents the dashboard reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Issue every startup panel concurrently.
    Bootstrap,
    /// Re-issue a panel with the parameters of its last load.
    Refresh(PanelKind),
    SearchSubmitted(String),
    FiltersApplied,
    FiltersCleared,
    RecordSelected(u32),
    DetailDismissed,
}
