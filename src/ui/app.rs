//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::input_poll;
use crate::dashboard::{Command, Dashboard, DashboardEvent, PanelKind, PanelState};
use crate::environment::Environment;
use crate::ui::dashboard::components::detail::detail_line_count;
use crate::ui::dashboard::{ViewState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use tokio::sync::mpsc;

/// Lines moved by PgUp/PgDn in the detail popup.
const DETAIL_PAGE: u16 = 10;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// Panels, filters and the detail viewer.
    dashboard: Dashboard,

    /// Receives fetch results from spawned tasks.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    view: ViewState,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        dashboard: Dashboard,
        event_receiver: mpsc::Receiver<DashboardEvent>,
        ui_config: UIConfig,
    ) -> Self {
        let view = ViewState::new(environment.api_url(), &ui_config);
        Self {
            dashboard,
            event_receiver,
            view,
        }
    }

    /// Issues the startup panels.
    pub fn start(&mut self) {
        self.dashboard.dispatch(Command::Bootstrap);
    }

    /// Applies every fetch result that has arrived so far.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.handle_event(event);
        }
        for kind in PanelKind::ALL {
            let len = self.dashboard.panel(kind).cards().len();
            self.view.clamp_selection(kind, len);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }
        if self.view.is_editing_search() {
            self.handle_search_key(key);
            return KeyOutcome::Continue;
        }
        if self.dashboard.detail().is_visible() {
            let line_count = detail_line_count(self.dashboard.detail());
            match key.code {
                KeyCode::Char('q') => return KeyOutcome::Quit,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                    self.view.reset_detail_scroll();
                    self.dashboard.dispatch(Command::DetailDismissed)
                }
                KeyCode::Down | KeyCode::Char('j') => self.view.scroll_detail_down(1, line_count),
                KeyCode::Up | KeyCode::Char('k') => self.view.scroll_detail_up(1),
                KeyCode::PageDown => self.view.scroll_detail_down(DETAIL_PAGE, line_count),
                KeyCode::PageUp => self.view.scroll_detail_up(DETAIL_PAGE),
                _ => {}
            }
            return KeyOutcome::Continue;
        }

        let active = self.view.active_kind();
        match key.code {
            KeyCode::Char('q') => return KeyOutcome::Quit,
            KeyCode::Tab | KeyCode::Right => {
                let kind = self.view.next_panel();
                self.visit(kind);
            }
            KeyCode::BackTab | KeyCode::Left => {
                let kind = self.view.previous_panel();
                self.visit(kind);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.dashboard.panel(active).cards().len();
                self.view.select_next(active, len);
            }
            KeyCode::Up | KeyCode::Char('k') => self.view.select_previous(active),
            KeyCode::Enter => {
                let selected = self.view.selected(active);
                let target = self
                    .dashboard
                    .panel(active)
                    .cards()
                    .get(selected)
                    .and_then(|card| card.target);
                if let Some(rank) = target {
                    self.view.reset_detail_scroll();
                    self.dashboard.dispatch(Command::RecordSelected(rank));
                }
            }
            KeyCode::Char('/') => {
                let current = self
                    .dashboard
                    .panel(PanelKind::Search)
                    .last_params()
                    .and_then(|p| p.get("q"))
                    .unwrap_or_default()
                    .to_string();
                self.view.begin_search(current);
            }
            KeyCode::Char('c') => self.dashboard.filters_mut().cycle_country(),
            KeyCode::Char('g') => self.dashboard.filters_mut().cycle_gender(),
            KeyCode::Char('s') => self.dashboard.filters_mut().cycle_self_made(),
            KeyCode::Char('a') => {
                self.view.show(PanelKind::Billionaires);
                self.dashboard.dispatch(Command::FiltersApplied);
            }
            KeyCode::Char('x') => {
                self.view.show(PanelKind::Billionaires);
                self.dashboard.dispatch(Command::FiltersCleared);
            }
            KeyCode::Char('r') => self.dashboard.dispatch(Command::Refresh(active)),
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Some(text) = self.view.finish_search() {
                    self.view.show(PanelKind::Search);
                    self.dashboard.dispatch(Command::SearchSubmitted(text));
                }
            }
            KeyCode::Esc => self.view.cancel_search(),
            KeyCode::Backspace => self.view.pop_search_char(),
            KeyCode::Char(c) => self.view.push_search_char(c),
            _ => {}
        }
    }

    /// Panels outside the startup set load the first time they are shown.
    fn visit(&mut self, kind: PanelKind) {
        let never_loaded = self.dashboard.panel(kind).state() == &PanelState::Idle;
        if never_loaded && kind != PanelKind::Search && !PanelKind::STARTUP.contains(&kind) {
            self.dashboard.dispatch(Command::Refresh(kind));
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    app.start();

    // UI event loop
    loop {
        app.drain_events();
        terminal.draw(|f| render_dashboard(f, &app.dashboard, &app.view))?;

        // Poll for key events
        if event::poll(input_poll())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}
