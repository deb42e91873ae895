//! View state for the terminal dashboard
//!
//! Which panel is shown, what is selected in each, and whether the search
//! box is being edited. Panel content itself lives in the controller.

use crate::dashboard::PanelKind;
use crate::ui::app::UIConfig;

const PANEL_COUNT: usize = PanelKind::ALL.len();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Editing the search box; holds the text typed so far.
    Search(String),
}

#[derive(Debug)]
pub struct ViewState {
    /// API root shown in the header.
    pub api_url: String,
    /// Whether to enable background colors
    pub with_background_color: bool,
    pub input_mode: InputMode,
    active: usize,
    selections: [usize; PANEL_COUNT],
    /// First visible line of the detail popup.
    detail_scroll: u16,
}

impl ViewState {
    pub fn new(api_url: String, ui_config: &UIConfig) -> Self {
        Self {
            api_url,
            with_background_color: ui_config.with_background_color,
            input_mode: InputMode::Normal,
            active: 0,
            selections: [0; PANEL_COUNT],
            detail_scroll: 0,
        }
    }

    pub fn active_kind(&self) -> PanelKind {
        PanelKind::ALL[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn show(&mut self, kind: PanelKind) {
        self.active = kind.index();
    }

    pub fn next_panel(&mut self) -> PanelKind {
        self.active = (self.active + 1) % PANEL_COUNT;
        self.active_kind()
    }

    pub fn previous_panel(&mut self) -> PanelKind {
        self.active = (self.active + PANEL_COUNT - 1) % PANEL_COUNT;
        self.active_kind()
    }

    pub fn selected(&self, kind: PanelKind) -> usize {
        self.selections[kind.index()]
    }

    pub fn select_next(&mut self, kind: PanelKind, len: usize) {
        let selected = &mut self.selections[kind.index()];
        if len > 0 && *selected + 1 < len {
            *selected += 1;
        }
    }

    pub fn select_previous(&mut self, kind: PanelKind) {
        let selected = &mut self.selections[kind.index()];
        *selected = selected.saturating_sub(1);
    }

    /// Keeps the selection inside a list that may have shrunk.
    pub fn clamp_selection(&mut self, kind: PanelKind, len: usize) {
        let selected = &mut self.selections[kind.index()];
        *selected = (*selected).min(len.saturating_sub(1));
    }

    pub fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    /// Moves the detail popup down by `lines`, stopping at the last line.
    pub fn scroll_detail_down(&mut self, lines: u16, line_count: usize) {
        let last = u16::try_from(line_count.saturating_sub(1)).unwrap_or(u16::MAX);
        self.detail_scroll = self.detail_scroll.saturating_add(lines).min(last);
    }

    pub fn scroll_detail_up(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }

    pub fn reset_detail_scroll(&mut self) {
        self.detail_scroll = 0;
    }

    pub fn is_editing_search(&self) -> bool {
        matches!(self.input_mode, InputMode::Search(_))
    }

    pub fn begin_search(&mut self, initial: String) {
        self.input_mode = InputMode::Search(initial);
    }

    pub fn push_search_char(&mut self, c: char) {
        if let InputMode::Search(text) = &mut self.input_mode {
            text.push(c);
        }
    }

    pub fn pop_search_char(&mut self) {
        if let InputMode::Search(text) = &mut self.input_mode {
            text.pop();
        }
    }

    /// Leaves edit mode, returning the typed text.
    pub fn finish_search(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.input_mode, InputMode::Normal) {
            InputMode::Search(text) => Some(text),
            InputMode::Normal => None,
        }
    }

    pub fn cancel_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
