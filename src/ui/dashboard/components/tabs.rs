use crate::dashboard::PanelKind;
use crate::ui::dashboard::state::ViewState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs};

pub fn render_tabs(f: &mut Frame, area: Rect, view: &ViewState) {
    let titles: Vec<&str> = PanelKind::ALL.iter().map(|kind| kind.title()).collect();
    let tabs = Tabs::new(titles)
        .select(view.active_index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(tabs, area);
}
