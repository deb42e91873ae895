//! Filter controls and search box

use crate::dashboard::{Dashboard, PanelKind};
use crate::ui::dashboard::state::{InputMode, ViewState};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

fn control<'a>(key: &'a str, label: &'a str, value: String) -> Vec<Span<'a>> {
    vec![
        Span::styled(format!("[{}] ", key), Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}: ", label)),
        Span::styled(
            value,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ]
}

pub fn render_filter_bar(f: &mut Frame, area: Rect, dashboard: &Dashboard, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let filters = dashboard.filters();
    let mut spans = Vec::new();
    spans.extend(control("c", "Country", filters.country_label()));
    spans.extend(control("g", "Gender", filters.gender_label().to_string()));
    spans.extend(control("s", "Self-Made", filters.self_made_label().to_string()));
    spans.push(Span::styled(
        "[a] apply  [x] clear",
        Style::default().fg(Color::DarkGray),
    ));
    let filter_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Filters "));
    f.render_widget(filter_bar, chunks[0]);

    let (text, style) = match &view.input_mode {
        InputMode::Search(text) => (
            format!("{}_", text),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Normal => (
            dashboard
                .panel(PanelKind::Search)
                .last_params()
                .and_then(|p| p.get("q"))
                .unwrap_or("press / to search")
                .to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let search = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(" Search "));
    f.render_widget(search, chunks[1]);
}
