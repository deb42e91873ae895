//! Dashboard header component
//!
//! Renders the title, the API root and a loading indicator

use crate::dashboard::{Dashboard, PanelKind};
use crate::ui::dashboard::state::ViewState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    dashboard: &Dashboard,
    view: &ViewState,
) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = Paragraph::new(format!(
        "BILLIONAIRES DASHBOARD v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let loading = PanelKind::ALL
        .iter()
        .filter(|kind| dashboard.panel(**kind).is_loading())
        .count();
    let (status, color) = if loading > 0 {
        (format!("{} loading | {}", loading, view.api_url), Color::LightYellow)
    } else {
        (view.api_url.clone(), Color::DarkGray)
    };
    let status = Paragraph::new(status)
        .alignment(Alignment::Right)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(status, header_chunks[1]);
}
