//! Dashboard main renderer

use super::components::{detail, filter_bar, footer, header, panel_view, tabs};
use super::state::ViewState;
use crate::dashboard::Dashboard;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, dashboard: &Dashboard, view: &ViewState) {
    if view.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], dashboard, view);
    tabs::render_tabs(f, main_chunks[1], view);
    filter_bar::render_filter_bar(f, main_chunks[2], dashboard, view);
    panel_view::render_panel(
        f,
        main_chunks[3],
        dashboard.panel(view.active_kind()),
        view,
    );
    footer::render_footer(
        f,
        main_chunks[4],
        view,
        dashboard.detail().is_visible(),
    );

    if dashboard.detail().is_visible() {
        detail::render_detail(f, f.area(), dashboard.detail(), view.detail_scroll());
    }
}
