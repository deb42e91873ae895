//! Body of the active panel: placeholder, statistics table or card list

use crate::dashboard::{Panel, PanelKind, PanelState};
use crate::render::Card;
use crate::ui::dashboard::state::ViewState;
use crate::ui::dashboard::utils::{card_lines, placeholder_color};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{
    Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Row, Table, Wrap,
};

pub fn render_panel(f: &mut Frame, area: Rect, panel: &Panel, view: &ViewState) {
    let kind = panel.kind();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", kind.title()));

    match panel.state() {
        PanelState::Populated(cards) if kind == PanelKind::Statistics => {
            render_stat_table(f, area, cards, block)
        }
        PanelState::Populated(cards) => {
            let items: Vec<ListItem> = cards
                .iter()
                .map(|card| ListItem::new(card_lines(card)))
                .collect();
            let list = List::new(items)
                .block(block.title_bottom(format!(" {} records ", cards.len())))
                .highlight_style(Style::default().bg(Color::Rgb(30, 40, 50)))
                .highlight_symbol("▶ ");
            let mut state = ListState::default().with_selected(Some(view.selected(kind)));
            f.render_stateful_widget(list, area, &mut state);
        }
        state => {
            let text = panel.placeholder().unwrap_or_else(|| idle_hint(kind));
            let placeholder = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(placeholder_color(state)))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(placeholder, area);
        }
    }
}

fn idle_hint(kind: PanelKind) -> String {
    match kind {
        PanelKind::Search => "Press / to search by name".to_string(),
        _ => "Press r to load".to_string(),
    }
}

fn render_stat_table(f: &mut Frame, area: Rect, cards: &[Card], block: Block) {
    let rows: Vec<Row> = cards
        .iter()
        .map(|card| {
            Row::new(vec![
                card.title.clone(),
                card.headline.clone().unwrap_or_default(),
            ])
        })
        .collect();
    let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
        .style(Style::default().fg(Color::White))
        .column_spacing(2)
        .block(block);
    f.render_widget(table, area);
}
