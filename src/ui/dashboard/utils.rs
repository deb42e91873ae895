//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::dashboard::PanelState;
use crate::render::Card;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Color for a panel's placeholder text.
pub fn placeholder_color(state: &PanelState) -> Color {
    match state {
        PanelState::Loading => Color::LightYellow,
        PanelState::Error => Color::LightRed,
        _ => Color::Gray,
    }
}

/// Multi-line rendering of one card for list widgets.
pub fn card_lines(card: &Card) -> Vec<Line<'static>> {
    let mut title = Vec::new();
    if let Some(badge) = &card.badge {
        title.push(Span::styled(
            format!("{} ", badge),
            Style::default().fg(Color::LightBlue),
        ));
    }
    title.push(Span::styled(
        card.title.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    if let Some(headline) = &card.headline {
        title.push(Span::styled(
            format!("  {}", headline),
            Style::default().fg(Color::LightGreen),
        ));
    }

    let mut lines = vec![Line::from(title)];
    // Two fields per row keeps long lists scannable.
    for pair in card.fields.chunks(2) {
        let spans: Vec<Span> = pair
            .iter()
            .flat_map(|field| {
                [
                    Span::styled(
                        format!("  {}: ", field.label),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(field.value.clone()),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines.push(Line::raw(""));
    lines
}

/// A rectangle of the given percentage size centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CardKind;

    #[test]
    fn card_lines_pair_fields() {
        let card = Card::new(CardKind::Country, "Testland")
            .field("Billionaires", "3")
            .field("Average Worth", "$5.0B")
            .field("Population", "1,000,000");
        let lines = card_lines(&card);
        // title, two field rows, spacer
        assert_eq!(lines.len(), 4);
        let second_row: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(second_row, "  Population: 1,000,000");
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 50, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 25);
        assert_eq!(popup.x, 20);
    }
}
