//! Detail popup drawn over the dashboard

use crate::dashboard::{DetailState, DetailViewer};
use crate::ui::dashboard::utils::centered_rect;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Title and body lines of the popup, or `None` while hidden.
pub fn detail_lines(viewer: &DetailViewer) -> Option<(String, Vec<Line<'_>>)> {
    match viewer.state() {
        DetailState::Hidden => None,
        DetailState::Showing(view) => {
            let mut lines = Vec::new();
            for section in &view.sections {
                lines.push(Line::from(Span::styled(
                    section.heading,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                for field in &section.fields {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {}: ", field.label),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(field.value.as_str()),
                    ]));
                }
                lines.push(Line::raw(""));
            }
            Some((view.title.clone(), lines))
        }
        state => {
            let color = match state {
                DetailState::Loading { .. } => Color::LightYellow,
                _ => Color::LightRed,
            };
            let message = viewer.message().unwrap_or_default();
            let line = Line::from(Span::styled(message, Style::default().fg(color)));
            Some(("Details".to_string(), vec![line]))
        }
    }
}

/// Number of body lines; the upper bound for the scroll offset.
pub fn detail_line_count(viewer: &DetailViewer) -> usize {
    detail_lines(viewer).map_or(0, |(_, lines)| lines.len())
}

pub fn render_detail(f: &mut Frame, area: Rect, viewer: &DetailViewer, scroll: u16) {
    let Some((title, lines)) = detail_lines(viewer) else {
        return;
    };
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    // Never scroll past the point where the last line sits at the bottom.
    let visible = popup.height.saturating_sub(2) as usize;
    let max_offset = lines.len().saturating_sub(visible);
    let offset = (scroll as usize).min(max_offset) as u16;
    let more_below = offset as usize + visible < lines.len();

    let hint = if offset > 0 || more_below {
        " [↑↓/PgUp/PgDn] scroll | [Esc] close "
    } else {
        " [Esc] close "
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .scroll((offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::LightBlue))
                .title(format!(" {} ", title))
                .title_bottom(hint),
        );
    f.render_widget(paragraph, popup);
}
