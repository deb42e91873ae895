//! Dashboard footer component
//!
//! Renders key bindings for the current input mode

use crate::ui::dashboard::state::ViewState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    view: &ViewState,
    detail_open: bool,
) {
    let footer_text = if view.is_editing_search() {
        "[Enter] Search | [Esc] Cancel"
    } else if detail_open {
        "[↑↓] Scroll | [Esc] Close | [Q] Quit"
    } else {
        "[Tab] Panel | [↑↓] Select | [Enter] Details | [/] Search | [R] Refresh | [Q] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
