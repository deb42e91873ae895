//! Plain-text projection used by the headless commands.

use super::{Card, CardKind, Disclosure};
use crate::dashboard::{DetailState, DetailViewer, Panel};

pub fn card(card: &Card) -> String {
    if card.kind == CardKind::Stat {
        return format!(
            "{}: {}",
            card.title,
            card.headline.as_deref().unwrap_or_default()
        );
    }

    let mut lines = Vec::with_capacity(card.fields.len() + 2);
    lines.push(match &card.badge {
        Some(badge) => format!("[{}] {}", badge, card.title),
        None => card.title.clone(),
    });
    if let Some(headline) = &card.headline {
        lines.push(format!("  {}", headline));
    }
    lines.extend(card.fields.iter().map(|f| format!("  {}", f)));
    lines.join("\n")
}

pub fn panel(panel: &Panel) -> String {
    let heading = format!("== {} ==", panel.kind().title());
    let body = match panel.placeholder() {
        Some(message) => message,
        None if panel.cards().is_empty() => String::new(),
        None => {
            let separator = if panel.cards()[0].kind == CardKind::Stat {
                "\n"
            } else {
                "\n\n"
            };
            panel
                .cards()
                .iter()
                .map(card)
                .collect::<Vec<_>>()
                .join(separator)
        }
    };
    format!("{}\n{}", heading, body)
}

pub fn disclosure(disclosure: &Disclosure) -> String {
    let mut out = disclosure.title.clone();
    for section in &disclosure.sections {
        out.push_str(&format!("\n\n{}", section.heading));
        for field in &section.fields {
            out.push_str(&format!("\n  {}", field));
        }
    }
    out
}

pub fn detail(viewer: &DetailViewer) -> String {
    match viewer.state() {
        DetailState::Showing(view) => disclosure(view),
        _ => viewer.message().unwrap_or_default().to_string(),
    }
}
