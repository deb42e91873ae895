//! HTML projection of panels and cards.
//!
//! Every interpolated value passes through [`escape`].

use super::{Card, CardKind, Disclosure, Field};
use crate::dashboard::{DetailState, DetailViewer, Panel, PanelState};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn field(field: &Field) -> String {
    format!(
        "<strong>{}:</strong> {}",
        escape(field.label),
        escape(&field.value)
    )
}

pub fn card(card: &Card) -> String {
    if card.kind == CardKind::Stat {
        return format!(
            "<div class=\"{}\"><h3>{}</h3><p>{}</p></div>",
            card.kind,
            escape(card.headline.as_deref().unwrap_or_default()),
            escape(&card.title)
        );
    }

    let mut out = match card.target {
        Some(rank) => format!("<div class=\"{}\" data-rank=\"{}\">", card.kind, rank),
        None => format!("<div class=\"{}\">", card.kind),
    };
    if let Some(badge) = &card.badge {
        out.push_str(&format!("<span class=\"rank\">{}</span>", escape(badge)));
    }
    out.push_str(&format!("<h3>{}</h3>", escape(&card.title)));
    if let Some(headline) = &card.headline {
        out.push_str(&format!("<div class=\"worth\">{}</div>", escape(headline)));
    }
    let fields: Vec<String> = card.fields.iter().map(field).collect();
    out.push_str(&format!("<div class=\"info\">{}</div>", fields.join("<br>")));
    out.push_str("</div>");
    out
}

/// Markup for the panel's current state. Idle panels render nothing.
pub fn panel(panel: &Panel) -> String {
    let message = |class: Option<&str>, text: String| match class {
        Some(class) => format!("<p class=\"{}\">{}</p>", class, escape(&text)),
        None => format!("<p>{}</p>", escape(&text)),
    };
    let kind = panel.kind();
    match panel.state() {
        PanelState::Idle => String::new(),
        PanelState::Loading => message(Some("loading"), kind.loading_message()),
        PanelState::Empty => message(None, kind.empty_message()),
        PanelState::Error => message(Some("error"), kind.error_message()),
        PanelState::Populated(cards) => cards.iter().map(card).collect::<Vec<_>>().join("\n"),
    }
}

pub fn disclosure(disclosure: &Disclosure) -> String {
    let mut out = format!(
        "<div class=\"detail\"><h2>{}</h2>",
        escape(&disclosure.title)
    );
    for section in &disclosure.sections {
        let fields: Vec<String> = section.fields.iter().map(field).collect();
        out.push_str(&format!(
            "<div class=\"detail-section\"><h3>{}</h3><p>{}</p></div>",
            escape(section.heading),
            fields.join("<br>")
        ));
    }
    out.push_str("</div>");
    out
}

pub fn detail(viewer: &DetailViewer) -> String {
    match viewer.state() {
        DetailState::Hidden => String::new(),
        DetailState::Showing(view) => disclosure(view),
        DetailState::Loading { .. } => format!(
            "<p class=\"loading\">{}</p>",
            viewer.message().unwrap_or_default()
        ),
        DetailState::NotFound | DetailState::Failed => format!(
            "<p class=\"error\">{}</p>",
            viewer.message().unwrap_or_default()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::PanelKind;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn card_values_are_escaped() {
        let html = card(
            &Card::new(CardKind::Person, "<script>alert(1)</script>")
                .badge("Rank #1")
                .field("Company", "AT&T")
                .target(1),
        );
        assert!(html.starts_with("<div class=\"billionaire-card\" data-rank=\"1\">"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<strong>Company:</strong> AT&amp;T"));
    }

    #[test]
    fn stat_card_puts_value_above_label() {
        let html = card(&Card::new(CardKind::Stat, "Average Age").headline("65.1"));
        assert_eq!(
            html,
            "<div class=\"stat-card\"><h3>65.1</h3><p>Average Age</p></div>"
        );
    }

    #[test]
    fn placeholder_markup_per_state() {
        let mut panel = Panel::new(PanelKind::Billionaires);
        assert_eq!(self::panel(&panel), "");

        panel.begin_load(None);
        assert_eq!(
            self::panel(&panel),
            "<p class=\"loading\">Loading billionaires...</p>"
        );

        panel.populate(Vec::new());
        assert_eq!(self::panel(&panel), "<p>No billionaires found</p>");

        panel.fail();
        assert_eq!(
            self::panel(&panel),
            "<p class=\"error\">Error loading billionaires</p>"
        );
    }
}
