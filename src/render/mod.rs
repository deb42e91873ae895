//! Typed view models for rendered records.
//!
//! Record → [`Card`] mapping lives in [`cards`]; cards are then projected to
//! terminal lines (`ui`), plain text ([`text`]) or escaped HTML ([`html`]).

pub mod cards;
pub mod format;
pub mod html;
pub mod text;

use std::fmt::{Display, Formatter};

pub use cards::{
    render_age_group_card, render_city_card, render_company_card, render_country_card,
    render_detail, render_industry_card, render_person_card, render_search_result_card,
    render_stat_cards,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum CardKind {
    #[strum(serialize = "stat-card")]
    Stat,
    #[strum(serialize = "billionaire-card")]
    Person,
    #[strum(serialize = "country-card")]
    Country,
    #[strum(serialize = "industry-card")]
    Industry,
    #[strum(serialize = "search-result-card")]
    SearchResult,
    #[strum(serialize = "city-card")]
    City,
    #[strum(serialize = "age-group-card")]
    AgeGroup,
    #[strum(serialize = "company-card")]
    Company,
}

/// A labelled value. The label is always shown, even when the value is the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// One rendered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    /// Emphasised value under the title, e.g. the worth of a person.
    pub headline: Option<String>,
    /// Small tag shown above the title, e.g. `Rank #1`.
    pub badge: Option<String>,
    pub fields: Vec<Field>,
    /// Rank to open when the card is selected.
    pub target: Option<u32>,
}

impl Card {
    pub fn new(kind: CardKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            headline: None,
            badge: None,
            fields: Vec::new(),
            target: None,
        }
    }

    pub fn headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push(Field::new(label, value));
        self
    }

    pub fn target(mut self, rank: u32) -> Self {
        self.target = Some(rank);
        self
    }

    pub fn field_value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub fields: Vec<Field>,
}

/// Everything known about one record, shown in a single blocking view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Disclosure {
    pub fn field_value(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}
