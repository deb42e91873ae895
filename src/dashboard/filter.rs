//! Filter controls for the billionaires list.

use crate::api::QueryParams;
use crate::model::CountryAggregate;

pub const GENDER_CHOICES: [&str; 3] = ["", "M", "F"];
pub const SELF_MADE_CHOICES: [&str; 3] = ["", "1", "0"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    pub name: String,
    pub count: u64,
}

impl CountryOption {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.count)
    }
}

/// Raw control values. An empty string means "not filtered".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControls {
    pub country: String,
    /// `""`, `M` or `F`
    pub gender: String,
    /// `""`, `1` or `0`
    pub self_made: String,
    pub min_worth: String,
    pub max_worth: String,
    pub limit: String,
    /// Records to skip; only meaningful together with `limit`.
    pub offset: String,
}

#[derive(Debug, Clone, Default)]
pub struct FilterCoordinator {
    controls: FilterControls,
    country_options: Vec<CountryOption>,
}

impl FilterCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut FilterControls {
        &mut self.controls
    }

    pub fn country_options(&self) -> &[CountryOption] {
        &self.country_options
    }

    /// Only controls with a value end up in the request. `offset` is dropped
    /// unless `limit` is set.
    pub fn query_params(&self) -> QueryParams {
        let c = &self.controls;
        let offset = if c.limit.trim().is_empty() { "" } else { c.offset.as_str() };
        QueryParams::new()
            .with("country", &c.country)
            .with("gender", &c.gender)
            .with("selfMade", &c.self_made)
            .with("minWorth", &c.min_worth)
            .with("maxWorth", &c.max_worth)
            .with("limit", &c.limit)
            .with("offset", offset)
    }

    pub fn clear(&mut self) {
        self.controls = FilterControls::default();
    }

    /// Replaces the country choices. Aggregates without a name are skipped.
    pub fn set_country_options(&mut self, countries: &[CountryAggregate]) {
        self.country_options = countries
            .iter()
            .filter_map(|c| {
                let name = c.country_name.as_deref()?.trim();
                (!name.is_empty()).then(|| CountryOption {
                    name: name.to_string(),
                    count: c.billionaire_count,
                })
            })
            .collect();
    }

    pub fn cycle_country(&mut self) {
        let names: Vec<&str> = std::iter::once("")
            .chain(self.country_options.iter().map(|o| o.name.as_str()))
            .collect();
        self.controls.country = next_choice(&names, &self.controls.country);
    }

    pub fn cycle_gender(&mut self) {
        self.controls.gender = next_choice(&GENDER_CHOICES, &self.controls.gender);
    }

    pub fn cycle_self_made(&mut self) {
        self.controls.self_made = next_choice(&SELF_MADE_CHOICES, &self.controls.self_made);
    }

    /// Human-readable country control, e.g. `Testland (3)` or `All`.
    pub fn country_label(&self) -> String {
        if self.controls.country.is_empty() {
            return "All".to_string();
        }
        self.country_options
            .iter()
            .find(|o| o.name == self.controls.country)
            .map(CountryOption::label)
            .unwrap_or_else(|| self.controls.country.clone())
    }

    pub fn gender_label(&self) -> &'static str {
        match self.controls.gender.as_str() {
            "M" => "Male",
            "F" => "Female",
            _ => "All",
        }
    }

    pub fn self_made_label(&self) -> &'static str {
        match self.controls.self_made.as_str() {
            "1" => "Self-Made",
            "0" => "Inherited",
            _ => "All",
        }
    }
}

/// The choice after `current`, wrapping; unknown values restart at the first choice.
fn next_choice(choices: &[&str], current: &str) -> String {
    let next = choices
        .iter()
        .position(|c| *c == current)
        .map_or(0, |i| (i + 1) % choices.len());
    choices.get(next).copied().unwrap_or_default().to_string()
}
