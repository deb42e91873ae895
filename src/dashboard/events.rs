//! Results flowing from fetch tasks back to the dashboard.

use super::panel::Ticket;
use crate::api::FetchError;
use crate::model::{
    AgeGroup, CityAggregate, CompanyAggregate, CountryAggregate, DetailRecord, IndustryAggregate,
    PersonRecord, SummaryStatistics,
};
use crate::render::{self, Card};

/// Decoded payload of one panel fetch.
#[derive(Debug, Clone)]
pub enum PanelData {
    Statistics(SummaryStatistics),
    People(Vec<PersonRecord>),
    SearchResults(Vec<PersonRecord>),
    Countries(Vec<CountryAggregate>),
    Industries(Vec<IndustryAggregate>),
    Cities(Vec<CityAggregate>),
    AgeGroups(Vec<AgeGroup>),
    Companies(Vec<CompanyAggregate>),
}

impl PanelData {
    /// Cards in server order.
    pub fn cards(&self) -> Vec<Card> {
        match self {
            PanelData::Statistics(stats) => render::render_stat_cards(stats),
            PanelData::People(people) => people.iter().map(render::render_person_card).collect(),
            PanelData::SearchResults(people) => people
                .iter()
                .map(render::render_search_result_card)
                .collect(),
            PanelData::Countries(c) => c.iter().map(render::render_country_card).collect(),
            PanelData::Industries(i) => i.iter().map(render::render_industry_card).collect(),
            PanelData::Cities(c) => c.iter().map(render::render_city_card).collect(),
            PanelData::AgeGroups(a) => a.iter().map(render::render_age_group_card).collect(),
            PanelData::Companies(c) => c.iter().map(render::render_company_card).collect(),
        }
    }
}

#[derive(Debug)]
pub enum DashboardEvent {
    Panel {
        ticket: Ticket,
        outcome: Result<PanelData, FetchError>,
    },
    Detail {
        seq: u64,
        rank: u32,
        outcome: Result<DetailRecord, FetchError>,
    },
}
