//! Rendering primitives: one record in, one view model out.
//!
//! Every optional value goes through `format`, so a missing field shows its
//! label with `N/A` rather than disappearing.

use super::format::{
    grouped, number, number_with_unit, one_decimal, or_placeholder, percent, trillions, worth_long,
    worth_short, yes_no, PLACEHOLDER,
};
use super::{Card, CardKind, Disclosure, Field, Section};
use crate::model::{
    AgeGroup, CityAggregate, CompanyAggregate, CountryAggregate, DetailRecord, IndustryAggregate,
    PersonRecord, SummaryStatistics,
};

fn stat_card(label: &str, value: String) -> Card {
    Card::new(CardKind::Stat, label).headline(value)
}

/// Summary tiles for the statistics panel.
pub fn render_stat_cards(stats: &SummaryStatistics) -> Vec<Card> {
    let overall = &stats.overall;
    let mut cards = vec![
        stat_card("Total Billionaires", overall.total_billionaires.to_string()),
        stat_card("Average Worth", worth_short(overall.avg_worth)),
        stat_card("Highest Worth", worth_short(overall.max_worth)),
        stat_card("Total Worth", worth_short(overall.total_worth)),
        stat_card("Average Age", one_decimal(stats.age_statistics.avg_age)),
        stat_card(
            "Gender Distribution",
            format!("{}M / {}F", stats.gender_count("M"), stats.gender_count("F")),
        ),
    ];
    if !stats.self_made_distribution.is_empty() {
        cards.push(stat_card(
            "Self-Made Share",
            format!(
                "{} / {}",
                stats.self_made_count(true),
                stats.self_made_count(false)
            ),
        ));
    }
    cards
}

pub fn render_person_card(person: &PersonRecord) -> Card {
    Card::new(CardKind::Person, or_placeholder(Some(person.person_name.as_str())))
        .badge(format!("Rank #{}", person.rank))
        .headline(worth_long(person.final_worth))
        .field("Title", or_placeholder(person.title.as_deref()))
        .field("Company", or_placeholder(person.organization.as_deref()))
        .field("Industry", or_placeholder(person.category.as_deref()))
        .field("Age", number(person.age))
        .field("Gender", or_placeholder(person.gender.as_deref()))
        .field("Country", or_placeholder(person.country.as_deref()))
        .field("City", or_placeholder(person.city_name.as_deref()))
        .field("Self-Made", yes_no(person.self_made))
        .target(person.rank)
}

pub fn render_country_card(country: &CountryAggregate) -> Card {
    Card::new(
        CardKind::Country,
        or_placeholder(country.country_name.as_deref()),
    )
    .field("Billionaires", country.billionaire_count.to_string())
    .field("Average Worth", worth_short(country.avg_worth))
    .field("Total Worth", worth_short(country.total_worth))
    .field("Population", grouped(country.population))
    .field("GDP", trillions(country.gdp))
    .field(
        "Life Expectancy",
        number_with_unit(country.life_expectancy, "years"),
    )
}

pub fn render_industry_card(industry: &IndustryAggregate) -> Card {
    Card::new(
        CardKind::Industry,
        or_placeholder(industry.category.as_deref()),
    )
    .field("Industries", or_placeholder(industry.industries.as_deref()))
    .field("Billionaires", industry.billionaire_count.to_string())
    .field("Average Worth", worth_short(industry.avg_worth))
    .field("Total Worth", worth_short(industry.total_worth))
}

pub fn render_search_result_card(person: &PersonRecord) -> Card {
    Card::new(
        CardKind::SearchResult,
        format!(
            "{} (Rank #{})",
            or_placeholder(Some(person.person_name.as_str())),
            person.rank
        ),
    )
    .field("Worth", worth_short(person.final_worth))
    .field("Age", number(person.age))
    .field("Company", or_placeholder(person.organization.as_deref()))
    .field("Category", or_placeholder(person.category.as_deref()))
    .target(person.rank)
}

pub fn render_city_card(city: &CityAggregate) -> Card {
    Card::new(CardKind::City, or_placeholder(city.city_name.as_deref()))
        .field("State", or_placeholder(city.state.as_deref()))
        .field(
            "Region",
            or_placeholder(city.residence_state_region.as_deref()),
        )
        .field("Billionaires", city.billionaire_count.to_string())
        .field("Average Worth", worth_short(city.avg_worth))
}

pub fn render_age_group_card(group: &AgeGroup) -> Card {
    Card::new(CardKind::AgeGroup, or_placeholder(group.age_group.as_deref()))
        .field("Billionaires", group.count.to_string())
        .field("Average Worth", worth_short(group.avg_worth))
}

pub fn render_company_card(company: &CompanyAggregate) -> Card {
    let title = company
        .organization
        .as_deref()
        .or(company.source.as_deref());
    Card::new(CardKind::Company, or_placeholder(title))
        .field("Source", or_placeholder(company.source.as_deref()))
        .field("Category", or_placeholder(company.category.as_deref()))
        .field("Industries", or_placeholder(company.industries.as_deref()))
        .field("Billionaires", company.billionaire_count.to_string())
        .field("Total Worth", worth_short(company.total_worth))
}

fn full_name(detail: &DetailRecord) -> String {
    let parts: Vec<&str> = [detail.first_name.as_deref(), detail.last_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        parts.join(" ")
    }
}

/// Full record for the detail view.
pub fn render_detail(detail: &DetailRecord) -> Disclosure {
    let person = &detail.person;
    Disclosure {
        title: format!(
            "Detailed Information for {}",
            or_placeholder(Some(person.person_name.as_str()))
        ),
        sections: vec![
            Section {
                heading: "Overview",
                fields: vec![
                    Field::new("Rank", format!("#{}", person.rank)),
                    Field::new("Full Name", full_name(detail)),
                    Field::new("Net Worth", worth_long(person.final_worth)),
                    Field::new("Age", number_with_unit(person.age, "years old")),
                    Field::new("Gender", or_placeholder(person.gender.as_deref())),
                    Field::new("Birth Date", or_placeholder(detail.birth_date.as_deref())),
                    Field::new("Self-Made", yes_no(person.self_made)),
                    Field::new("Status", or_placeholder(person.status.as_deref())),
                ],
            },
            Section {
                heading: "Company",
                fields: vec![
                    Field::new("Company", or_placeholder(person.organization.as_deref())),
                    Field::new("Industry", or_placeholder(person.category.as_deref())),
                    Field::new("Industries", or_placeholder(person.industries.as_deref())),
                    Field::new("Title", or_placeholder(person.title.as_deref())),
                    Field::new("Source", or_placeholder(person.source.as_deref())),
                ],
            },
            Section {
                heading: "Location",
                fields: vec![
                    Field::new("City", or_placeholder(person.city_name.as_deref())),
                    Field::new("State", or_placeholder(detail.state.as_deref())),
                    Field::new(
                        "Region",
                        or_placeholder(detail.residence_state_region.as_deref()),
                    ),
                    Field::new("Country", or_placeholder(person.country.as_deref())),
                ],
            },
            Section {
                heading: "Country Statistics",
                fields: vec![
                    Field::new("Population", grouped(detail.population)),
                    Field::new("GDP", trillions(detail.gdp)),
                    Field::new(
                        "Life Expectancy",
                        number_with_unit(detail.life_expectancy, "years"),
                    ),
                    Field::new("CPI", number(detail.cpi)),
                    Field::new("CPI Change", percent(detail.cpi_change)),
                    Field::new("Tax Revenue", percent(detail.tax_revenue)),
                    Field::new("Total Tax Rate", percent(detail.total_tax_rate)),
                    Field::new(
                        "Tertiary Education",
                        percent(detail.gross_tertiary_education),
                    ),
                    Field::new(
                        "Primary Education",
                        percent(detail.gross_primary_education),
                    ),
                ],
            },
        ],
    }
}
