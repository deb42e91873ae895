//! Read-only projections of the service's JSON payloads.
//!
//! Worth fields arrive in millions (thousand-units of a billion); GDP arrives
//! in base currency units. Scaling for display lives in `render::format`.

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes the self-made flag, which the service emits either as a JSON bool
/// or as a SQLite-style integer (`0`/`1`), occasionally as a string.
fn flexible_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => None,
        Some(Flag::Bool(b)) => Some(b),
        Some(Flag::Int(n)) => Some(n != 0),
        Some(Flag::Float(n)) => Some(n != 0.0),
        Some(Flag::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => None,
        },
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStatistics {
    #[serde(default)]
    pub total_billionaires: u64,
    pub avg_worth: Option<f64>,
    pub max_worth: Option<f64>,
    pub min_worth: Option<f64>,
    pub total_worth: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeStatistics {
    pub avg_age: Option<f64>,
    pub max_age: Option<f64>,
    pub min_age: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderCount {
    pub gender: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfMadeCount {
    #[serde(default, deserialize_with = "flexible_flag")]
    pub self_made: Option<bool>,
    pub count: u64,
}

/// `/stats` payload. Replaced wholesale on every load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub overall: OverallStatistics,
    #[serde(default)]
    pub age_statistics: AgeStatistics,
    #[serde(default)]
    pub gender_distribution: Vec<GenderCount>,
    #[serde(default)]
    pub self_made_distribution: Vec<SelfMadeCount>,
}

impl SummaryStatistics {
    /// Count for a gender code; missing codes count as zero.
    pub fn gender_count(&self, code: &str) -> u64 {
        self.gender_distribution
            .iter()
            .find(|g| g.gender.as_deref() == Some(code))
            .map_or(0, |g| g.count)
    }

    pub fn self_made_count(&self, self_made: bool) -> u64 {
        self.self_made_distribution
            .iter()
            .find(|s| s.self_made == Some(self_made))
            .map_or(0, |s| s.count)
    }
}

/// One individual. `rank` is the lookup key for detail fetches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub rank: u32,
    #[serde(default)]
    pub person_name: String,
    pub final_worth: Option<f64>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub category: Option<String>,
    pub industries: Option<String>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    #[serde(rename = "countryOfCitizenship")]
    pub country: Option<String>,
    pub city_name: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "flexible_flag")]
    pub self_made: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryAggregate {
    pub country_name: Option<String>,
    #[serde(default)]
    pub billionaire_count: u64,
    pub avg_worth: Option<f64>,
    pub total_worth: Option<f64>,
    pub population: Option<f64>,
    pub gdp: Option<f64>,
    pub life_expectancy: Option<f64>,
    pub cpi: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryAggregate {
    pub category: Option<String>,
    pub industries: Option<String>,
    #[serde(default)]
    pub billionaire_count: u64,
    pub avg_worth: Option<f64>,
    pub total_worth: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityAggregate {
    pub city_name: Option<String>,
    pub state: Option<String>,
    pub residence_state_region: Option<String>,
    #[serde(default)]
    pub billionaire_count: u64,
    pub avg_worth: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroup {
    pub age_group: Option<String>,
    #[serde(default)]
    pub count: u64,
    pub avg_worth: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAggregate {
    pub source: Option<String>,
    pub organization: Option<String>,
    pub category: Option<String>,
    pub industries: Option<String>,
    #[serde(default)]
    pub billionaire_count: u64,
    pub total_worth: Option<f64>,
}

/// A person joined server-side with city and country statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailRecord {
    #[serde(flatten)]
    pub person: PersonRecord,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub state: Option<String>,
    pub residence_state_region: Option<String>,
    pub population: Option<f64>,
    pub gdp: Option<f64>,
    pub life_expectancy: Option<f64>,
    pub cpi: Option<f64>,
    pub cpi_change: Option<f64>,
    pub tax_revenue: Option<f64>,
    pub total_tax_rate: Option<f64>,
    pub gross_tertiary_education: Option<f64>,
    pub gross_primary_education: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_self_made_accepts_integers_and_bools() {
        let from_int: PersonRecord =
            serde_json::from_value(json!({"rank": 1, "personName": "A", "selfMade": 1})).unwrap();
        let from_bool: PersonRecord =
            serde_json::from_value(json!({"rank": 2, "personName": "B", "selfMade": false}))
                .unwrap();
        let missing: PersonRecord =
            serde_json::from_value(json!({"rank": 3, "personName": "C"})).unwrap();

        assert_eq!(from_int.self_made, Some(true));
        assert_eq!(from_bool.self_made, Some(false));
        assert_eq!(missing.self_made, None);
    }

    #[test]
    fn person_tolerates_nulls_in_optional_fields() {
        let person: PersonRecord = serde_json::from_value(json!({
            "rank": 7,
            "personName": "Someone",
            "finalWorth": 1000000,
            "title": null,
            "age": null,
            "countryOfCitizenship": "Testland"
        }))
        .unwrap();
        assert_eq!(person.final_worth, Some(1_000_000.0));
        assert_eq!(person.title, None);
        assert_eq!(person.country.as_deref(), Some("Testland"));
    }

    #[test]
    fn detail_record_flattens_person_fields() {
        let detail: DetailRecord = serde_json::from_value(json!({
            "rank": 1,
            "personName": "Jane Doe",
            "finalWorth": 211000,
            "firstName": "Jane",
            "lastName": "Doe",
            "gdp": 21427700000000.0,
            "population": 331002651
        }))
        .unwrap();
        assert_eq!(detail.person.rank, 1);
        assert_eq!(detail.first_name.as_deref(), Some("Jane"));
        assert_eq!(detail.population, Some(331_002_651.0));
    }

    #[test]
    fn stats_gender_lookup_defaults_to_zero() {
        let stats: SummaryStatistics = serde_json::from_value(json!({
            "overall": {"totalBillionaires": 3, "avgWorth": 1000, "maxWorth": 2000, "totalWorth": 3000},
            "ageStatistics": {"avgAge": 61.25},
            "genderDistribution": [{"gender": "M", "count": 3}]
        }))
        .unwrap();
        assert_eq!(stats.gender_count("M"), 3);
        assert_eq!(stats.gender_count("F"), 0);
        assert!(stats.self_made_distribution.is_empty());
    }
}
