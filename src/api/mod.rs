use crate::model::{
    AgeGroup, CityAggregate, CompanyAggregate, CountryAggregate, DetailRecord, IndustryAggregate,
    PersonRecord, SummaryStatistics,
};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod query;

pub use error::{FetchError, FetchErrorKind};
pub use query::QueryParams;

#[cfg(test)]
use mockall::automock;

/// One operation per endpoint of the billionaires service.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BillionairesApi: Send + Sync {
    /// `GET /stats`
    async fn statistics(&self) -> Result<SummaryStatistics, FetchError>;

    /// `GET /billionaires`, filtered by whatever non-empty params are given.
    async fn billionaires(&self, params: QueryParams) -> Result<Vec<PersonRecord>, FetchError>;

    /// `GET /billionaire/{rank}`
    async fn billionaire(&self, rank: u32) -> Result<DetailRecord, FetchError>;

    /// `GET /countries`
    async fn countries(&self) -> Result<Vec<CountryAggregate>, FetchError>;

    /// `GET /industries`
    async fn industries(&self) -> Result<Vec<IndustryAggregate>, FetchError>;

    /// `GET /search?q=...`
    async fn search(&self, query: &str) -> Result<Vec<PersonRecord>, FetchError>;

    /// `GET /cities`
    async fn cities(&self) -> Result<Vec<CityAggregate>, FetchError>;

    /// `GET /age-distribution`
    async fn age_distribution(&self) -> Result<Vec<AgeGroup>, FetchError>;

    /// `GET /companies`
    async fn companies(&self) -> Result<Vec<CompanyAggregate>, FetchError>;
}
