//! Billionaires API Client
//!
//! A reqwest-backed client for the billionaires service. Every endpoint is a
//! JSON GET; failures are reported as [`FetchError`] and classified by kind.

use crate::api::BillionairesApi;
use crate::api::error::FetchError;
use crate::api::query::{QueryParams, build_url};
use crate::consts::cli_consts::network;
use crate::environment::Environment;
use crate::model::{
    AgeGroup, CityAggregate, CompanyAggregate, CountryAggregate, DetailRecord, IndustryAggregate,
    PersonRecord, SummaryStatistics,
};
use log::debug;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("billionaires/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .connect_timeout(network::connect_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str, params: Option<&QueryParams>) -> String {
        build_url(&self.environment.api_url(), endpoint, params)
    }

    async fn get_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
    ) -> Result<T, FetchError> {
        let url = self.build_url(endpoint, params);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_body(status, &body)
    }
}

/// Returns the message of a truthy top-level `error` field, if the payload has one.
pub(crate) fn sentinel_error(value: &Value) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Turns a raw response into `T`.
///
/// The payload is inspected before the status: the service reports unknown
/// records as `404 {"error": ...}` and a successful status can still carry the
/// sentinel.
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, FetchError> {
    let success = (200..300).contains(&status);
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) if success => return Err(FetchError::Decode(e)),
        Err(_) => {
            return Err(FetchError::Http {
                status,
                message: String::from_utf8_lossy(body).into_owned(),
            });
        }
    };

    if let Some(message) = sentinel_error(&value) {
        return Err(FetchError::Application(message));
    }
    if !success {
        return Err(FetchError::Http {
            status,
            message: value.to_string(),
        });
    }
    serde_json::from_value(value).map_err(FetchError::Decode)
}

#[async_trait::async_trait]
impl BillionairesApi for ApiClient {
    async fn statistics(&self) -> Result<SummaryStatistics, FetchError> {
        self.get_request("stats", None).await
    }

    async fn billionaires(&self, params: QueryParams) -> Result<Vec<PersonRecord>, FetchError> {
        self.get_request("billionaires", Some(&params)).await
    }

    async fn billionaire(&self, rank: u32) -> Result<DetailRecord, FetchError> {
        self.get_request(&format!("billionaire/{}", rank), None).await
    }

    async fn countries(&self) -> Result<Vec<CountryAggregate>, FetchError> {
        self.get_request("countries", None).await
    }

    async fn industries(&self) -> Result<Vec<IndustryAggregate>, FetchError> {
        self.get_request("industries", None).await
    }

    async fn search(&self, query: &str) -> Result<Vec<PersonRecord>, FetchError> {
        let params = QueryParams::new().with("q", query);
        self.get_request("search", Some(&params)).await
    }

    async fn cities(&self) -> Result<Vec<CityAggregate>, FetchError> {
        self.get_request("cities", None).await
    }

    async fn age_distribution(&self) -> Result<Vec<AgeGroup>, FetchError> {
        self.get_request("age-distribution", None).await
    }

    async fn companies(&self) -> Result<Vec<CompanyAggregate>, FetchError> {
        self.get_request("companies", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::FetchErrorKind;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves exactly one canned HTTP response and hands back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).into_owned();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{}/api", addr), handle)
    }

    fn client_for(api_url: String) -> ApiClient {
        ApiClient::new(Environment::Custom { api_url }).unwrap()
    }

    #[test]
    fn sentinel_requires_truthy_error_field() {
        assert_eq!(
            sentinel_error(&json!({"error": "Billionaire not found"})),
            Some("Billionaire not found".to_string())
        );
        assert_eq!(sentinel_error(&json!({"error": null})), None);
        assert_eq!(sentinel_error(&json!({"error": ""})), None);
        assert_eq!(sentinel_error(&json!([{"error": "x"}])), None);
        assert_eq!(sentinel_error(&json!({"rank": 1})), None);
    }

    #[test]
    fn sentinel_wins_over_successful_status() {
        let result: Result<Vec<PersonRecord>, _> =
            decode_body(200, br#"{"error": "Search query parameter \"q\" is required"}"#);
        assert_eq!(
            result.unwrap_err().kind(),
            FetchErrorKind::ApplicationError
        );
    }

    #[test]
    fn non_json_success_is_a_decode_failure() {
        let result: Result<SummaryStatistics, _> = decode_body(200, b"<html>oops</html>");
        assert_eq!(result.unwrap_err().kind(), FetchErrorKind::DecodeFailure);
    }

    #[test]
    fn wrong_shape_is_a_decode_failure() {
        let result: Result<Vec<CountryAggregate>, _> = decode_body(200, br#"{"countries": 3}"#);
        assert_eq!(result.unwrap_err().kind(), FetchErrorKind::DecodeFailure);
    }

    #[test]
    fn server_error_page_is_a_network_failure() {
        let result: Result<Vec<CountryAggregate>, _> =
            decode_body(500, b"Internal Server Error");
        match result.unwrap_err() {
            FetchError::Http { status, .. } => assert_eq!(status, 500),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn billionaires_sends_only_given_filters() {
        let (url, server) = serve_once("200 OK", r#"[{"rank": 4, "personName": "A"}]"#).await;
        let client = client_for(url);

        let people = client
            .billionaires(QueryParams::new().with("country", "").with("gender", "F"))
            .await
            .unwrap();

        assert_eq!(people.len(), 1);
        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /api/billionaires?gender=F HTTP/1.1"),
            "{request}"
        );
        assert!(request.to_lowercase().contains("user-agent: billionaires/"));
    }

    #[tokio::test]
    async fn missing_record_surfaces_application_error() {
        let (url, server) =
            serve_once("404 NOT FOUND", r#"{"error": "Billionaire not found"}"#).await;
        let client = client_for(url);

        let err = client.billionaire(99999).await.unwrap_err();

        assert!(err.is_application_error());
        assert!(
            server
                .await
                .unwrap()
                .starts_with("GET /api/billionaire/99999 ")
        );
    }

    #[tokio::test]
    async fn search_encodes_free_text() {
        let (url, server) = serve_once("200 OK", "[]").await;
        let client = client_for(url);

        let results = client.search("Elon Musk").await.unwrap();

        assert!(results.is_empty());
        assert!(
            server
                .await
                .unwrap()
                .starts_with("GET /api/search?q=Elon%20Musk ")
        );
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = client_for(format!("http://{}/api", addr));

        let err = client.countries().await.unwrap_err();

        assert_eq!(err.kind(), FetchErrorKind::NetworkFailure);
    }
}
