use crate::core::rates::{RateProvider, RateTable};
use crate::error::Error;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

// ExchangeRateApiProvider implementation for RateProvider
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: RateTable,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "RateFetch",
        skip(self),
        fields(base = %base)
    )]
    async fn fetch_rates(&self, base: &str) -> Result<RateTable, Error> {
        let url = format!("{}/{}", self.base_url, base);
        debug!("Requesting rate table from {}", url);

        let client = reqwest::Client::builder().user_agent("kurs/1.0").build()?;
        let response = client.get(&url).send().await?.error_for_status()?;

        let rates = response.json::<RatesResponse>().await?.rates;
        debug!("Received {} rates anchored at {}", rates.len(), base);

        Ok(rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(base: &str, response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        let request_path = format!("/{base}");

        Mock::given(method("GET"))
            .and(path(request_path))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_rate_table_fetch() {
        let mock_response = r#"{
            "base": "USD",
            "date": "2024-01-15",
            "rates": {
                "EUR": 0.91,
                "GBP": 0.79,
                "INR": 83.12
            }
        }"#;

        let mock_server =
            create_mock_server("USD", ResponseTemplate::new(200).set_body_string(mock_response))
                .await;

        let provider = ExchangeRateApiProvider::new(&mock_server.uri());
        let rates = provider.fetch_rates("USD").await.unwrap();

        assert_eq!(rates.len(), 3);
        assert_eq!(rates.get("EUR"), Some(&0.91));
        assert_eq!(rates.get("GBP"), Some(&0.79));
    }

    #[tokio::test]
    async fn test_http_error_maps_to_network_error() {
        let mock_server = create_mock_server("USD", ResponseTemplate::new(500)).await;

        let provider = ExchangeRateApiProvider::new(&mock_server.uri());
        let result = provider.fetch_rates("USD").await;

        assert!(matches!(&result, Err(Error::Network(_))));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("unable to reach the exchange rate service")
        );
    }

    #[tokio::test]
    async fn test_missing_rates_field_is_an_error() {
        let mock_response = r#"{"base": "USD", "date": "2024-01-15"}"#;
        let mock_server =
            create_mock_server("USD", ResponseTemplate::new(200).set_body_string(mock_response))
                .await;

        let provider = ExchangeRateApiProvider::new(&mock_server.uri());
        let result = provider.fetch_rates("USD").await;

        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let mock_server =
            create_mock_server("USD", ResponseTemplate::new(200).set_body_string("not json")).await;

        let provider = ExchangeRateApiProvider::new(&mock_server.uri());
        assert!(provider.fetch_rates("USD").await.is_err());
    }
}
