use reqwest::Client;

use phonegate::country::CountryDirectory;

use super::{endpoint, http::ResponseExt, ServiceError};

#[derive(Debug, Clone)]
pub struct CountryClient {
    http: Client,
    url: String,
}

impl CountryClient {
    pub fn new(http: Client, api_url: &str) -> Self {
        Self {
            http,
            url: endpoint(api_url, "/v1/countries"),
        }
    }

    /// Fetches the supported countries, keyed by region code in service order.
    pub async fn fetch(&self, token: &str) -> Result<CountryDirectory, ServiceError> {
        tracing::debug!("Fetching country directory from {}", self.url);
        let response = self
            .http
            .get(&self.url)
            .bearer_auth(token)
            .send()
            .await?
            .check_success()
            .await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_keeps_service_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/countries")
                    .header("authorization", "Bearer tok-123");
                then.status(200).header("content-type", "application/json").body(
                    r#"{
                        "US": {"id": "c-us", "name": "United States", "callingCode": "+1", "expectedDigitLength": 10},
                        "FR": {"id": "c-fr", "name": "France", "callingCode": "+33", "expectedDigitLength": 9},
                        "DE": {"id": "c-de", "name": "Germany", "callingCode": "+49", "expectedDigitLength": 11}
                    }"#,
                );
            })
            .await;

        let client = CountryClient::new(Client::new(), &server.base_url());
        let directory = client.fetch("tok-123").await.unwrap();
        mock.assert_async().await;

        let codes: Vec<&str> = directory.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["US", "FR", "DE"]);
        assert_eq!(directory.get("FR").unwrap().expected_length(), 9);
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_length() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/countries");
                then.status(200).json_body(json!({
                    "XX": {"id": "c-xx", "name": "Nowhere", "callingCode": "+0", "expectedDigitLength": 0}
                }));
            })
            .await;

        let client = CountryClient::new(Client::new(), &server.base_url());
        assert!(matches!(
            client.fetch("tok-123").await,
            Err(ServiceError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_unauthorized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/countries");
                then.status(403).body("Forbidden");
            })
            .await;

        let client = CountryClient::new(Client::new(), &server.base_url());
        match client.fetch("expired").await {
            Err(ServiceError::Unsuccessful(info)) => assert_eq!(info.status_code, 403),
            res => panic!("unexpected result: {:?}", res),
        }
    }
}
