use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{endpoint, http::ResponseExt, ServiceError};

#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Obtains the bearer credential used by the country and two-factor clients.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    url: String,
    client_id: String,
    client_secret: String,
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .finish()
    }
}

impl AuthClient {
    pub fn new(http: Client, auth_url: &str, client_id: String, client_secret: String) -> Self {
        Self {
            http,
            url: endpoint(auth_url, "/oauth/token"),
            client_id,
            client_secret,
        }
    }

    pub async fn access_token(&self) -> Result<AccessToken, ServiceError> {
        tracing::debug!("Requesting access token from {}", self.url);
        let response = self
            .http
            .post(&self.url)
            .json(&ClientCredentialsRequest {
                grant_type: "client_credentials",
                client_id: &self.client_id,
                client_secret: &self.client_secret,
            })
            .send()
            .await?
            .check_success()
            .await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
