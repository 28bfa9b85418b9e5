use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use phonegate::submission::{SubmissionAdapter, SubmissionError, SubmissionOutcome};

use super::{endpoint, http::ResponseExt, ServiceError};

const DEFAULT_REJECTION: &str = "The phone number was refused";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhoneChallengeRequest<'a> {
    phone_number: &'a str,
    country_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct PhoneChallengeResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl From<PhoneChallengeResponse> for SubmissionOutcome {
    fn from(res: PhoneChallengeResponse) -> Self {
        if res.success {
            SubmissionOutcome::Accepted
        } else {
            SubmissionOutcome::Rejected {
                message: res
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
            }
        }
    }
}

impl From<ServiceError> for SubmissionError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Unsuccessful(info) => SubmissionError {
                http_status: Some(info.status_code),
                message: info.message(),
            },
            e => SubmissionError::new(e.to_string()),
        }
    }
}

/// Starts the phone two-factor challenge on behalf of an authenticated client.
#[derive(Clone)]
pub struct TwoFactorClient {
    http: Client,
    url: String,
    token: String,
}

impl std::fmt::Debug for TwoFactorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("TwoFactorClient")
            .field("url", &self.url)
            .finish()
    }
}

impl TwoFactorClient {
    pub fn new(http: Client, api_url: &str, token: String) -> Self {
        Self {
            http,
            url: endpoint(api_url, "/v1/two-factor/phone"),
            token,
        }
    }

    async fn request_challenge(
        &self,
        phone_digits: &str,
        country_id: &str,
    ) -> Result<PhoneChallengeResponse, ServiceError> {
        tracing::debug!("Requesting phone challenge for country {}", country_id);
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&PhoneChallengeRequest {
                phone_number: phone_digits,
                country_id,
            })
            .send()
            .await?
            .check_success()
            .await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SubmissionAdapter for TwoFactorClient {
    async fn submit(
        &self,
        phone_digits: &str,
        country_id: &str,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let res = self.request_challenge(phone_digits, country_id).await;
        if let Err(e) = &res {
            tracing::warn!("Phone challenge request failed: {}", e);
        }
        Ok(res?.into())
    }
}
