use async_trait::async_trait;

/// What is handed to the two-factor service once the form is eligible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Digits only, no mask.
    pub phone_digits: String,
    pub country_id: String,
}

/// Answer of the two-factor service to a well-formed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected { message: String },
}

/// The request did not get an answer from the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    pub http_status: Option<u16>,
    pub message: String,
}

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            http_status: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(status) = self.http_status {
            write!(f, "{}: {}", status, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Performs the network call initiating the two-factor challenge.
///
/// Implementations own the credential and any transport policy.
#[async_trait]
pub trait SubmissionAdapter: std::fmt::Debug + Send + Sync {
    async fn submit(
        &self,
        phone_digits: &str,
        country_id: &str,
    ) -> Result<SubmissionOutcome, SubmissionError>;
}

/// Text to show for a finished submission, if it did not succeed.
///
/// Rejection and error messages are passed through verbatim, the status code
/// of an error is left to [`SubmissionError`]'s `Display` for logs.
pub fn failure_message(result: &Result<SubmissionOutcome, SubmissionError>) -> Option<String> {
    match result {
        Ok(SubmissionOutcome::Accepted) => None,
        Ok(SubmissionOutcome::Rejected { message }) => Some(message.clone()),
        Err(e) => Some(e.message.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Refuses numbers starting with a zero.
    #[derive(Debug)]
    struct FakeAdapter;

    #[async_trait]
    impl SubmissionAdapter for FakeAdapter {
        async fn submit(
            &self,
            phone_digits: &str,
            country_id: &str,
        ) -> Result<SubmissionOutcome, SubmissionError> {
            if country_id.is_empty() {
                return Err(SubmissionError {
                    http_status: Some(400),
                    message: "missing country".to_string(),
                });
            }
            if phone_digits.starts_with('0') {
                Ok(SubmissionOutcome::Rejected {
                    message: "Invalid number".to_string(),
                })
            } else {
                Ok(SubmissionOutcome::Accepted)
            }
        }
    }

    #[tokio::test]
    async fn test_adapter_behind_trait_object() {
        let adapter: Box<dyn SubmissionAdapter> = Box::new(FakeAdapter);
        assert_eq!(
            adapter.submit("5551234567", "1").await,
            Ok(SubmissionOutcome::Accepted)
        );
        let res = adapter.submit("0551234567", "1").await;
        assert_eq!(failure_message(&res), Some("Invalid number".to_string()));
        let res = adapter.submit("5551234567", "").await;
        assert_eq!(failure_message(&res), Some("missing country".to_string()));
        assert_eq!(res.unwrap_err().to_string(), "400: missing country");
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(failure_message(&Ok(SubmissionOutcome::Accepted)), None);
        assert_eq!(
            failure_message(&Ok(SubmissionOutcome::Rejected {
                message: "Too many attempts".to_string()
            })),
            Some("Too many attempts".to_string())
        );
        assert_eq!(
            failure_message(&Err(SubmissionError::new("connection refused"))),
            Some("connection refused".to_string())
        );
        assert_eq!(
            failure_message(&Err(SubmissionError {
                http_status: Some(502),
                message: "Bad gateway".to_string()
            })),
            Some("Bad gateway".to_string())
        );
    }
}
