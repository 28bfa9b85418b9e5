use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;

/// Information about an unsuccessful response.
#[derive(Debug, Clone)]
pub struct NotSuccessResponseInfo {
    pub status_code: u16,
    pub text: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl NotSuccessResponseInfo {
    /// The `message` of a JSON error body, or the raw body text.
    pub fn message(&self) -> String {
        match serde_json::from_str::<ErrorBody>(&self.text) {
            Ok(body) => body.message,
            Err(_) if self.text.trim().is_empty() => "No response body".to_string(),
            Err(_) => self.text.clone(),
        }
    }
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo> {
        let status = self.status();
        if !status.is_success() {
            let info = NotSuccessResponseInfo {
                status_code: status.as_u16(),
                text: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            };
            tracing::debug!("Unsuccessful response {}: {}", info.status_code, info.text);
            return Err(info);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(text: &str) -> NotSuccessResponseInfo {
        NotSuccessResponseInfo {
            status_code: 400,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_message_from_json_body() {
        assert_eq!(
            info(r#"{"message":"Phone number is blocked","code":"E42"}"#).message(),
            "Phone number is blocked"
        );
    }

    #[test]
    fn test_message_falls_back_to_text() {
        assert_eq!(info("Bad Gateway").message(), "Bad Gateway");
        assert_eq!(info(r#"{"error":"nope"}"#).message(), r#"{"error":"nope"}"#);
        assert_eq!(info("  ").message(), "No response body");
    }
}
