pub mod auth;
pub mod countries;
pub mod flags;
pub mod http;
pub mod twofa;

use http::NotSuccessResponseInfo;

#[derive(Debug)]
pub enum ServiceError {
    Network(reqwest::Error),
    Unsuccessful(NotSuccessResponseInfo),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Unsuccessful(info) => write!(f, "{}: {}", info.status_code, info.message()),
            Self::Parse(e) => write!(f, "Unexpected response: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<reqwest::Error> for ServiceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value)
    }
}

impl From<NotSuccessResponseInfo> for ServiceError {
    fn from(value: NotSuccessResponseInfo) -> Self {
        Self::Unsuccessful(value)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Joins a base url from the configuration with an endpoint path.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint("https://api.phonegate.io/", "/v1/countries"),
            "https://api.phonegate.io/v1/countries"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:4000", "/oauth/token"),
            "http://127.0.0.1:4000/oauth/token"
        );
    }

    #[test]
    fn test_unsuccessful_display() {
        let err = ServiceError::from(NotSuccessResponseInfo {
            status_code: 503,
            text: "upstream unavailable".to_string(),
        });
        assert_eq!(err.to_string(), "503: upstream unavailable");
    }
}
