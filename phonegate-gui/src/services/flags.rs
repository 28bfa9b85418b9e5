use reqwest::Client;

use phonegate::country::Flag;

use super::{http::ResponseExt, ServiceError};

/// Downloads the image of a flag.
pub async fn fetch(http: &Client, url: &str) -> Result<Vec<u8>, ServiceError> {
    tracing::debug!("Fetching flag {}", url);
    let response = http.get(url).send().await?.check_success().await?;
    Ok(response.bytes().await?.to_vec())
}

/// Downloads a flag, handing it back along with the result.
pub async fn fetch_flag(http: Client, flag: Flag) -> (Flag, Result<Vec<u8>, String>) {
    let res = fetch(&http, &flag.url()).await.map_err(|e| e.to_string());
    (flag, res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_flag_bytes() {
        let server = MockServer::start_async().await;
        let png: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/w40/fr.png");
                then.status(200).header("content-type", "image/png").body(png);
            })
            .await;

        let bytes = fetch(&Client::new(), &server.url("/w40/fr.png"))
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(bytes, png);
    }

    #[tokio::test]
    async fn test_fetch_missing_flag() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/w40/zz.png");
                then.status(404);
            })
            .await;

        match fetch(&Client::new(), &server.url("/w40/zz.png")).await {
            Err(ServiceError::Unsuccessful(info)) => assert_eq!(info.status_code, 404),
            res => panic!("unexpected result: {:?}", res),
        }
    }
}
