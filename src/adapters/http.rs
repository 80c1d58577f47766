use crate::domain::ports::ResponseFetcher;
use crate::utils::error::{Result, SmokeError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ResponseFetcher for ReqwestFetcher {
    async fn fetch_body(&self, url: &str) -> Result<String> {
        tracing::info!("Requesting following url: {}", url);
        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| SmokeError::RequestError {
                    url: url.to_string(),
                    source,
                })?;

        // 狀態碼不在檢查範圍內，非 2xx 也照樣檢查內容
        tracing::debug!("Response status for {}: {}", url, response.status());

        let body = response
            .text()
            .await
            .map_err(|source| SmokeError::BodyReadError {
                url: url.to_string(),
                source,
            })?;
        tracing::trace!("Got following response body: \n{}", body);
        Ok(body)
    }
}
