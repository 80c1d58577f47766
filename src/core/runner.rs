use crate::core::checks::check_body;
use crate::domain::model::{ApiCallOutcome, CheckKind, RunSummary};
use crate::domain::ports::ResponseFetcher;
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::validate_url;

const DEFAULT_SCHEME: &str = "http://";

/// 沒有 scheme 的位址補上 `http://`，並去掉結尾的 `/`
pub fn build_base_url(address: &str) -> Result<String> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(SmokeError::MissingConfigError {
            field: "server_address".to_string(),
        });
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, trimmed)
    };
    let base_url = with_scheme.trim_end_matches('/').to_string();

    validate_url("server_address", &base_url)?;
    Ok(base_url)
}

pub fn join_api_url(base_url: &str, api_call: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        api_call.trim_start_matches('/')
    )
}

/// 依序對每個 API 呼叫發出 GET 並檢查回應
pub struct SmokeRunner<F: ResponseFetcher> {
    fetcher: F,
    base_url: String,
}

impl<F: ResponseFetcher> SmokeRunner<F> {
    pub fn new(fetcher: F, base_url: String) -> Self {
        Self { fetcher, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_url(&self, api_call: &str) -> String {
        join_api_url(&self.base_url, api_call)
    }

    pub async fn check_api_call(&self, api_call: &str) -> Result<ApiCallOutcome> {
        let url = self.request_url(api_call);
        let body = self.fetcher.fetch_body(&url).await?;

        tracing::info!("Checking API call: {}", api_call);
        let checks = check_body(&body);
        for check in &checks {
            match (check.kind, check.passed) {
                (CheckKind::NotNull, false) => {
                    tracing::error!("API call {} failed: the response was null", api_call)
                }
                (CheckKind::NotNull, true) => {
                    tracing::info!("API call {} succeeded: response was not 'null'", api_call)
                }
                (CheckKind::ValidJson, false) => tracing::error!(
                    "API call {} failed: the response was not a valid JSON",
                    api_call
                ),
                (CheckKind::ValidJson, true) => {
                    tracing::info!("API call {} succeeded: response was a valid JSON", api_call)
                }
            }
        }

        Ok(ApiCallOutcome {
            api_call: api_call.to_string(),
            url,
            checks,
        })
    }

    /// 傳輸錯誤會中止整個執行；檢查失敗只記錄，不中止
    pub async fn run(&self, api_calls: &[String]) -> Result<RunSummary> {
        tracing::info!("Creating requests for {}", self.base_url);

        let mut summary = RunSummary::default();
        for api_call in api_calls {
            let outcome = self.check_api_call(api_call).await?;
            summary.outcomes.push(outcome);
        }

        tracing::info!(
            "Finished {} API calls: {} passed, {} with failed checks",
            summary.total(),
            summary.passed_calls(),
            summary.failed_calls()
        );
        Ok(summary)
    }
}
