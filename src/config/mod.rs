#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::domain::ports::ConfigSource;
use crate::utils::error::Result;
use crate::utils::logger::{LogLevel, LogTarget};
use crate::utils::validation::{validate_non_empty_list, validate_positive_number, Validate};
use std::time::Duration;

pub const DEFAULT_API_CALLS: &[&str] = &[
    "api/v1/wikifolios",
    "api/v1/trades",
    "api/v1/import/wikifolios",
];
pub const DEFAULT_LOG_FILE: &str = "regressionapitest.log";
pub const DEFAULT_LOG_LEVEL: &str = "Info";

/// 合併所有設定來源後的最終設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_address: Option<String>,
    pub api_calls: Vec<String>,
    pub log_target: LogTarget,
    pub log_level: LogLevel,
    pub timeout: Duration,
}

impl Settings {
    /// `layers` 依優先順序排列，第一個有值的來源勝出，其餘用預設值
    pub fn resolve(layers: &[&dyn ConfigSource]) -> Self {
        let server_address = layers
            .iter()
            .find_map(|l| l.server_address())
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string);

        let raw_calls: Vec<String> = layers
            .iter()
            .find_map(|l| l.api_calls())
            .map(<[String]>::to_vec)
            .unwrap_or_else(|| DEFAULT_API_CALLS.iter().map(|c| c.to_string()).collect());

        let api_calls = normalize_api_calls(raw_calls);

        let log_file = layers
            .iter()
            .find_map(|l| l.log_file())
            .unwrap_or(DEFAULT_LOG_FILE);
        let log_level = layers
            .iter()
            .find_map(|l| l.log_level())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let timeout_seconds = layers
            .iter()
            .find_map(|l| l.timeout_seconds())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self {
            server_address,
            api_calls,
            log_target: LogTarget::parse(log_file),
            log_level: LogLevel::from_name(log_level),
            timeout: Duration::from_secs(timeout_seconds),
        }
    }
}

fn normalize_api_calls(raw_calls: Vec<String>) -> Vec<String> {
    raw_calls
        .into_iter()
        .filter_map(|call| {
            let trimmed = call.trim();
            if trimmed.is_empty() {
                // 在 logger 初始化前呼叫時不會輸出
                tracing::warn!("Skipping empty API call entry");
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("api_calls", &self.api_calls)?;
        validate_positive_number("timeout_seconds", self.timeout.as_secs(), 1)?;
        Ok(())
    }
}
