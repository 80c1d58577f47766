use crate::domain::ports::ConfigSource;
use crate::utils::error::{Result, SmokeError};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub requests: RequestsSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestsSection {
    pub api_calls: Option<Vec<String>>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub file: Option<String>,
    pub level: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SmokeError::ConfigValidationError {
                field: "config".to_string(),
                message: format!("Cannot read {}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SmokeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SERVER_ADDRESS})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigSource for FileConfig {
    fn server_address(&self) -> Option<&str> {
        self.server.address.as_deref()
    }

    fn api_calls(&self) -> Option<&[String]> {
        self.requests.api_calls.as_deref()
    }

    fn log_file(&self) -> Option<&str> {
        self.logging.file.as_deref()
    }

    fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.requests.timeout_seconds
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.requests.timeout_seconds {
            validate_positive_number("requests.timeout_seconds", timeout, 1)?;
        }
        if let Some(file) = &self.logging.file {
            validate_non_empty_string("logging.file", file)?;
        }
        Ok(())
    }
}
