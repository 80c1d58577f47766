use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuildError(#[from] reqwest::Error),

    #[error("Error while getting response for: {url}: {source}")]
    RequestError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error while reading response body for: {url}: {source}")]
    BodyReadError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to open log file: {path}: {source}")]
    LogFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialize logger: {message}")]
    LoggerInitError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl SmokeError {
    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SmokeError::ClientBuildError(_) => "Check the TLS setup of this machine",
            SmokeError::RequestError { .. } => {
                "Make sure the server under test is reachable and answers within the timeout"
            }
            SmokeError::BodyReadError { .. } => {
                "The connection dropped while reading the body, try again or raise --timeout-seconds"
            }
            SmokeError::IoError(_) => "Check stdin/stdout are available to the process",
            SmokeError::LogFileError { .. } => {
                "Check the log file directory exists and is writable, or pass --log-file stdout"
            }
            SmokeError::LoggerInitError { .. } => "Only one logger can be installed per process",
            SmokeError::ConfigValidationError { .. } => "Fix the syntax of the TOML config file",
            SmokeError::InvalidConfigValueError { .. } => {
                "Correct the flagged value on the command line or in the config file"
            }
            SmokeError::MissingConfigError { .. } => {
                "Pass the value with a flag or add it to the config file"
            }
        }
    }

    /// 傳輸層錯誤 (連線、逾時、讀取回應)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SmokeError::RequestError { .. } | SmokeError::BodyReadError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;
