use crate::utils::error::{Result, SmokeError};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

const STDOUT_TARGET: &str = "stdout";

/// 日誌輸出位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    File(PathBuf),
}

impl LogTarget {
    /// `stdout` (不分大小寫) 表示標準輸出，其他值視為檔案路徑
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(STDOUT_TARGET) {
            LogTarget::Stdout
        } else {
            LogTarget::File(PathBuf::from(trimmed))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// 無法辨識的等級一律退回 Info
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// 持有 non-blocking writer 的 guard，drop 時把緩衝寫入檔案
#[derive(Debug)]
pub struct LoggerGuard {
    _guard: Option<WorkerGuard>,
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("regression_apitest={}", level.as_directive()))
    })
}

pub fn init_logger(target: &LogTarget, level: LogLevel) -> Result<LoggerGuard> {
    match target {
        LogTarget::Stdout => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(true)
                        .with_line_number(true)
                        .with_writer(std::io::stdout)
                        .compact()
                        .with_filter(env_filter(level)),
                )
                .try_init()
                .map_err(|e| SmokeError::LoggerInitError {
                    message: e.to_string(),
                })?;

            Ok(LoggerGuard { _guard: None })
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| SmokeError::LogFileError {
                    path: path.display().to_string(),
                    source,
                })?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            // 錯誤同時寫到 stdout，不看日誌檔也能發現失敗
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_file(true)
                        .with_line_number(true)
                        .with_writer(writer)
                        .with_filter(env_filter(level)),
                )
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stdout)
                        .compact()
                        .with_filter(LevelFilter::ERROR),
                )
                .try_init()
                .map_err(|e| SmokeError::LoggerInitError {
                    message: e.to_string(),
                })?;

            Ok(LoggerGuard {
                _guard: Some(guard),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_target_parse() {
        assert_eq!(LogTarget::parse("stdout"), LogTarget::Stdout);
        assert_eq!(LogTarget::parse("STDOUT"), LogTarget::Stdout);
        assert_eq!(
            LogTarget::parse("regressionapitest.log"),
            LogTarget::File(PathBuf::from("regressionapitest.log"))
        );
    }

    #[test]
    fn test_log_level_from_name() {
        assert_eq!(LogLevel::from_name("Trace"), LogLevel::Trace);
        assert_eq!(LogLevel::from_name("TRACE"), LogLevel::Trace);
        assert_eq!(LogLevel::from_name("Info"), LogLevel::Info);
        assert_eq!(LogLevel::from_name("warning"), LogLevel::Warn);
        assert_eq!(LogLevel::from_name("verbose"), LogLevel::Info);
        assert_eq!(LogLevel::from_name(""), LogLevel::Info);
    }

    #[test]
    fn test_log_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = LogTarget::File(dir.path().join("missing").join("run.log"));

        let err = init_logger(&target, LogLevel::Info).unwrap_err();
        assert!(matches!(err, SmokeError::LogFileError { .. }));
    }
}
