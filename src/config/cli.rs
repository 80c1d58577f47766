use crate::domain::ports::ConfigSource;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "regression-apitest")]
#[command(about = "Smoke test an API: GET each path and check the body is non-null, valid JSON")]
pub struct CliConfig {
    /// The server address under test (e.g.: 192.168.11.23)
    #[arg(long, alias = "serveraddress")]
    pub server_address: Option<String>,

    /// Comma separated list of api calls to test
    #[arg(long, alias = "apicalls", value_delimiter = ',')]
    pub api_calls: Option<Vec<String>>,

    /// Log file, or 'stdout' to write to standard output
    #[arg(long, alias = "logfile")]
    pub log_file: Option<String>,

    /// Set to 'Trace' to log API responses
    #[arg(long, alias = "loglevel")]
    pub log_level: Option<String>,

    /// Per-request timeout
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log the URLs that would be requested without sending anything
    #[arg(long)]
    pub dry_run: bool,
}

impl ConfigSource for CliConfig {
    fn server_address(&self) -> Option<&str> {
        self.server_address.as_deref()
    }

    fn api_calls(&self) -> Option<&[String]> {
        self.api_calls.as_deref()
    }

    fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}
