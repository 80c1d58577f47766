pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::ReqwestFetcher;
pub use config::{toml_config::FileConfig, Settings};
pub use core::runner::SmokeRunner;
pub use utils::error::{Result, SmokeError};
