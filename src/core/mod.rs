pub mod checks;
pub mod runner;

pub use crate::domain::model::{ApiCallOutcome, CheckKind, CheckResult, RunSummary};
pub use crate::domain::ports::{ConfigSource, ResponseFetcher};
pub use crate::utils::error::Result;
