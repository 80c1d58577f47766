use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// 回應內容不是字面上的 `null`
    NotNull,
    /// 回應內容是合法 JSON
    ValidJson,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::NotNull => write!(f, "not-null"),
            CheckKind::ValidJson => write!(f, "valid-json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub kind: CheckKind,
    pub passed: bool,
}

#[derive(Debug, Clone)]
pub struct ApiCallOutcome {
    pub api_call: String,
    pub url: String,
    pub checks: Vec<CheckResult>,
}

impl ApiCallOutcome {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = CheckKind> + '_ {
        self.checks
            .iter()
            .filter(|check| !check.passed)
            .map(|check| check.kind)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<ApiCallOutcome>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed_calls(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed_calls(&self) -> usize {
        self.total() - self.passed_calls()
    }
}
