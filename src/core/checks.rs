use crate::domain::model::{CheckKind, CheckResult};

pub const NULL_LITERAL: &str = "null";

/// 完全等於 `null` 才算，不做 trim
pub fn is_null_response(body: &str) -> bool {
    body == NULL_LITERAL
}

/// 任何 JSON 值都接受 (物件、陣列、字串、數字、布林、null)
pub fn is_valid_json(body: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(body).is_ok()
}

pub fn check_body(body: &str) -> Vec<CheckResult> {
    vec![
        CheckResult {
            kind: CheckKind::NotNull,
            passed: !is_null_response(body),
        },
        CheckResult {
            kind: CheckKind::ValidJson,
            passed: is_valid_json(body),
        },
    ]
}
