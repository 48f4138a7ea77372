//! JSON output formatting

use crate::engine::executor::ExecutionResult;
use serde_json::{json, Value};

pub fn format_json(result: &ExecutionResult) -> String {
    let data: Value = match result {
        ExecutionResult::Uuid(uuid) => json!({ "uuid": uuid }),
        ExecutionResult::Content(content) => json!({ "content": content }),
        ExecutionResult::Tags(tags) => json!({ "tags": tags }),
        ExecutionResult::Draft(draft) => serde_json::to_value(draft).unwrap_or(json!(null)),
        ExecutionResult::Drafts(drafts) => serde_json::to_value(drafts).unwrap_or(json!(null)),
        ExecutionResult::Version(info) => serde_json::to_value(info).unwrap_or(json!(null)),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}
