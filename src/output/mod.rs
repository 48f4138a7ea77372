//! Rendering of command results for the terminal or for scripts

pub mod human;
pub mod json;

use crate::engine::executor::ExecutionResult;

/// How `drafts` prints a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare values, ready for pipes and `$(...)`
    #[default]
    Human,
    /// One JSON document per invocation
    Json,
}

impl OutputFormat {
    /// Format selected by the global `--json` flag
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

pub fn format_output(result: &ExecutionResult, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format_human(result),
        OutputFormat::Json => json::format_json(result),
    }
}
