//! Human-readable output formatting

use once_cell::sync::Lazy;
use regex::Regex;

use crate::draft::Draft;
use crate::engine::executor::ExecutionResult;

/// Longest first line `list` prints before truncating
pub const LIST_WIDTH: usize = 80;

/// Separates the UUID from the content in `select` candidates
pub const SEPARATOR: char = '|';

/// Stands in for newlines in one-line summaries
pub const LINEBREAK: &str = " ¶ ";

static LINEBREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

pub fn format_human(result: &ExecutionResult) -> String {
    match result {
        ExecutionResult::Uuid(uuid) => uuid.clone(),
        ExecutionResult::Content(content) => content.clone(),
        ExecutionResult::Tags(tags) => tags.join("\n"),
        ExecutionResult::Draft(draft) => format_draft(draft),
        ExecutionResult::Drafts(drafts) => drafts
            .iter()
            .map(list_line)
            .collect::<Vec<_>>()
            .join("\n"),
        ExecutionResult::Version(info) => {
            format!("{} {} ({}/{})", info.name, info.version, info.os, info.arch)
        }
    }
}

/// `<uuid>\t<first line>` as printed by `list`
pub fn list_line(draft: &Draft) -> String {
    format!("{}\t{}", draft.uuid, truncate(draft.first_line(), LIST_WIDTH))
}

/// `<uuid> | <content on one line>` as offered by `select`
pub fn summary_line(draft: &Draft) -> String {
    format!(
        "{} {} {}",
        draft.uuid,
        SEPARATOR,
        LINEBREAKS.replace_all(&draft.content, LINEBREAK)
    )
}

fn format_draft(draft: &Draft) -> String {
    let tags = if draft.tags.is_empty() {
        "-".to_string()
    } else {
        draft.tags.join(", ")
    };

    let mut output = format!(
        "Draft {}\n\
         {}\n\
         Title:    {}\n\
         Folder:   {}\n\
         Flagged:  {}\n\
         Tags:     {}\n\
         Created:  {}\n\
         Modified: {}\n\
         Link:     {}\n",
        draft.uuid,
        "-".repeat(draft.uuid.chars().count() + 6),
        draft.title,
        draft.folder,
        if draft.is_flagged { "yes" } else { "no" },
        tags,
        draft.created_at,
        draft.modified_at,
        draft.permalink
    );
    if !draft.content.is_empty() {
        output.push('\n');
        output.push_str(&draft.content);
    }
    output
}

/// Cut to `max_len` characters, ending in `...` when shortened
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
