//! AppleScript source generation
//!
//! All user-supplied text passes through [`escape`] before it is placed in
//! a string literal; this is the only place interpolation happens.

use crate::draft::{Filter, Folder, TAG_SEPARATOR};
use crate::script::{Request, Script};

/// Escape text for use inside an AppleScript string literal.
///
/// Backslashes go first so the backslashes added for quotes are not
/// escaped a second time.
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render tags as an AppleScript list literal, e.g. `{"a", "b"}`
pub fn tag_list(tags: &[String]) -> String {
    let items: Vec<String> = tags.iter().map(|t| format!("\"{}\"", escape(t))).collect();
    format!("{{{}}}", items.join(", "))
}

/// Render a request to AppleScript source
pub fn build(request: Request) -> Script {
    let source = match &request {
        Request::Create {
            content,
            tags,
            folder,
            flagged,
        } => create(content, tags, *folder, *flagged),
        Request::Prepend { uuid, text } => set_content(
            uuid,
            &format!("\"{}\" & linefeed & (content of d)", escape(text)),
        ),
        Request::Append { uuid, text } => set_content(
            uuid,
            &format!("(content of d) & linefeed & \"{}\"", escape(text)),
        ),
        Request::Replace { uuid, text } => set_content(uuid, &format!("\"{}\"", escape(text))),
        Request::Trash { uuid } => on_draft(uuid, "set isTrashed of d to true"),
        Request::Archive { uuid } => on_draft(uuid, "set isArchived of d to true"),
        Request::Tag { uuid, tags } => tag(uuid, tags),
        Request::Get { uuid } => get(uuid),
        Request::Query { filter } => query(*filter),
        Request::Select { uuid } => on_draft(uuid, "open d"),
        Request::Active => tell("return id of current draft"),
        Request::RunAction { action, text } => run_action(action, text),
        Request::RunActionOnDraft { action, uuid } => run_action_on_draft(action, uuid),
    };

    Script { request, source }
}

fn tell(body: &str) -> String {
    format!(
        "tell application \"Drafts\"\n{}\nend tell",
        indent(body, 1)
    )
}

fn indent(body: &str, depth: usize) -> String {
    let prefix = "\t".repeat(depth);
    body.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn on_draft(uuid: &str, statement: &str) -> String {
    tell(&format!(
        "set d to draft id \"{}\"\n{}",
        escape(uuid),
        statement
    ))
}

fn set_content(uuid: &str, expr: &str) -> String {
    on_draft(uuid, &format!("set content of d to {}", expr))
}

fn create(content: &str, tags: &[String], folder: Folder, flagged: bool) -> String {
    tell(&format!(
        "set d to make new draft with properties {{content:\"{}\", flagged:{}, tags:{}}}\n\
         set folder of d to {}\n\
         return id of d",
        escape(content),
        flagged,
        tag_list(tags),
        folder.as_str()
    ))
}

fn tag(uuid: &str, tags: &[String]) -> String {
    on_draft(
        uuid,
        &format!(
            "set existingTags to tags of d\n\
             repeat with t in {}\n\
             \tif (contents of t) is not in existingTags then\n\
             \t\tset end of existingTags to (contents of t)\n\
             \tend if\n\
             end repeat\n\
             set tags of d to existingTags",
            tag_list(tags)
        ),
    )
}

/// Emits one record for the draft bound to `d` into `line_out`.
///
/// Shared by every read path so the folder name is always derived the
/// same way: trash wins over archive, anything else is the inbox.
fn record_line() -> String {
    format!(
        "set folder_name to \"inbox\"\n\
         if isTrashed of d then\n\
         \tset folder_name to \"trash\"\n\
         else if isArchived of d then\n\
         \tset folder_name to \"archive\"\n\
         end if\n\
         set tag_str to \"\"\n\
         repeat with t in (tags of d)\n\
         \tif tag_str is not \"\" then set tag_str to tag_str & \"{sep}\"\n\
         \tset tag_str to tag_str & t\n\
         end repeat\n\
         set line_out to (id of d) & tab & (title of d) & tab & (content of d) & tab & folder_name & tab & (flagged of d) & tab & (isArchived of d) & tab & (isTrashed of d) & tab & tag_str & tab & ((createdAt of d) as string) & tab & ((modifiedAt of d) as string) & tab & (permalink of d)",
        sep = TAG_SEPARATOR
    )
}

fn get(uuid: &str) -> String {
    tell(&format!(
        "set d to draft id \"{}\"\n{}\nreturn line_out",
        escape(uuid),
        record_line()
    ))
}

/// The `every draft ...` selector for a filter
fn selector(filter: Filter) -> &'static str {
    match filter {
        Filter::Inbox => "every draft whose isArchived is false and isTrashed is false",
        Filter::Archive => "every draft whose isArchived is true and isTrashed is false",
        Filter::Trash => "every draft whose isTrashed is true",
        Filter::Flagged => "every draft whose flagged is true and isTrashed is false",
        Filter::All => "every draft",
    }
}

fn query(filter: Filter) -> String {
    tell(&format!(
        "set output to \"\"\n\
         repeat with d in ({})\n\
         {}\n\
         \tif output is \"\" then\n\
         \t\tset output to line_out\n\
         \telse\n\
         \t\tset output to output & linefeed & line_out\n\
         \tend if\n\
         end repeat\n\
         return output",
        selector(filter),
        indent(&record_line(), 1)
    ))
}

fn find_action(action: &str) -> String {
    let name = escape(action);
    format!(
        "set actionToRun to missing value\n\
         repeat with a in (every action)\n\
         \tif name of a is \"{name}\" then\n\
         \t\tset actionToRun to a\n\
         \t\texit repeat\n\
         \tend if\n\
         end repeat\n\
         if actionToRun is missing value then error \"Action not found: {name}\""
    )
}

fn run_action(action: &str, text: &str) -> String {
    tell(&format!(
        "{}\n\
         set d to make new draft with properties {{content:\"{}\"}}\n\
         perform action actionToRun on draft d\n\
         return id of d",
        find_action(action),
        escape(text)
    ))
}

fn run_action_on_draft(action: &str, uuid: &str) -> String {
    tell(&format!(
        "{}\n\
         set d to draft id \"{}\"\n\
         perform action actionToRun on draft d",
        find_action(action),
        escape(uuid)
    ))
}
