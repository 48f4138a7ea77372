//! Parsing of the tab-separated records emitted by the generated scripts
//!
//! A record is one logical line with these fields, in order:
//!
//! ```text
//! id  title  content  folder  flagged  archived  trashed  tags  created  modified  permalink
//! ```
//!
//! Fields are separated by a horizontal tab, records by a newline, and the
//! tag field joins individual tags with [`TAG_SEPARATOR`].

use crate::draft::{Draft, Folder};
use crate::error::{DraftsError, Result};

/// Number of fields in a well-formed record
pub const FIELD_COUNT: usize = 11;

/// Joins tags inside the tag field
pub const TAG_SEPARATOR: &str = "|||";

const FIELD_SEPARATOR: char = '\t';

/// Fields after the content, which never contain tabs or newlines
const TRAILING_FIELDS: usize = 8;

/// Parse one record into a [`Draft`].
///
/// Tabs in the content yield more than [`FIELD_COUNT`] fields. The trailing
/// fields are taken from the end, and the title is the first line of the
/// content, so any tabs there appear in both fields. The surplus is split
/// between them by [`title_width`].
pub fn parse_record(line: &str) -> Result<Draft> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() < FIELD_COUNT {
        return Err(DraftsError::Parse(format!(
            "expected {} fields, got {}",
            FIELD_COUNT,
            parts.len()
        )));
    }

    let uuid = parts[0];
    if uuid.is_empty() {
        return Err(DraftsError::Parse("record has an empty id".to_string()));
    }

    let tail = &parts[parts.len() - TRAILING_FIELDS..];
    let middle = &parts[1..parts.len() - TRAILING_FIELDS];
    let width = title_width(middle);
    let title = middle[..width].join("\t");
    let content = middle[width..].join("\t");

    let is_flagged = parse_bool(tail[1]);
    let is_archived = parse_bool(tail[2]);
    let is_trashed = parse_bool(tail[3]);

    let folder = Folder::classify(is_trashed, is_archived);
    if tail[0] != folder.as_str() {
        log::debug!(
            "draft {} reported folder {:?}, flags classify it as {}",
            uuid,
            tail[0],
            folder
        );
    }

    Ok(Draft {
        uuid: uuid.to_string(),
        title,
        content,
        folder,
        is_flagged,
        is_archived,
        is_trashed,
        tags: parse_tags(tail[4]),
        created_at: tail[5].to_string(),
        modified_at: tail[6].to_string(),
        permalink: tail[7].to_string(),
    })
}

/// How many of the title-and-content fields belong to the title.
///
/// Prefers the split where the title equals the content's first line. Titles
/// drop markdown heading marks, so failing that it falls back to the split
/// where both carry the same number of tabs.
fn title_width(middle: &[&str]) -> usize {
    if middle.len() <= 2 {
        return 1;
    }

    let first_line = |width: usize| {
        let content = middle[width..].join("\t");
        content.split('\n').next().unwrap_or_default().to_string()
    };

    (1..middle.len())
        .find(|&width| first_line(width) == middle[..width].join("\t"))
        .or_else(|| {
            (1..middle.len())
                .find(|&width| first_line(width).matches(FIELD_SEPARATOR).count() == width - 1)
        })
        .unwrap_or(1)
}

/// Split multi-record output into logical records.
///
/// Content may span several physical lines, so lines are accumulated until
/// the pending text ends in a well-formed run of trailing fields.
pub fn split_records(output: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut pending: Option<String> = None;

    for line in output.split('\n') {
        let record = match pending.take() {
            Some(mut acc) => {
                acc.push('\n');
                acc.push_str(line);
                acc
            }
            None if line.is_empty() => continue,
            None => line.to_string(),
        };

        if is_complete(&record) {
            records.push(record);
        } else {
            pending = Some(record);
        }
    }

    if let Some(rest) = pending {
        records.push(rest);
    }

    records
}

/// Whether `record` holds every field and ends in a folder, three booleans
/// and four single-line fields
fn is_complete(record: &str) -> bool {
    if record.matches(FIELD_SEPARATOR).count() < FIELD_COUNT - 1 {
        return false;
    }

    let mut tail: Vec<&str> = record.rsplitn(TRAILING_FIELDS + 1, FIELD_SEPARATOR).collect();
    tail.truncate(TRAILING_FIELDS);
    tail.reverse();

    let is_bool = |field: &str| field == "true" || field == "false";
    matches!(tail[0], "inbox" | "archive" | "trash")
        && tail[1..4].iter().all(|f| is_bool(*f))
        && tail.iter().all(|f| !f.contains('\n'))
}

fn parse_bool(field: &str) -> bool {
    field == "true"
}

fn parse_tags(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(TAG_SEPARATOR).map(str::to_string).collect()
}
