//! Folder queries with client-side tag filtering

use crate::draft::{parse_record, split_records, Draft, Filter, TagFilter};
use crate::error::Result;
use crate::script::{build, Interpreter, Request};

/// Drafts matching `filter` and `tags`, in the order the app returns them.
///
/// Records that fail to parse are skipped with a warning, as are records
/// whose flags place them outside `filter`.
pub fn query_drafts(
    interpreter: &dyn Interpreter,
    filter: Filter,
    tags: &TagFilter,
) -> Result<Vec<Draft>> {
    let output = interpreter.run(&build(Request::Query { filter }))?;
    if output.is_empty() {
        return Ok(Vec::new());
    }

    let records = split_records(&output);
    let mut drafts = Vec::with_capacity(records.len());
    for record in &records {
        match parse_record(record) {
            Ok(draft) if !filter.admits(&draft) => {
                log::warn!("skipping draft {}: not in {}", draft.uuid, filter)
            }
            Ok(draft) if tags.matches(&draft) => drafts.push(draft),
            Ok(_) => {}
            Err(e) => log::warn!("skipping unreadable record: {}", e),
        }
    }

    log::debug!(
        "{} query returned {} records, {} after tag filtering",
        filter,
        records.len(),
        drafts.len()
    );
    Ok(drafts)
}
