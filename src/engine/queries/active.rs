//! The app's current draft

use crate::error::{DraftsError, Result};
use crate::script::{build, Interpreter, Request};

/// AppleScript's rendering of an unset value
const MISSING_VALUE: &str = "missing value";

/// UUID of the draft currently open in Drafts
pub fn active_uuid(interpreter: &dyn Interpreter) -> Result<String> {
    let uuid = interpreter.run(&build(Request::Active))?;
    if uuid.is_empty() || uuid == MISSING_VALUE {
        return Err(DraftsError::NoActiveDraft);
    }
    Ok(uuid)
}

/// Use `uuid` if given, otherwise the active draft
pub fn resolve_uuid(interpreter: &dyn Interpreter, uuid: Option<&str>) -> Result<String> {
    match uuid {
        Some(u) if !u.trim().is_empty() => Ok(u.to_string()),
        _ => {
            let active = active_uuid(interpreter)?;
            log::debug!("no UUID given, using active draft {}", active);
            Ok(active)
        }
    }
}
