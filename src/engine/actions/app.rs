//! App state and Drafts actions

use crate::error::{DraftsError, Result};
use crate::script::{build, Interpreter, Request};

/// Open a draft, making it the active one
pub fn select_draft(interpreter: &dyn Interpreter, uuid: &str) -> Result<()> {
    interpreter.run(&build(Request::Select {
        uuid: uuid.to_string(),
    }))?;
    Ok(())
}

/// Run `action` on a new draft holding `text`; returns the new draft's UUID
pub fn run_action(interpreter: &dyn Interpreter, action: &str, text: &str) -> Result<String> {
    let uuid = interpreter.run(&build(Request::RunAction {
        action: action.to_string(),
        text: text.to_string(),
    }))?;
    if uuid.is_empty() {
        return Err(DraftsError::Execution(format!(
            "action {:?} did not report a draft",
            action
        )));
    }
    Ok(uuid)
}

pub fn run_action_on_draft(interpreter: &dyn Interpreter, action: &str, uuid: &str) -> Result<()> {
    log::debug!("running action {:?} on {}", action, uuid);
    interpreter.run(&build(Request::RunActionOnDraft {
        action: action.to_string(),
        uuid: uuid.to_string(),
    }))?;
    Ok(())
}
