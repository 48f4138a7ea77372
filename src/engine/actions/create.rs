//! Draft creation

use crate::draft::Folder;
use crate::engine::actions::run_action_on_draft;
use crate::error::{DraftsError, Result};
use crate::script::{build, Interpreter, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    pub tags: Vec<String>,
    pub folder: Folder,
    pub flagged: bool,
    /// Action to run on the new draft
    pub action: Option<String>,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            folder: Folder::Inbox,
            flagged: false,
            action: None,
        }
    }
}

/// Create a draft and return its UUID
pub fn create_draft(
    interpreter: &dyn Interpreter,
    text: &str,
    opt: &CreateOptions,
) -> Result<String> {
    let uuid = interpreter.run(&build(Request::Create {
        content: text.to_string(),
        tags: opt.tags.clone(),
        folder: opt.folder,
        flagged: opt.flagged,
    }))?;

    if uuid.is_empty() {
        return Err(DraftsError::Execution(
            "Drafts did not return an id for the new draft".to_string(),
        ));
    }
    log::info!("created draft {} in {}", uuid, opt.folder);

    if let Some(action) = &opt.action {
        run_action_on_draft(interpreter, action, &uuid)?;
    }

    Ok(uuid)
}
