//! Moving drafts between folders

use crate::error::Result;
use crate::script::{build, Interpreter, Request};

pub fn trash_draft(interpreter: &dyn Interpreter, uuid: &str) -> Result<()> {
    interpreter.run(&build(Request::Trash {
        uuid: uuid.to_string(),
    }))?;
    log::info!("moved draft {} to trash", uuid);
    Ok(())
}

pub fn archive_draft(interpreter: &dyn Interpreter, uuid: &str) -> Result<()> {
    interpreter.run(&build(Request::Archive {
        uuid: uuid.to_string(),
    }))?;
    log::info!("moved draft {} to archive", uuid);
    Ok(())
}
