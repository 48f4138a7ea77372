//! Content and tag changes on existing drafts

use crate::engine::actions::run_action_on_draft;
use crate::error::Result;
use crate::script::{build, Interpreter, Request};

/// Follow-up steps after prepending or appending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyOptions {
    pub tags: Vec<String>,
    pub action: Option<String>,
}

pub fn prepend_to_draft(
    interpreter: &dyn Interpreter,
    uuid: &str,
    text: &str,
    opt: &ModifyOptions,
) -> Result<()> {
    interpreter.run(&build(Request::Prepend {
        uuid: uuid.to_string(),
        text: text.to_string(),
    }))?;
    finish(interpreter, uuid, opt)
}

pub fn append_to_draft(
    interpreter: &dyn Interpreter,
    uuid: &str,
    text: &str,
    opt: &ModifyOptions,
) -> Result<()> {
    interpreter.run(&build(Request::Append {
        uuid: uuid.to_string(),
        text: text.to_string(),
    }))?;
    finish(interpreter, uuid, opt)
}

pub fn replace_content(interpreter: &dyn Interpreter, uuid: &str, text: &str) -> Result<()> {
    interpreter.run(&build(Request::Replace {
        uuid: uuid.to_string(),
        text: text.to_string(),
    }))?;
    Ok(())
}

/// Add tags the draft does not already carry
pub fn tag_draft(interpreter: &dyn Interpreter, uuid: &str, tags: &[String]) -> Result<()> {
    if tags.is_empty() {
        return Ok(());
    }
    interpreter.run(&build(Request::Tag {
        uuid: uuid.to_string(),
        tags: tags.to_vec(),
    }))?;
    Ok(())
}

fn finish(interpreter: &dyn Interpreter, uuid: &str, opt: &ModifyOptions) -> Result<()> {
    tag_draft(interpreter, uuid, &opt.tags)?;
    if let Some(action) = &opt.action {
        run_action_on_draft(interpreter, action, uuid)?;
    }
    Ok(())
}
