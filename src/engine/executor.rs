//! Command executor

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::cli::SubCommand;
use crate::config::AppInfo;
use crate::draft::{Draft, Filter, Folder, TagFilter};
use crate::engine::actions::*;
use crate::engine::queries::*;
use crate::error::{DraftsError, Result};
use crate::interactive::{Chooser, Editor};
use crate::output::human::summary_line;
use crate::script::Interpreter;

/// Collaborators a command runs against
pub struct ExecutionContext {
    pub interpreter: Box<dyn Interpreter>,
    pub chooser: Box<dyn Chooser>,
    pub editor: Box<dyn Editor>,
    pub app: AppInfo,
}

/// Result of command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// UUID of the draft the command created or changed
    Uuid(String),
    /// Content of the draft after the command
    Content(String),
    Tags(Vec<String>),
    Draft(Box<Draft>),
    Drafts(Vec<Draft>),
    Version(VersionInfo),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
    pub os: String,
    pub arch: String,
}

/// Execute one CLI command.
///
/// Text arguments that were left out are read from `input` to its end.
pub fn execute_command(
    cmd: &SubCommand,
    ctx: &ExecutionContext,
    input: &mut dyn Read,
) -> Result<ExecutionResult> {
    let interp = ctx.interpreter.as_ref();

    match cmd {
        SubCommand::New {
            text,
            tags,
            archive,
            flagged,
            action,
        } => {
            let text = or_input(text.as_deref(), input)?;
            let opt = CreateOptions {
                tags: tags.clone(),
                folder: if *archive { Folder::Archive } else { Folder::Inbox },
                flagged: *flagged,
                action: action.clone(),
            };
            Ok(ExecutionResult::Uuid(create_draft(interp, &text, &opt)?))
        }

        SubCommand::Prepend {
            text,
            uuid,
            tags,
            action,
        } => {
            let text = or_input(text.as_deref(), input)?;
            let uuid = resolve_uuid(interp, uuid.as_deref())?;
            let opt = ModifyOptions {
                tags: tags.clone(),
                action: action.clone(),
            };
            prepend_to_draft(interp, &uuid, &text, &opt)?;
            content_of(interp, &uuid)
        }

        SubCommand::Append {
            text,
            uuid,
            tags,
            action,
        } => {
            let text = or_input(text.as_deref(), input)?;
            let uuid = resolve_uuid(interp, uuid.as_deref())?;
            let opt = ModifyOptions {
                tags: tags.clone(),
                action: action.clone(),
            };
            append_to_draft(interp, &uuid, &text, &opt)?;
            content_of(interp, &uuid)
        }

        SubCommand::Replace { text, uuid } => {
            let text = or_input(text.as_deref(), input)?;
            let uuid = resolve_uuid(interp, uuid.as_deref())?;
            replace_content(interp, &uuid, &text)?;
            content_of(interp, &uuid)
        }

        SubCommand::Edit { uuid } => {
            let uuid = resolve_uuid(interp, uuid.as_deref())?;
            let current = get_draft(interp, &uuid)?;
            let edited = ctx.editor.edit(&current.content)?;
            if edited == current.content {
                log::info!("draft {} unchanged", uuid);
                return Ok(ExecutionResult::Content(edited));
            }
            replace_content(interp, &uuid, &edited)?;
            Ok(ExecutionResult::Content(edited))
        }

        SubCommand::Get { uuid } => {
            let uuid = resolve_uuid(interp, uuid.as_deref())?;
            content_of(interp, &uuid)
        }

        SubCommand::Info { uuid } => {
            let uuid = resolve_uuid(interp, uuid.as_deref())?;
            Ok(ExecutionResult::Draft(Box::new(get_draft(interp, &uuid)?)))
        }

        SubCommand::Select => {
            let drafts = query_drafts(interp, Filter::Inbox, &TagFilter::default())?;
            let candidates: String = drafts
                .iter()
                .map(|d| format!("{}\n", summary_line(d)))
                .collect();

            let choice = ctx
                .chooser
                .choose(&candidates)?
                .ok_or(DraftsError::SelectionCancelled)?;
            let uuid = choice
                .split_whitespace()
                .next()
                .ok_or(DraftsError::SelectionCancelled)?;

            select_draft(interp, uuid)?;
            content_of(interp, uuid)
        }

        SubCommand::List {
            filter,
            tags,
            omit_tags,
        } => {
            let tag_filter = TagFilter::new(tags.clone(), omit_tags.clone());
            Ok(ExecutionResult::Drafts(query_drafts(
                interp,
                *filter,
                &tag_filter,
            )?))
        }

        SubCommand::Trash { uuid } => {
            let uuid = resolve_uuid(interp, uuid.as_deref())?;
            trash_draft(interp, &uuid)?;
            Ok(ExecutionResult::Uuid(uuid))
        }

        SubCommand::Archive { uuid } => {
            let uuid = resolve_uuid(interp, uuid.as_deref())?;
            archive_draft(interp, &uuid)?;
            Ok(ExecutionResult::Uuid(uuid))
        }

        SubCommand::Tag { tags, uuid } => {
            let uuid = resolve_uuid(interp, uuid.as_deref())?;
            tag_draft(interp, &uuid, tags)?;
            Ok(ExecutionResult::Tags(get_draft(interp, &uuid)?.tags))
        }

        SubCommand::Run { action, text } => {
            let text = or_input(text.as_deref(), input)?;
            Ok(ExecutionResult::Uuid(run_action(interp, action, &text)?))
        }

        SubCommand::Version => Ok(ExecutionResult::Version(VersionInfo {
            name: ctx.app.name.clone(),
            version: ctx.app.version.clone(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        })),
    }
}

fn content_of(interp: &dyn Interpreter, uuid: &str) -> Result<ExecutionResult> {
    Ok(ExecutionResult::Content(get_draft(interp, uuid)?.content))
}

/// Use `text` if given, otherwise read all of `input`
fn or_input(text: Option<&str>, input: &mut dyn Read) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    log::debug!("reading text from stdin");
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    // Drop the newline a shell pipeline adds
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}
