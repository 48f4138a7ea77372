//! In-memory stand-in for the Drafts app
//!
//! Acts on the typed request carried by each script and answers in the
//! same tab-separated format the generated AppleScript produces.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use drafts::draft::TAG_SEPARATOR;
use drafts::interactive::{Chooser, Editor};
use drafts::{
    AppInfo, Draft, DraftsError, ExecutionContext, Folder, Interpreter, Request, Result, Script,
};

#[derive(Default)]
struct State {
    drafts: Vec<Draft>,
    active: Option<String>,
    next_id: usize,
    actions_run: Vec<(String, String)>,
    scripts_run: usize,
    sources: Vec<String>,
}

#[derive(Clone, Default)]
pub struct MemoryApp {
    state: Rc<RefCell<State>>,
}

impl MemoryApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Action names Drafts knows about
    pub const ACTIONS: &'static [&'static str] = &["Copy", "Share"];

    pub fn insert(&self, content: &str, tags: &[&str], folder: Folder) -> String {
        let mut state = self.state.borrow_mut();
        let (archived, trashed) = folder_flags(folder);
        let uuid = next_uuid(&mut state);
        state.drafts.push(new_draft(
            &uuid,
            content,
            tags.iter().map(|t| t.to_string()).collect(),
            archived,
            trashed,
            false,
        ));
        uuid
    }

    pub fn draft(&self, uuid: &str) -> Option<Draft> {
        self.state
            .borrow()
            .drafts
            .iter()
            .find(|d| d.uuid == uuid)
            .cloned()
    }

    pub fn set_active(&self, uuid: &str) {
        self.state.borrow_mut().active = Some(uuid.to_string());
    }

    pub fn active(&self) -> Option<String> {
        self.state.borrow().active.clone()
    }

    pub fn actions_run(&self) -> Vec<(String, String)> {
        self.state.borrow().actions_run.clone()
    }

    pub fn scripts_run(&self) -> usize {
        self.state.borrow().scripts_run
    }

    /// AppleScript source of every script run, oldest first
    pub fn sources(&self) -> Vec<String> {
        self.state.borrow().sources.clone()
    }

    pub fn context(&self) -> ExecutionContext {
        self.context_with(Box::new(PickLine(0)), Box::new(NoEdit))
    }

    pub fn context_with(&self, chooser: Box<dyn Chooser>, editor: Box<dyn Editor>) -> ExecutionContext {
        ExecutionContext {
            interpreter: Box::new(self.clone()),
            chooser,
            editor,
            app: AppInfo::new("drafts", "0.0.0-test"),
        }
    }
}

fn next_uuid(state: &mut State) -> String {
    state.next_id += 1;
    format!("UUID-{:04}", state.next_id)
}

/// The `(isArchived, isTrashed)` pair the app stores for `folder`
fn folder_flags(folder: Folder) -> (bool, bool) {
    match folder {
        Folder::Inbox => (false, false),
        Folder::Archive => (true, false),
        Folder::Trash => (false, true),
    }
}

fn new_draft(
    uuid: &str,
    content: &str,
    tags: Vec<String>,
    archived: bool,
    trashed: bool,
    flagged: bool,
) -> Draft {
    let mut draft = Draft {
        uuid: uuid.to_string(),
        content: content.to_string(),
        title: String::new(),
        tags,
        is_flagged: flagged,
        is_archived: archived,
        is_trashed: trashed,
        folder: Folder::Inbox,
        created_at: "Monday, 1 January 2024 at 10:00:00".to_string(),
        modified_at: "Monday, 1 January 2024 at 10:00:00".to_string(),
        permalink: format!("drafts://open?uuid={}", uuid),
    };
    refresh(&mut draft);
    draft
}

fn refresh(draft: &mut Draft) {
    draft.title = draft.content.split('\n').next().unwrap_or("").to_string();
    draft.folder = Folder::classify(draft.is_trashed, draft.is_archived);
}

/// The record line the generated AppleScript would return
pub fn to_record(draft: &Draft) -> String {
    [
        draft.uuid.clone(),
        draft.title.clone(),
        draft.content.clone(),
        draft.folder.to_string(),
        draft.is_flagged.to_string(),
        draft.is_archived.to_string(),
        draft.is_trashed.to_string(),
        draft.tags.join(TAG_SEPARATOR),
        draft.created_at.clone(),
        draft.modified_at.clone(),
        draft.permalink.clone(),
    ]
    .join("\t")
}

fn not_found(uuid: &str) -> DraftsError {
    DraftsError::Execution(format!("Can't get draft id \"{}\"", uuid))
}

impl State {
    fn find_mut(&mut self, uuid: &str) -> Result<&mut Draft> {
        self.drafts
            .iter_mut()
            .find(|d| d.uuid == uuid)
            .ok_or_else(|| not_found(uuid))
    }

    fn edit(&mut self, uuid: &str, change: impl FnOnce(&mut Draft)) -> Result<String> {
        let draft = self.find_mut(uuid)?;
        change(draft);
        refresh(draft);
        Ok(String::new())
    }
}

fn check_action(action: &str) -> Result<()> {
    if MemoryApp::ACTIONS.contains(&action) {
        Ok(())
    } else {
        Err(DraftsError::Execution(format!("Action not found: {}", action)))
    }
}

impl Interpreter for MemoryApp {
    fn run(&self, script: &Script) -> Result<String> {
        let mut state = self.state.borrow_mut();
        state.scripts_run += 1;
        state.sources.push(script.source().to_string());

        match script.request().clone() {
            Request::Create {
                content,
                tags,
                folder,
                flagged,
            } => {
                let (archived, trashed) = folder_flags(folder);
                let uuid = next_uuid(&mut state);
                state
                    .drafts
                    .push(new_draft(&uuid, &content, tags, archived, trashed, flagged));
                Ok(uuid)
            }
            Request::Prepend { uuid, text } => state.edit(&uuid, |d| {
                d.content = format!("{}\n{}", text, d.content);
            }),
            Request::Append { uuid, text } => state.edit(&uuid, |d| {
                d.content = format!("{}\n{}", d.content, text);
            }),
            Request::Replace { uuid, text } => state.edit(&uuid, |d| d.content = text),
            Request::Trash { uuid } => state.edit(&uuid, |d| d.is_trashed = true),
            Request::Archive { uuid } => state.edit(&uuid, |d| d.is_archived = true),
            Request::Tag { uuid, tags } => state.edit(&uuid, |d| {
                for tag in tags {
                    if !d.tags.contains(&tag) {
                        d.tags.push(tag);
                    }
                }
            }),
            Request::Get { uuid } => {
                let draft = state.find_mut(&uuid)?;
                Ok(to_record(draft))
            }
            Request::Query { filter } => Ok(state
                .drafts
                .iter()
                .filter(|d| filter.admits(d))
                .map(to_record)
                .collect::<Vec<_>>()
                .join("\n")),
            Request::Select { uuid } => {
                state.find_mut(&uuid)?;
                state.active = Some(uuid);
                Ok(String::new())
            }
            Request::Active => Ok(state
                .active
                .clone()
                .unwrap_or_else(|| "missing value".to_string())),
            Request::RunAction { action, text } => {
                check_action(&action)?;
                let uuid = next_uuid(&mut state);
                state
                    .drafts
                    .push(new_draft(&uuid, &text, Vec::new(), false, false, false));
                state.actions_run.push((action, uuid.clone()));
                Ok(uuid)
            }
            Request::RunActionOnDraft { action, uuid } => {
                check_action(&action)?;
                state.find_mut(&uuid)?;
                state.actions_run.push((action, uuid));
                Ok(String::new())
            }
        }
    }
}

/// Chooses the candidate at a fixed position
pub struct PickLine(pub usize);

impl Chooser for PickLine {
    fn choose(&self, candidates: &str) -> Result<Option<String>> {
        Ok(candidates.lines().nth(self.0).map(str::to_string))
    }
}

/// Records what the chooser was offered, then picks the last line
pub struct Recording(pub Rc<RefCell<String>>);

impl Chooser for Recording {
    fn choose(&self, candidates: &str) -> Result<Option<String>> {
        *self.0.borrow_mut() = candidates.to_string();
        Ok(candidates.lines().last().map(str::to_string))
    }
}

pub struct NoEdit;

impl Editor for NoEdit {
    fn edit(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

/// Appends a signature line, like a user typing at the end
pub struct Sign;

impl Editor for Sign {
    fn edit(&self, text: &str) -> Result<String> {
        Ok(format!("{}\n-- me", text))
    }
}
