//! AppleScript generation and execution
//!
//! Every operation against the Drafts app is expressed as a [`Request`],
//! rendered to AppleScript source by [`builder::build`] and executed by an
//! [`Interpreter`].

pub mod builder;
pub mod runner;

pub use builder::{build, escape, tag_list};
pub use runner::{Interpreter, OsaScript, DEFAULT_INTERPRETER};

use crate::draft::{Filter, Folder};

/// A typed operation against the Drafts app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Create {
        content: String,
        tags: Vec<String>,
        folder: Folder,
        flagged: bool,
    },
    Prepend { uuid: String, text: String },
    Append { uuid: String, text: String },
    Replace { uuid: String, text: String },
    Trash { uuid: String },
    Archive { uuid: String },
    Tag { uuid: String, tags: Vec<String> },
    Get { uuid: String },
    Query { filter: Filter },
    Select { uuid: String },
    Active,
    /// Run an action on a fresh draft holding `text`
    RunAction { action: String, text: String },
    RunActionOnDraft { action: String, uuid: String },
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::Create { .. } => "create",
            Request::Prepend { .. } => "prepend",
            Request::Append { .. } => "append",
            Request::Replace { .. } => "replace",
            Request::Trash { .. } => "trash",
            Request::Archive { .. } => "archive",
            Request::Tag { .. } => "tag",
            Request::Get { .. } => "get",
            Request::Query { .. } => "query",
            Request::Select { .. } => "select",
            Request::Active => "active",
            Request::RunAction { .. } => "run-action",
            Request::RunActionOnDraft { .. } => "run-action-on-draft",
        }
    }
}

/// A request together with its rendered AppleScript source
#[derive(Debug, Clone)]
pub struct Script {
    request: Request,
    source: String,
}

impl Script {
    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
pub(crate) mod testing;
