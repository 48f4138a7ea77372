//! Scripted interpreter for unit tests

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{DraftsError, Result};
use crate::script::{Interpreter, Request, Script};

/// Replies to each script with the next queued output and records the
/// requests it was given
#[derive(Default)]
pub struct Canned {
    replies: RefCell<VecDeque<Result<String>>>,
    pub requests: RefCell<Vec<Request>>,
}

impl Canned {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, output: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(output.to_string()));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(DraftsError::Execution(message.to_string())));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.requests.borrow().iter().map(Request::name).collect()
    }
}

impl Interpreter for Canned {
    fn run(&self, script: &Script) -> Result<String> {
        self.requests.borrow_mut().push(script.request().clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

/// A well-formed record line
pub fn record(uuid: &str, content: &str, tags: &[&str], archived: bool, trashed: bool) -> String {
    let folder = crate::draft::Folder::classify(trashed, archived);
    [
        uuid.to_string(),
        content.split('\n').next().unwrap_or("").to_string(),
        content.to_string(),
        folder.to_string(),
        "false".to_string(),
        archived.to_string(),
        trashed.to_string(),
        tags.join(crate::draft::TAG_SEPARATOR),
        "Monday, 1 January 2024 at 10:00:00".to_string(),
        "Monday, 1 January 2024 at 10:00:00".to_string(),
        format!("drafts://open?uuid={}", uuid),
    ]
    .join("\t")
}
