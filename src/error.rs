//! Error types for drafts

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DraftsError {
    #[error("Execution error: {0}")]
    Execution(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No active draft. Pass a UUID or open a draft in Drafts")]
    NoActiveDraft,

    #[error("Draft not found: {0}")]
    NotFound(String),

    #[error("Selection cancelled")]
    SelectionCancelled,

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DraftsError>;
