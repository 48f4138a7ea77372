//! Draft records and the enums that classify them

pub mod record;
pub mod tags;

pub use record::{parse_record, split_records, FIELD_COUNT, TAG_SEPARATOR};
pub use tags::TagFilter;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single draft as reported by the Drafts app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub uuid: String,
    pub content: String,
    pub title: String,
    pub tags: Vec<String>,
    pub is_flagged: bool,
    pub is_archived: bool,
    pub is_trashed: bool,
    pub folder: Folder,
    pub created_at: String,
    pub modified_at: String,
    pub permalink: String,
}

impl Draft {
    /// First line of the content, split at the first run of newlines
    pub fn first_line(&self) -> &str {
        self.content.split('\n').next().unwrap_or("")
    }
}

/// Visibility bucket of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    Inbox,
    Archive,
    Trash,
}

impl Folder {
    /// Trash wins over archive; anything else is the inbox.
    pub fn classify(is_trashed: bool, is_archived: bool) -> Folder {
        if is_trashed {
            Folder::Trash
        } else if is_archived {
            Folder::Archive
        } else {
            Folder::Inbox
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Folder::Inbox => "inbox",
            Folder::Archive => "archive",
            Folder::Trash => "trash",
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which drafts a query should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Filter {
    #[default]
    Inbox,
    Flagged,
    Archive,
    Trash,
    All,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::Inbox => "inbox",
            Filter::Flagged => "flagged",
            Filter::Archive => "archive",
            Filter::Trash => "trash",
            Filter::All => "all",
        }
    }

    /// The single folder this filter selects, if it maps to one
    pub fn folder(&self) -> Option<Folder> {
        match self {
            Filter::Inbox => Some(Folder::Inbox),
            Filter::Archive => Some(Folder::Archive),
            Filter::Trash => Some(Folder::Trash),
            Filter::Flagged | Filter::All => None,
        }
    }

    /// Whether a draft belongs in the result of this filter
    pub fn admits(&self, draft: &Draft) -> bool {
        match self {
            Filter::All => true,
            Filter::Flagged => draft.is_flagged && !draft.is_trashed,
            _ => self.folder() == Some(draft.folder),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
