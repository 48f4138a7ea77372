//! drafts - work with the Drafts app from the command line
//!
//! Every operation is rendered to a small AppleScript, run through
//! `osascript`, and the tab-separated output is parsed back into [`Draft`]
//! records. Drafts itself owns all storage; nothing is cached here.
//!
//! # Example
//!
//! ```no_run
//! use drafts::{query_drafts, Filter, OsaScript, TagFilter};
//!
//! let osascript = OsaScript::default();
//! let tags = TagFilter::new(vec!["work".to_string()], vec![]);
//! for draft in query_drafts(&osascript, Filter::Inbox, &tags).unwrap() {
//!     println!("{}\t{}", draft.uuid, draft.first_line());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod draft;
pub mod engine;
pub mod error;
pub mod interactive;
pub mod output;
pub mod script;

pub use config::{AppInfo, Config};
pub use draft::{Draft, Filter, Folder, TagFilter};
pub use engine::actions::{CreateOptions, ModifyOptions};
pub use engine::queries::{get_draft, query_drafts};
pub use engine::{execute_command, ExecutionContext, ExecutionResult};
pub use error::{DraftsError, Result};
pub use output::{format_output, OutputFormat};
pub use script::{Interpreter, OsaScript, Request, Script};
