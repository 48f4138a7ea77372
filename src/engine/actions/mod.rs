//! Operations that change drafts or app state

pub mod app;
pub mod create;
pub mod folder;
pub mod modify;

pub use app::{run_action, run_action_on_draft, select_draft};
pub use create::{create_draft, CreateOptions};
pub use folder::{archive_draft, trash_draft};
pub use modify::{append_to_draft, prepend_to_draft, replace_content, tag_draft, ModifyOptions};
