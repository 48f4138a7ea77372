//! Read operations

pub mod active;
pub mod get;
pub mod list;

pub use active::{active_uuid, resolve_uuid};
pub use get::get_draft;
pub use list::query_drafts;
