//! Execution engine: reads and mutations against the Drafts app

pub mod actions;
pub mod executor;
pub mod queries;

pub use executor::{execute_command, ExecutionContext, ExecutionResult, VersionInfo};
