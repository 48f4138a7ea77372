//! Editing draft content in the user's text editor

use std::fs;
use std::io::Write;
use std::process::Command;

use crate::error::{DraftsError, Result};

/// Fallback when neither config nor environment names an editor
pub const DEFAULT_EDITOR: &str = "vi";

pub trait Editor {
    /// Let the user edit `text`, returning the new text
    fn edit(&self, text: &str) -> Result<String>;
}

/// Runs an editor command on a scratch file
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    /// `command` may carry arguments, e.g. `code --wait`
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Use `configured`, else `$VISUAL`, else `$EDITOR`, else `vi`
    pub fn resolve(configured: Option<&str>) -> Self {
        let command = configured
            .map(str::to_string)
            .or_else(|| non_empty_var("VISUAL"))
            .or_else(|| non_empty_var("EDITOR"))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        Self::new(command)
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Editor for ExternalEditor {
    fn edit(&self, text: &str) -> Result<String> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| DraftsError::Editor("editor command is empty".to_string()))?;

        let mut file = tempfile::Builder::new()
            .prefix("drafts-")
            .suffix(".md")
            .tempfile()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        log::debug!("opening {} in {}", file.path().display(), program);
        let status = Command::new(program)
            .args(parts)
            .arg(file.path())
            .status()
            .map_err(|e| DraftsError::Editor(format!("failed to run {}: {}", program, e)))?;

        if !status.success() {
            return Err(DraftsError::Editor(format!(
                "{} exited with {}",
                program, status
            )));
        }

        let mut edited = fs::read_to_string(file.path())?;
        // Editors append a final newline the draft never had
        if !text.ends_with('\n') && edited.ends_with('\n') {
            edited.pop();
        }
        Ok(edited)
    }
}
