//! Interactive selection via fzf

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::error::{DraftsError, Result};

/// Picks one line out of newline-separated candidates
pub trait Chooser {
    /// Returns `None` when the user made no choice
    fn choose(&self, candidates: &str) -> Result<Option<String>>;
}

#[derive(Debug, Clone)]
pub struct Fzf {
    program: String,
    args: Vec<String>,
}

impl Fzf {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Default for Fzf {
    fn default() -> Self {
        Self::new("fzf", Vec::new())
    }
}

impl Chooser for Fzf {
    fn choose(&self, candidates: &str) -> Result<Option<String>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| DraftsError::Execution(format!("failed to run {}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            // The chooser may exit before reading everything
            if let Err(e) = stdin.write_all(candidates.as_bytes()) {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }
        let output = child.wait_with_output()?;

        // fzf exits 1 for no match and 130 when interrupted
        if !output.status.success() {
            log::debug!("{} exited with {}", self.program, output.status);
            return Ok(None);
        }

        let choice = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
        Ok(if choice.is_empty() { None } else { Some(choice) })
    }
}
