//! Execution of generated scripts

use std::process::Command;

use crate::error::{DraftsError, Result};
use crate::script::Script;

/// Program used to run AppleScript on macOS
pub const DEFAULT_INTERPRETER: &str = "osascript";

/// Runs a script against the Drafts app and returns its output
pub trait Interpreter {
    fn run(&self, script: &Script) -> Result<String>;
}

/// Runs scripts through `osascript -e <source>` (or a compatible program)
#[derive(Debug, Clone)]
pub struct OsaScript {
    program: String,
}

impl OsaScript {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for OsaScript {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl Interpreter for OsaScript {
    fn run(&self, script: &Script) -> Result<String> {
        let name = script.request().name();
        log::debug!("running {} script via {}", name, self.program);
        log::trace!("script source:\n{}", script.source());

        let output = Command::new(&self.program)
            .arg("-e")
            .arg(script.source())
            .output()
            .map_err(|e| {
                DraftsError::Execution(format!("failed to run {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::warn!("{} script failed with {}", name, output.status);
            return Err(DraftsError::Execution(format!(
                "{} script failed ({}): {}",
                name,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
