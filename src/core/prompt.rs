//! Data-driven interactive prompt engine.
//!
//! Wraps TTY detection and the ask/validate/re-ask loop: a field's rule is a
//! pure `Fn(&str) -> Result<()>`, re-invoked until the value passes. In
//! non-interactive mode the default (or flag-supplied value) is validated
//! once and failures are terminal.

use crate::error::{Error, ErrorCode, Result};
use crate::tty;

/// Free text input with an optional default.
pub struct TextPrompt {
    pub question: String,
    pub default: Option<String>,
}

impl TextPrompt {
    pub fn new(question: impl Into<String>, default: Option<String>) -> Self {
        Self {
            question: question.into(),
            default,
        }
    }

    fn render(&self) -> String {
        match &self.default {
            Some(d) if !d.is_empty() => format!("{} ({}): ", self.question, d),
            _ => format!("{}: ", self.question),
        }
    }
}

pub struct PromptEngine {
    interactive: bool,
}

impl PromptEngine {
    /// Create engine with explicit interactive mode.
    pub fn with_interactive(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Ask for a value until `validate` accepts it.
    ///
    /// Empty input falls back to the prompt default. Validation rejections
    /// are printed to stderr and the same field is asked again; any other
    /// error aborts. In non-interactive mode the default is validated once.
    pub fn text_validated(
        &self,
        prompt: &TextPrompt,
        validate: impl Fn(&str) -> Result<()>,
    ) -> Result<String> {
        if !self.interactive {
            let value = prompt.default.clone().ok_or_else(|| {
                Error::validation_missing_argument(vec![prompt.question.clone()])
            })?;
            validate(&value)?;
            return Ok(value);
        }

        loop {
            let raw = tty::prompt(&prompt.render())?;
            let value = if raw.is_empty() {
                prompt.default.clone().unwrap_or_default()
            } else {
                raw
            };

            match validate(&value) {
                Ok(()) => return Ok(value),
                Err(e) if e.code == ErrorCode::ValidationInvalidArgument => {
                    eprintln!("{}", e.message);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
