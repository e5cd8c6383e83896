use dialoguer::Confirm;
use release_operations::traits::InteractionProvider;
use release_operations::{OperationError, Result};
use tracing::warn;

use crate::environment::non_interactive_reason;

/// How commit confirmations are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    /// Prompt on the terminal; decline when no terminal is available.
    Ask,
    Always,
    Never,
}

impl ConfirmMode {
    #[must_use]
    pub fn from_flags(yes: bool, no_commit: bool) -> Self {
        match (yes, no_commit) {
            (true, _) => Self::Always,
            (false, true) => Self::Never,
            (false, false) => Self::Ask,
        }
    }
}

pub struct TerminalInteractionProvider {
    mode: ConfirmMode,
}

impl TerminalInteractionProvider {
    #[must_use]
    pub fn new(mode: ConfirmMode) -> Self {
        Self { mode }
    }
}

impl InteractionProvider for TerminalInteractionProvider {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        match self.mode {
            ConfirmMode::Always => Ok(true),
            ConfirmMode::Never => Ok(false),
            ConfirmMode::Ask => {
                if let Some(reason) = non_interactive_reason() {
                    warn!(%reason, "cannot prompt, declining: {prompt}");
                    return Ok(false);
                }

                Confirm::new()
                    .with_prompt(prompt)
                    .default(false)
                    .interact()
                    .map_err(|e| match e {
                        dialoguer::Error::IO(io_err) => OperationError::Interaction(io_err),
                    })
            }
        }
    }
}
