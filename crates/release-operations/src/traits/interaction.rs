use crate::Result;

pub trait InteractionProvider: Send + Sync {
    /// Asks a yes/no question; `false` skips the guarded side effects.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}
