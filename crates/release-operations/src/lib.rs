mod error;
pub mod operations;
pub mod providers;
pub mod traits;
mod workspace;

#[cfg(test)]
pub mod mocks;

pub use error::{OperationError, Result, ValidationError};
pub use workspace::{ResolvedRepository, Workspace};
