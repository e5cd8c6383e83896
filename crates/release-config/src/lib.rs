mod defaults;
mod error;
mod file;
mod registry;
mod repository;
mod value;

pub use defaults::{CONFIG_FILE_NAME, DEFAULT_REGISTRY};
pub use error::ConfigError;
pub use registry::Registry;
pub use repository::{FieldDescriptor, RepositoryDescriptor};
pub use value::ValueSource;

pub type Result<T> = std::result::Result<T, ConfigError>;
