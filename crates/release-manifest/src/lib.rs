mod error;
mod pattern;
mod writer;

pub use error::ManifestError;
pub use pattern::{FieldPattern, PREFIX_GROUP, SUFFIX_GROUP};
pub use writer::{FieldUpdate, rewrite_field, substitute};
