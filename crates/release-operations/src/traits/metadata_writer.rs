use std::path::Path;

use release_manifest::{FieldPattern, FieldUpdate};

use crate::Result;

pub trait MetadataWriter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    fn rewrite_field(&self, path: &Path, pattern: &FieldPattern, value: &str)
    -> Result<FieldUpdate>;
}
