use std::path::Path;

use release_manifest::{FieldPattern, FieldUpdate, rewrite_field};

use crate::Result;
use crate::traits::MetadataWriter;

#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemMetadataWriter;

impl FileSystemMetadataWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetadataWriter for FileSystemMetadataWriter {
    fn rewrite_field(
        &self,
        path: &Path,
        pattern: &FieldPattern,
        value: &str,
    ) -> Result<FieldUpdate> {
        Ok(rewrite_field(path, pattern, value)?)
    }
}
