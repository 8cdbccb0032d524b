// Persists the rendered README. The file is replaced in full on every run.

use crate::error::GenerateError;
use std::fs;
use std::path::Path;

pub fn write_document(path: &Path, contents: &str) -> Result<(), GenerateError> {
    fs::write(path, contents).map_err(|source| GenerateError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
