//! File discovery: expand a path argument into inspectable source files.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use surface_languages::support_for_path;

use crate::error::Error;

/// Expand `path` into the list of files to inspect.
///
/// A file argument must map to a registered language. A directory is
/// walked gitignore-aware; unrecognized files are silently skipped, so
/// the result may be empty.
pub fn source_files(path: &Path) -> Result<Vec<PathBuf>, Error> {
    if path.is_file() {
        if support_for_path(path).is_none() {
            return Err(Error::UnsupportedFile(path.to_path_buf()));
        }
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(path).build() {
        let entry = entry.map_err(|source| Error::Walk {
            path: path.to_path_buf(),
            source,
        })?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file && support_for_path(entry.path()).is_some() {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
