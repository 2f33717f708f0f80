//! CLI command implementations - one command per file.

pub mod exports;
pub mod imports;
pub mod langs;
pub mod symbols;

pub use exports::cmd_exports;
pub use imports::cmd_imports;
pub use langs::cmd_langs;
pub use symbols::cmd_symbols;

use std::path::Path;

use crate::extract::{self, ModuleFacts};
use crate::walk::source_files;

/// Exit code for a path that yields no inspectable files.
pub const EXIT_NO_FILES: i32 = 2;

/// Inspect every supported file under `path`.
///
/// Returns `Ok(None)` when a directory argument contains no supported
/// files; commands translate that into [`EXIT_NO_FILES`].
pub(crate) fn inspect_path(path: &Path) -> anyhow::Result<Option<Vec<ModuleFacts>>> {
    let files = source_files(path)?;
    if files.is_empty() {
        return Ok(None);
    }
    let mut all = Vec::with_capacity(files.len());
    for file in &files {
        all.push(extract::inspect_file(file)?);
    }
    Ok(Some(all))
}
