//! Imports command - report the modules a file imports.

use std::path::Path;

use serde::Serialize;
use surface_facts_core::Import;

use crate::output::{emit_json, render_imports};

use super::{EXIT_NO_FILES, inspect_path};

/// One file's import report.
#[derive(Debug, Serialize)]
pub struct FileImports {
    pub path: String,
    pub language: &'static str,
    pub imports: Vec<Import>,
}

/// List the imports of a file or directory of modules.
pub fn cmd_imports(path: &Path, json: bool) -> anyhow::Result<i32> {
    let Some(modules) = inspect_path(path)? else {
        eprintln!("No supported source files under {}", path.display());
        return Ok(EXIT_NO_FILES);
    };

    if json {
        let reports: Vec<FileImports> = modules
            .into_iter()
            .map(|facts| FileImports {
                path: facts.path,
                language: facts.language,
                imports: facts.imports,
            })
            .collect();
        emit_json(&reports)?;
    } else {
        for facts in &modules {
            print!("{}", render_imports(facts));
        }
    }
    Ok(0)
}
