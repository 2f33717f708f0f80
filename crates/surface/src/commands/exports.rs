//! Exports command - report the effective export set of a module.

use std::path::Path;

use serde::Serialize;
use surface_facts_core::Export;

use crate::output::{emit_json, render_exports};

use super::{EXIT_NO_FILES, inspect_path};

/// One file's export report.
#[derive(Debug, Serialize)]
pub struct FileExports {
    pub path: String,
    pub language: &'static str,
    /// True when the exports come from an explicit export declaration
    /// rather than a visibility convention.
    pub declared: bool,
    pub exports: Vec<Export>,
}

/// List the names a file or directory of modules exports.
pub fn cmd_exports(path: &Path, json: bool) -> anyhow::Result<i32> {
    let Some(modules) = inspect_path(path)? else {
        eprintln!("No supported source files under {}", path.display());
        return Ok(EXIT_NO_FILES);
    };

    if json {
        let reports: Vec<FileExports> = modules
            .into_iter()
            .map(|facts| FileExports {
                path: facts.path,
                language: facts.language,
                declared: facts.exports.iter().any(|e| e.declared),
                exports: facts.exports,
            })
            .collect();
        emit_json(&reports)?;
    } else {
        for facts in &modules {
            print!("{}", render_exports(facts));
        }
    }
    Ok(0)
}
