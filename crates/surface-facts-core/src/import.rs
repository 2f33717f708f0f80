//! Import and export types for module facts.

use serde::{Deserialize, Serialize};

use crate::SymbolKind;

/// An import statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Import {
    pub module: String,
    pub names: Vec<String>,
    pub alias: Option<String>,
    pub is_wildcard: bool,
    pub is_relative: bool,
    pub line: usize,
}

impl Import {
    /// Format as a readable summary (module + names)
    pub fn format_summary(&self) -> String {
        if self.is_wildcard {
            format!("{}::*", self.module)
        } else if self.names.is_empty() {
            self.module.clone()
        } else if self.names.len() == 1 {
            format!("{}::{}", self.module, self.names[0])
        } else {
            format!("{}::{{{}}}", self.module, self.names.join(", "))
        }
    }
}

/// An exported name.
///
/// `kind` and `line` are `None` for names declared in an export list that
/// have no matching definition in the module. Such names are still exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Export {
    pub name: String,
    pub kind: Option<SymbolKind>,
    pub line: Option<usize>,
    /// True when the export comes from an explicit export list rather than
    /// a visibility convention.
    pub declared: bool,
}

/// An explicit export declaration found in a module (Python's `__all__`).
///
/// When a module assigns the list more than once, the last plain assignment
/// is authoritative and `line` points at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportList {
    pub names: Vec<String>,
    pub line: usize,
}
