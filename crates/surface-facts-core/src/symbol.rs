//! Symbol types for module facts.

use serde::{Deserialize, Serialize};

/// Symbol kind classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Method,
    Class,
    Struct,
    Enum,
    Union,
    Interface,
    Module,
    Type,
    Constant,
    Variable,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Method => "method",
            SymbolKind::Class => "class",
            SymbolKind::Struct => "struct",
            SymbolKind::Enum => "enum",
            SymbolKind::Union => "union",
            SymbolKind::Interface => "interface",
            SymbolKind::Module => "module",
            SymbolKind::Type => "type",
            SymbolKind::Constant => "constant",
            SymbolKind::Variable => "variable",
        }
    }
}

/// Symbol visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
    Internal,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Internal => "internal",
        }
    }
}

/// How a language determines symbol visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityMechanism {
    /// Explicit export declaration (Python: `__all__ = [...]`)
    ExportList,
    /// Access modifier keywords (Java, C#: `public`, `private`, `protected`)
    AccessModifier,
    /// Naming convention (Go: uppercase = public, Python: underscore = private)
    NamingConvention,
    /// Header-based (C: `static` symbols are private to the translation unit)
    HeaderBased,
    /// Everything is public by default
    AllPublic,
}

impl VisibilityMechanism {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityMechanism::ExportList => "export_list",
            VisibilityMechanism::AccessModifier => "access_modifier",
            VisibilityMechanism::NamingConvention => "naming_convention",
            VisibilityMechanism::HeaderBased => "header_based",
            VisibilityMechanism::AllPublic => "all_public",
        }
    }
}

/// A code symbol extracted from source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub signature: String,
    pub docstring: Option<String>,
    pub start_line: usize,
    pub end_line: usize,
    pub visibility: Visibility,
    pub children: Vec<Symbol>,
}
