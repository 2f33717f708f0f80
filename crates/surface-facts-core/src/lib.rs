//! Core data types for surface facts.
//!
//! This crate defines the vocabulary for module facts - symbols, imports,
//! exports, and related metadata. These types are used by:
//! - `surface-languages` for language-specific extraction
//! - `surface` for report building and output

mod import;
mod symbol;

pub use import::{Export, ExportList, Import};
pub use symbol::{Symbol, SymbolKind, Visibility, VisibilityMechanism};
