//! Language support for surface.
//!
//! This crate provides the `Language` trait and implementations for the
//! supported languages. Each language struct IS its support implementation.
//!
//! Grammars are statically linked from the official tree-sitter grammar
//! crates and looked up by name through the `parsers` module.
//!
//! # Feature Flags
//!
//! Languages are gated behind feature flags for customizability:
//! - `langs-all` (default): All languages
//! - `lang-python`, `lang-go`, `lang-c`: Individual language flags
//!
//! # Example
//!
//! ```ignore
//! use surface_languages::{Language, Python, parsers, support_for_path};
//! use std::path::Path;
//!
//! // Static usage (compile-time known language):
//! println!("Python function kinds: {:?}", Python.function_kinds());
//!
//! // Dynamic lookup (from file path):
//! if let Some(support) = support_for_path(Path::new("foo.py")) {
//!     let tree = parsers::parse_source(support.grammar_name(), "def f(): pass")?;
//! }
//! ```

pub mod parsers;
mod registry;
mod traits;

// Language implementations (feature-gated)
#[cfg(feature = "lang-c")]
pub mod c;
#[cfg(feature = "lang-go")]
pub mod go;
#[cfg(feature = "lang-python")]
pub mod python;

// Re-exports (always available)
pub use parsers::LanguageError;
pub use registry::{
    register, support_for_extension, support_for_grammar, support_for_path, supported_languages,
};
pub use traits::{
    Export, ExportList, Import, Language, Symbol, SymbolKind, Visibility, VisibilityMechanism,
    preceding_doc_comment,
};

// Re-export language structs (feature-gated)
#[cfg(feature = "lang-c")]
pub use c::C;
#[cfg(feature = "lang-go")]
pub use go::Go;
#[cfg(feature = "lang-python")]
pub use python::Python;
