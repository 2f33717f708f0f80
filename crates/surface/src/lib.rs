//! surface: a public-API surface inspector.
//!
//! Parses source files with tree-sitter and reports three kinds of module
//! facts: the symbols a module defines, the names it effectively exports,
//! and the modules it imports. Export semantics are language-specific and
//! provided by `surface-languages`; Python's `__all__` declaration is
//! honored with last-write-wins when reassigned.

pub mod commands;
pub mod error;
pub mod extract;
pub mod output;
pub mod walk;

pub use error::Error;
pub use extract::{ModuleFacts, inspect_file, inspect_source};
