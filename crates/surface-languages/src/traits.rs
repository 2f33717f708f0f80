//! Core trait for language support.

use tree_sitter::Node;

// Re-export core types from surface-facts-core
pub use surface_facts_core::{
    Export, ExportList, Import, Symbol, SymbolKind, Visibility, VisibilityMechanism,
};

// === Helper functions for common extractor patterns ===

/// Collect the comment block immediately above a node as its doc comment.
///
/// Consecutive `comment` siblings are gathered as long as they are
/// line-adjacent (no blank line in between). Comment markers are stripped.
/// Used by languages that document declarations with preceding comments
/// (Go `//` blocks, C `/* */` and `//`).
pub fn preceding_doc_comment(node: &Node, content: &str) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut expected_row = node.start_position().row;
    let mut prev = node.prev_sibling();

    while let Some(comment) = prev {
        if comment.kind() != "comment" || comment.end_position().row + 1 != expected_row {
            break;
        }
        let chunk: Vec<String> = content[comment.byte_range()]
            .lines()
            .map(clean_comment_line)
            .collect();
        lines.splice(0..0, chunk);
        expected_row = comment.start_position().row;
        prev = comment.prev_sibling();
    }

    let doc = lines.join("\n").trim().to_string();
    if doc.is_empty() { None } else { Some(doc) }
}

fn clean_comment_line(line: &str) -> String {
    line.trim()
        .trim_start_matches("/*")
        .trim_end_matches("*/")
        .trim_start_matches("//")
        .trim_start_matches('*')
        .trim()
        .to_string()
}

/// Unified language support trait.
///
/// Each language implements this trait to provide:
/// - Node kind classification
/// - Symbol extraction (functions, classes, types, module variables)
/// - Import/export parsing
/// - Visibility detection
pub trait Language: Send + Sync {
    /// Display name for this language (e.g., "Python", "C")
    fn name(&self) -> &'static str;

    /// File extensions this language handles (e.g., ["py", "pyi", "pyw"])
    fn extensions(&self) -> &'static [&'static str];

    /// Grammar name for parser lookup (e.g., "python", "go")
    fn grammar_name(&self) -> &'static str;

    // === Node Classification ===

    /// Container nodes that can hold methods (class)
    fn container_kinds(&self) -> &'static [&'static str];

    /// Function/method definition nodes
    fn function_kinds(&self) -> &'static [&'static str];

    /// Type definition nodes (struct, enum, interface, type alias)
    fn type_kinds(&self) -> &'static [&'static str];

    /// Module-level variable/constant definition nodes
    fn variable_kinds(&self) -> &'static [&'static str];

    /// Import statement nodes
    fn import_kinds(&self) -> &'static [&'static str];

    /// AST node kinds that may contain publicly visible symbols.
    /// The extract_public_symbols() method filters by actual visibility.
    fn public_symbol_kinds(&self) -> &'static [&'static str];

    /// Transparent module-level wrapper nodes whose children should be
    /// classified in their place (Go: type_declaration wraps type_spec,
    /// Python: decorated_definition wraps the definition).
    fn wrapper_kinds(&self) -> &'static [&'static str];

    /// How this language determines symbol visibility
    fn visibility_mechanism(&self) -> VisibilityMechanism;

    // === Symbol Extraction ===

    /// Extract symbol from a function/method node
    fn extract_function(&self, node: &Node, content: &str, in_container: bool) -> Option<Symbol>;

    /// Extract symbol from a container node (class)
    fn extract_container(&self, node: &Node, content: &str) -> Option<Symbol>;

    /// Extract symbol from a type definition node
    fn extract_type(&self, node: &Node, content: &str) -> Option<Symbol>;

    /// Extract symbols from a module-level variable/constant node
    /// (may return multiple, e.g. a grouped Go const block)
    fn extract_variables(&self, node: &Node, content: &str) -> Vec<Symbol>;

    /// Extract docstring/doc comment for a node
    fn extract_docstring(&self, node: &Node, content: &str) -> Option<String>;

    // === Import/Export ===

    /// Extract imports from an import node (may return multiple)
    fn extract_imports(&self, node: &Node, content: &str) -> Vec<Import>;

    /// Extract public symbols from a node.
    /// The node is one of the kinds from public_symbol_kinds().
    /// Checks visibility and returns public symbols.
    fn extract_public_symbols(&self, node: &Node, content: &str) -> Vec<Export>;

    /// Find the module's explicit export declaration, if the language has
    /// one (Python's `__all__`). `root` is the module root node.
    ///
    /// Multiple sequential declarations follow last-write-wins: the final
    /// plain assignment is authoritative.
    fn export_list(&self, root: &Node, content: &str) -> Option<ExportList>;

    // === Visibility ===

    /// Check if a node is public/exported
    fn is_public(&self, node: &Node, content: &str) -> bool;

    /// Get visibility of a node
    fn get_visibility(&self, node: &Node, content: &str) -> Visibility;

    // === Helpers ===

    /// Get the name of a node (typically via "name" field)
    fn node_name<'a>(&self, node: &Node, content: &'a str) -> Option<&'a str>;
}
