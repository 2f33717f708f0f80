//! C language support.
//!
//! Visibility follows the translation-unit model: `static` functions and
//! objects are private to the file, everything else is public (visible to
//! other translation units through headers).

use crate::traits::preceding_doc_comment;
use crate::{
    Export, ExportList, Import, Language, Symbol, SymbolKind, Visibility, VisibilityMechanism,
};
use tree_sitter::Node;

/// C language support.
pub struct C;

impl Language for C {
    fn name(&self) -> &'static str {
        "C"
    }
    fn extensions(&self) -> &'static [&'static str] {
        &["c", "h"]
    }
    fn grammar_name(&self) -> &'static str {
        "c"
    }

    fn container_kinds(&self) -> &'static [&'static str] {
        &[] // C has no containers with methods
    }

    fn function_kinds(&self) -> &'static [&'static str] {
        &["function_definition"]
    }

    fn type_kinds(&self) -> &'static [&'static str] {
        &[
            "struct_specifier",
            "union_specifier",
            "enum_specifier",
            "type_definition",
        ]
    }

    fn variable_kinds(&self) -> &'static [&'static str] {
        &["declaration"]
    }

    fn import_kinds(&self) -> &'static [&'static str] {
        &["preproc_include"]
    }

    fn public_symbol_kinds(&self) -> &'static [&'static str] {
        &[
            "function_definition",
            "declaration",
            "struct_specifier",
            "union_specifier",
            "enum_specifier",
            "type_definition",
        ]
    }

    fn wrapper_kinds(&self) -> &'static [&'static str] {
        &[]
    }

    fn visibility_mechanism(&self) -> VisibilityMechanism {
        VisibilityMechanism::HeaderBased
    }

    fn extract_function(&self, node: &Node, content: &str, _in_container: bool) -> Option<Symbol> {
        let declarator = node.child_by_field_name("declarator")?;
        let name = find_identifier(&declarator, content)?;

        // Signature is everything before the body
        let signature = match node.child_by_field_name("body") {
            Some(body) => content[node.start_byte()..body.start_byte()].trim().to_string(),
            None => name.to_string(),
        };

        Some(Symbol {
            name: name.to_string(),
            kind: SymbolKind::Function,
            signature,
            docstring: self.extract_docstring(node, content),
            start_line: node.start_position().row + 1,
            end_line: node.end_position().row + 1,
            visibility: self.get_visibility(node, content),
            children: Vec::new(),
        })
    }

    fn extract_container(&self, _node: &Node, _content: &str) -> Option<Symbol> {
        None
    }

    fn extract_type(&self, node: &Node, content: &str) -> Option<Symbol> {
        let name = self.node_name(node, content)?;
        let kind = match node.kind() {
            "struct_specifier" => SymbolKind::Struct,
            "union_specifier" => SymbolKind::Union,
            "enum_specifier" => SymbolKind::Enum,
            _ => SymbolKind::Type,
        };

        let signature = match kind {
            SymbolKind::Type => format!("typedef {}", name),
            _ => format!("{} {}", kind.as_str(), name),
        };

        Some(Symbol {
            name: name.to_string(),
            kind,
            signature,
            docstring: self.extract_docstring(node, content),
            start_line: node.start_position().row + 1,
            end_line: node.end_position().row + 1,
            visibility: Visibility::Public,
            children: Vec::new(),
        })
    }

    fn extract_variables(&self, node: &Node, content: &str) -> Vec<Symbol> {
        if node.kind() != "declaration" {
            return Vec::new();
        }
        // Function prototypes are declarations too; they are not objects
        if contains_kind(node, "function_declarator") {
            return Vec::new();
        }

        let visibility = self.get_visibility(node, content);
        let is_const = {
            let mut cursor = node.walk();
            node.children(&mut cursor)
                .any(|c| c.kind() == "type_qualifier" && &content[c.byte_range()] == "const")
        };
        let kind = if is_const {
            SymbolKind::Constant
        } else {
            SymbolKind::Variable
        };

        let mut symbols = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            let declarator = match child.kind() {
                "init_declarator" => child.child_by_field_name("declarator"),
                "identifier" | "pointer_declarator" | "array_declarator" => Some(child),
                _ => None,
            };
            let Some(declarator) = declarator else {
                continue;
            };
            let Some(name) = find_identifier(&declarator, content) else {
                continue;
            };

            let text = &content[node.byte_range()];
            let first_line = text.lines().next().unwrap_or(text);

            symbols.push(Symbol {
                name: name.to_string(),
                kind,
                signature: first_line.trim().trim_end_matches(';').to_string(),
                docstring: self.extract_docstring(node, content),
                start_line: node.start_position().row + 1,
                end_line: node.end_position().row + 1,
                visibility,
                children: Vec::new(),
            });
        }
        symbols
    }

    fn extract_docstring(&self, node: &Node, content: &str) -> Option<String> {
        preceding_doc_comment(node, content)
    }

    fn extract_imports(&self, node: &Node, content: &str) -> Vec<Import> {
        if node.kind() != "preproc_include" {
            return Vec::new();
        }
        let Some(path) = node.child_by_field_name("path") else {
            return Vec::new();
        };

        let text = &content[path.byte_range()];
        let is_system = path.kind() == "system_lib_string";
        let header = text
            .trim_start_matches('<')
            .trim_end_matches('>')
            .trim_matches('"')
            .to_string();

        vec![Import {
            module: header,
            names: Vec::new(),
            alias: None,
            is_wildcard: false,
            // Quoted includes resolve relative to the including file
            is_relative: !is_system,
            line: node.start_position().row + 1,
        }]
    }

    fn extract_public_symbols(&self, node: &Node, content: &str) -> Vec<Export> {
        let line = node.start_position().row + 1;

        match node.kind() {
            "function_definition" => {
                if self.get_visibility(node, content) != Visibility::Public {
                    return Vec::new();
                }
                match node
                    .child_by_field_name("declarator")
                    .and_then(|d| find_identifier(&d, content))
                {
                    Some(name) => vec![Export {
                        name: name.to_string(),
                        kind: Some(SymbolKind::Function),
                        line: Some(line),
                        declared: false,
                    }],
                    None => Vec::new(),
                }
            }
            "declaration" => self
                .extract_variables(node, content)
                .into_iter()
                .filter(|s| s.visibility == Visibility::Public)
                .map(|s| Export {
                    name: s.name,
                    kind: Some(s.kind),
                    line: Some(s.start_line),
                    declared: false,
                })
                .collect(),
            "struct_specifier" | "union_specifier" | "enum_specifier" | "type_definition" => {
                match self.extract_type(node, content) {
                    Some(s) => vec![Export {
                        name: s.name,
                        kind: Some(s.kind),
                        line: Some(line),
                        declared: false,
                    }],
                    None => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    fn export_list(&self, _root: &Node, _content: &str) -> Option<ExportList> {
        None
    }

    fn is_public(&self, node: &Node, content: &str) -> bool {
        self.get_visibility(node, content) == Visibility::Public
    }

    fn get_visibility(&self, node: &Node, content: &str) -> Visibility {
        // static storage class makes the symbol private to the translation unit
        let mut cursor = node.walk();
        let is_static = node.children(&mut cursor).any(|c| {
            c.kind() == "storage_class_specifier" && &content[c.byte_range()] == "static"
        });
        if is_static {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    fn node_name<'a>(&self, node: &Node, content: &'a str) -> Option<&'a str> {
        match node.kind() {
            // typedef name lives in the declarator
            "type_definition" => node
                .child_by_field_name("declarator")
                .and_then(|d| find_type_identifier(&d, content)),
            _ => {
                let name_node = node.child_by_field_name("name")?;
                Some(&content[name_node.byte_range()])
            }
        }
    }
}

/// Depth-first search for the first identifier in a declarator tree.
fn find_identifier<'a>(node: &Node, content: &'a str) -> Option<&'a str> {
    if node.kind() == "identifier" {
        return Some(&content[node.byte_range()]);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(id) = find_identifier(&child, content) {
            return Some(id);
        }
    }
    None
}

fn find_type_identifier<'a>(node: &Node, content: &'a str) -> Option<&'a str> {
    if node.kind() == "type_identifier" {
        return Some(&content[node.byte_range()]);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(id) = find_type_identifier(&child, content) {
            return Some(id);
        }
    }
    None
}

fn contains_kind(node: &Node, kind: &str) -> bool {
    if node.kind() == kind {
        return true;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if contains_kind(&child, kind) {
            return true;
        }
    }
    false
}
