//! Go language support.
//!
//! Visibility is the identifier case convention: an uppercase first letter
//! exports the name from its package. There is no export list mechanism.

use crate::traits::preceding_doc_comment;
use crate::{
    Export, ExportList, Import, Language, Symbol, SymbolKind, Visibility, VisibilityMechanism,
};
use tree_sitter::Node;

/// Go language support.
pub struct Go;

impl Language for Go {
    fn name(&self) -> &'static str {
        "Go"
    }
    fn extensions(&self) -> &'static [&'static str] {
        &["go"]
    }
    fn grammar_name(&self) -> &'static str {
        "go"
    }

    fn container_kinds(&self) -> &'static [&'static str] {
        &[] // Go types don't have children in the tree-sitter sense
    }

    fn function_kinds(&self) -> &'static [&'static str] {
        &["function_declaration", "method_declaration"]
    }

    fn type_kinds(&self) -> &'static [&'static str] {
        &["type_spec"] // The actual type is in type_spec, not type_declaration
    }

    fn variable_kinds(&self) -> &'static [&'static str] {
        &["const_declaration", "var_declaration"]
    }

    fn import_kinds(&self) -> &'static [&'static str] {
        &["import_declaration"]
    }

    fn public_symbol_kinds(&self) -> &'static [&'static str] {
        &[
            "function_declaration",
            "method_declaration",
            "type_spec",
            "const_spec",
            "var_spec",
        ]
    }

    fn wrapper_kinds(&self) -> &'static [&'static str] {
        &["type_declaration", "const_declaration", "var_declaration"]
    }

    fn visibility_mechanism(&self) -> VisibilityMechanism {
        VisibilityMechanism::NamingConvention
    }

    fn extract_function(&self, node: &Node, content: &str, in_container: bool) -> Option<Symbol> {
        let name = self.node_name(node, content)?;
        let params = node
            .child_by_field_name("parameters")
            .map(|p| content[p.byte_range()].to_string())
            .unwrap_or_else(|| "()".to_string());

        Some(Symbol {
            name: name.to_string(),
            kind: if in_container || node.kind() == "method_declaration" {
                SymbolKind::Method
            } else {
                SymbolKind::Function
            },
            signature: format!("func {}{}", name, params),
            docstring: self.extract_docstring(node, content),
            start_line: node.start_position().row + 1,
            end_line: node.end_position().row + 1,
            visibility: case_visibility(name),
            children: Vec::new(),
        })
    }

    fn extract_container(&self, _node: &Node, _content: &str) -> Option<Symbol> {
        None // Go types are extracted via extract_type
    }

    fn extract_type(&self, node: &Node, content: &str) -> Option<Symbol> {
        // Go type_spec: name field + type field (struct_type, interface_type, etc.)
        let name_node = node.child_by_field_name("name")?;
        let name = content[name_node.byte_range()].to_string();

        let type_node = node.child_by_field_name("type");
        let type_kind = type_node.map(|t| t.kind()).unwrap_or("");

        let kind = match type_kind {
            "struct_type" => SymbolKind::Struct,
            "interface_type" => SymbolKind::Interface,
            _ => SymbolKind::Type,
        };

        Some(Symbol {
            name: name.clone(),
            kind,
            signature: format!("type {}", name),
            docstring: self.extract_docstring(node, content),
            start_line: node.start_position().row + 1,
            end_line: node.end_position().row + 1,
            visibility: case_visibility(&name),
            children: Vec::new(),
        })
    }

    fn extract_variables(&self, node: &Node, content: &str) -> Vec<Symbol> {
        let keyword = match node.kind() {
            "const_declaration" => "const",
            "var_declaration" => "var",
            _ => return Vec::new(),
        };
        let kind = if keyword == "const" {
            SymbolKind::Constant
        } else {
            SymbolKind::Variable
        };

        let mut symbols = Vec::new();
        let mut cursor = node.walk();
        for spec in node.named_children(&mut cursor) {
            if spec.kind() != "const_spec" && spec.kind() != "var_spec" {
                continue;
            }
            let Some(name_node) = spec.child_by_field_name("name") else {
                continue;
            };
            let name = content[name_node.byte_range()].to_string();
            let text = &content[spec.byte_range()];
            let first_line = text.lines().next().unwrap_or(text);

            symbols.push(Symbol {
                name: name.clone(),
                kind,
                signature: format!("{} {}", keyword, first_line.trim()),
                docstring: self.extract_docstring(node, content),
                start_line: spec.start_position().row + 1,
                end_line: spec.end_position().row + 1,
                visibility: case_visibility(&name),
                children: Vec::new(),
            });
        }
        symbols
    }

    fn extract_docstring(&self, node: &Node, content: &str) -> Option<String> {
        // Doc comments sit above the enclosing declaration for grouped specs
        let anchor = match node.parent() {
            Some(p) if self.wrapper_kinds().contains(&p.kind()) => p,
            _ => *node,
        };
        preceding_doc_comment(&anchor, content)
    }

    fn extract_imports(&self, node: &Node, content: &str) -> Vec<Import> {
        if node.kind() != "import_declaration" {
            return Vec::new();
        }

        let mut imports = Vec::new();
        let line = node.start_position().row + 1;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "import_spec" => {
                    // import "path" or import alias "path"
                    if let Some(imp) = Self::parse_import_spec(&child, content, line) {
                        imports.push(imp);
                    }
                }
                "import_spec_list" => {
                    // Grouped imports
                    let mut list_cursor = child.walk();
                    for spec in child.children(&mut list_cursor) {
                        if spec.kind() == "import_spec"
                            && let Some(imp) = Self::parse_import_spec(&spec, content, line)
                        {
                            imports.push(imp);
                        }
                    }
                }
                _ => {}
            }
        }

        imports
    }

    fn extract_public_symbols(&self, node: &Node, content: &str) -> Vec<Export> {
        // Go exports are determined by uppercase first letter
        let name = match self.node_name(node, content) {
            Some(n) if case_visibility(n) == Visibility::Public => n,
            _ => return Vec::new(),
        };

        let line = node.start_position().row + 1;
        let kind = match node.kind() {
            "function_declaration" => SymbolKind::Function,
            "method_declaration" => SymbolKind::Method,
            "type_spec" => SymbolKind::Type,
            "const_spec" => SymbolKind::Constant,
            "var_spec" => SymbolKind::Variable,
            _ => return Vec::new(),
        };

        vec![Export {
            name: name.to_string(),
            kind: Some(kind),
            line: Some(line),
            declared: false,
        }]
    }

    fn export_list(&self, _root: &Node, _content: &str) -> Option<ExportList> {
        None
    }

    fn is_public(&self, node: &Node, content: &str) -> bool {
        self.get_visibility(node, content) == Visibility::Public
    }

    fn get_visibility(&self, node: &Node, content: &str) -> Visibility {
        match self.node_name(node, content) {
            Some(name) => case_visibility(name),
            None => Visibility::Private,
        }
    }

    fn node_name<'a>(&self, node: &Node, content: &'a str) -> Option<&'a str> {
        let name_node = node.child_by_field_name("name")?;
        Some(&content[name_node.byte_range()])
    }
}

impl Go {
    fn parse_import_spec(node: &Node, content: &str, line: usize) -> Option<Import> {
        let mut path = String::new();
        let mut alias = None;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "interpreted_string_literal" => {
                    let text = &content[child.byte_range()];
                    path = text.trim_matches('"').to_string();
                }
                "package_identifier" | "blank_identifier" | "dot" => {
                    alias = Some(content[child.byte_range()].to_string());
                }
                _ => {}
            }
        }

        if path.is_empty() {
            log::debug!("import spec without a path at line {}", line);
            return None;
        }

        let is_wildcard = alias.as_deref() == Some(".");
        Some(Import {
            module: path,
            names: Vec::new(),
            alias,
            is_wildcard,
            is_relative: false, // Go has no relative imports
            line,
        })
    }
}

fn case_visibility(name: &str) -> Visibility {
    if name.chars().next().map(|c| c.is_uppercase()).unwrap_or(false) {
        Visibility::Public
    } else {
        Visibility::Private
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers;

    const SAMPLE: &str = r#"package main

import "fmt"

// Hello is a function that prints a greeting.
func Hello() {
	fmt.Println("Hello, Go!")
}

type MyType struct {
    name string
}

const MyConst = 42

func privateFunc() {
	fmt.Println("private")
}
"#;

    fn parse(content: &str) -> tree_sitter::Tree {
        parsers::parse_source("go", content).unwrap()
    }

    #[test]
    fn extract_function_with_doc_comment() {
        let support = Go;
        let tree = parse(SAMPLE);
        let root = tree.root_node();
        let mut cursor = root.walk();
        let func = root
            .named_children(&mut cursor)
            .find(|n| n.kind() == "function_declaration")
            .unwrap();

        let sym = support.extract_function(&func, SAMPLE, false).unwrap();
        assert_eq!(sym.name, "Hello");
        assert_eq!(sym.signature, "func Hello()");
        assert_eq!(
            sym.docstring.as_deref(),
            Some("Hello is a function that prints a greeting.")
        );
        assert_eq!(sym.visibility, Visibility::Public);
    }

    #[test]
    fn extract_struct_type() {
        let support = Go;
        let tree = parse(SAMPLE);
        let root = tree.root_node();

        // type_spec is nested under type_declaration
        let mut cursor = root.walk();
        let decl = root
            .named_children(&mut cursor)
            .find(|n| n.kind() == "type_declaration")
            .unwrap();
        let spec = decl.named_child(0).unwrap();
        assert_eq!(spec.kind(), "type_spec");

        let sym = support.extract_type(&spec, SAMPLE).unwrap();
        assert_eq!(sym.name, "MyType");
        assert_eq!(sym.kind, SymbolKind::Struct);
        assert_eq!(sym.visibility, Visibility::Public);
    }

    #[test]
    fn extract_const() {
        let support = Go;
        let tree = parse(SAMPLE);
        let root = tree.root_node();
        let mut cursor = root.walk();
        let decl = root
            .named_children(&mut cursor)
            .find(|n| n.kind() == "const_declaration")
            .unwrap();

        let syms = support.extract_variables(&decl, SAMPLE);
        assert_eq!(syms.len(), 1);
        assert_eq!(syms[0].name, "MyConst");
        assert_eq!(syms[0].kind, SymbolKind::Constant);
        assert_eq!(syms[0].signature, "const MyConst = 42");
    }

    #[test]
    fn uppercase_names_are_exported() {
        let support = Go;
        let tree = parse(SAMPLE);
        let root = tree.root_node();
        let mut cursor = root.walk();
        let funcs: Vec<_> = root
            .named_children(&mut cursor)
            .filter(|n| n.kind() == "function_declaration")
            .collect();

        let hello: Vec<Export> = support.extract_public_symbols(&funcs[0], SAMPLE);
        assert_eq!(hello.len(), 1);
        assert_eq!(hello[0].name, "Hello");

        let private = support.extract_public_symbols(&funcs[1], SAMPLE);
        assert!(private.is_empty());
    }

    #[test]
    fn no_export_list() {
        let tree = parse(SAMPLE);
        assert!(Go.export_list(&tree.root_node(), SAMPLE).is_none());
    }

    #[test]
    fn single_import() {
        let support = Go;
        let tree = parse(SAMPLE);
        let root = tree.root_node();
        let mut cursor = root.walk();
        let imports: Vec<Import> = root
            .named_children(&mut cursor)
            .flat_map(|n| support.extract_imports(&n, SAMPLE))
            .collect();

        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, "fmt");
        assert!(imports[0].alias.is_none());
    }

    #[test]
    fn grouped_and_aliased_imports() {
        let support = Go;
        let content = "package p\n\nimport (\n\tf \"fmt\"\n\t_ \"net/http/pprof\"\n)\n";
        let tree = parse(content);
        let root = tree.root_node();
        let mut cursor = root.walk();
        let imports: Vec<Import> = root
            .named_children(&mut cursor)
            .flat_map(|n| support.extract_imports(&n, content))
            .collect();

        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0].module, "fmt");
        assert_eq!(imports[0].alias.as_deref(), Some("f"));
        assert_eq!(imports[1].module, "net/http/pprof");
        assert_eq!(imports[1].alias.as_deref(), Some("_"));
    }
}
