//! Module fact extraction: walk a parse tree and collect symbols,
//! imports, and the effective export set.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use surface_facts_core::{Export, Import, Symbol};
use surface_languages::{Language, parsers, support_for_path};
use tree_sitter::Node;

use crate::error::Error;

/// Everything surface knows about one module.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleFacts {
    pub path: String,
    pub language: &'static str,
    pub symbols: Vec<Symbol>,
    pub imports: Vec<Import>,
    pub exports: Vec<Export>,
}

/// Inspect a single file on disk.
pub fn inspect_file(path: &Path) -> Result<ModuleFacts, Error> {
    let lang =
        support_for_path(path).ok_or_else(|| Error::UnsupportedFile(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), language = lang.name(), "inspecting");

    let mut facts = inspect_source(lang, &content)?;
    facts.path = path.display().to_string();
    Ok(facts)
}

/// Inspect source text with a known language.
pub fn inspect_source(lang: &dyn Language, content: &str) -> Result<ModuleFacts, Error> {
    let tree = parsers::parse_source(lang.grammar_name(), content)?;
    let root = tree.root_node();

    let mut symbols = Vec::new();
    let mut imports = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        visit(lang, &child, content, &mut symbols, &mut imports);
    }

    let exports = collect_exports(lang, &root, content, &symbols);

    Ok(ModuleFacts {
        path: String::new(),
        language: lang.name(),
        symbols,
        imports,
        exports,
    })
}

/// Classify one module-level node. Wrapper nodes (decorated definitions,
/// grouped declarations) are transparent: their children are classified
/// in their place.
fn visit(
    lang: &dyn Language,
    node: &Node,
    content: &str,
    symbols: &mut Vec<Symbol>,
    imports: &mut Vec<Import>,
) {
    let kind = node.kind();

    if lang.container_kinds().contains(&kind) {
        if let Some(mut sym) = lang.extract_container(node, content) {
            sym.children = container_methods(lang, node, content);
            symbols.push(sym);
        }
    } else if lang.function_kinds().contains(&kind) {
        if let Some(sym) = lang.extract_function(node, content, false) {
            symbols.push(sym);
        }
    } else if lang.type_kinds().contains(&kind) {
        if let Some(sym) = lang.extract_type(node, content) {
            symbols.push(sym);
        }
    } else if lang.variable_kinds().contains(&kind) {
        symbols.extend(lang.extract_variables(node, content));
    } else if lang.import_kinds().contains(&kind) {
        imports.extend(lang.extract_imports(node, content));
    } else if lang.wrapper_kinds().contains(&kind) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            visit(lang, &child, content, symbols, imports);
        }
    }
}

/// Methods defined in a container body.
fn container_methods(lang: &dyn Language, node: &Node, content: &str) -> Vec<Symbol> {
    let Some(body) = node.child_by_field_name("body") else {
        return Vec::new();
    };

    let mut methods = Vec::new();
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        if lang.function_kinds().contains(&child.kind()) {
            if let Some(m) = lang.extract_function(&child, content, true) {
                methods.push(m);
            }
        } else if lang.wrapper_kinds().contains(&child.kind()) {
            // Decorated methods
            let mut inner = child.walk();
            for grandchild in child.named_children(&mut inner) {
                if lang.function_kinds().contains(&grandchild.kind())
                    && let Some(m) = lang.extract_function(&grandchild, content, true)
                {
                    methods.push(m);
                }
            }
        }
    }
    methods
}

/// Compute the module's effective export set.
///
/// An explicit export list is authoritative when present: its names are
/// exported in declaration order whether or not a matching definition
/// exists. Otherwise the language's visibility convention applies to
/// module-level symbols.
fn collect_exports(
    lang: &dyn Language,
    root: &Node,
    content: &str,
    symbols: &[Symbol],
) -> Vec<Export> {
    if let Some(list) = lang.export_list(root, content) {
        let mut seen = HashSet::new();
        return list
            .names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .map(|name| match symbols.iter().find(|s| s.name == name) {
                Some(sym) => Export {
                    name,
                    kind: Some(sym.kind),
                    line: Some(sym.start_line),
                    declared: true,
                },
                // Declared but undefined names are still exported
                None => Export {
                    name,
                    kind: None,
                    line: None,
                    declared: true,
                },
            })
            .collect();
    }

    let mut exports = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        visit_exports(lang, &child, content, &mut exports);
    }
    exports
}

fn visit_exports(lang: &dyn Language, node: &Node, content: &str, out: &mut Vec<Export>) {
    let kind = node.kind();
    if lang.public_symbol_kinds().contains(&kind) {
        out.extend(lang.extract_public_symbols(node, content));
    } else if lang.wrapper_kinds().contains(&kind) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            visit_exports(lang, &child, content, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_facts_core::{SymbolKind, Visibility};
    use surface_languages::{C, Go, Python};

    const PYTHON_WITH_ALL: &str = r#"__all__ = ['public_function', 'PublicClass']

def public_function():
    """A public function that should be exported."""
    pass

def _private_helper():
    """A private helper that should NOT be exported."""
    pass

class PublicClass:
    """A public class that should be exported."""
    pass

SECRET_CONSTANT = 42
"#;

    #[test]
    fn python_all_is_authoritative() {
        let facts = inspect_source(&Python, PYTHON_WITH_ALL).unwrap();

        let names: Vec<&str> = facts.exports.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["public_function", "PublicClass"]);
        assert!(facts.exports.iter().all(|e| e.declared));

        // Not exported, regardless of underscore convention
        assert!(!names.contains(&"_private_helper"));
        assert!(!names.contains(&"SECRET_CONSTANT"));

        // But all four definitions are still module symbols
        let symbols: Vec<&str> = facts.symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            symbols,
            vec![
                "public_function",
                "_private_helper",
                "PublicClass",
                "SECRET_CONSTANT"
            ]
        );
    }

    #[test]
    fn python_all_tolerates_undefined_names() {
        let content = r#"__all__ = ['existing_function', 'nonexistent_function']

def existing_function():
    """Function that exists and is in __all__."""
    pass

def not_in_all():
    """Function that exists but is NOT in __all__."""
    pass
"#;
        let facts = inspect_source(&Python, content).unwrap();

        assert_eq!(facts.exports.len(), 2);
        assert_eq!(facts.exports[0].name, "existing_function");
        assert_eq!(facts.exports[0].kind, Some(SymbolKind::Function));
        assert_eq!(facts.exports[0].line, Some(3));

        // No matching definition: exported anyway, with unknown kind
        assert_eq!(facts.exports[1].name, "nonexistent_function");
        assert_eq!(facts.exports[1].kind, None);
        assert_eq!(facts.exports[1].line, None);

        assert!(!facts.exports.iter().any(|e| e.name == "not_in_all"));
    }

    #[test]
    fn python_all_reassignment_last_write_wins() {
        let content = r#"__all__ = ['foo']

def foo():
    """Should NOT be exported (overridden by second __all__)."""
    pass

def bar():
    """Should be exported (in second __all__)."""
    pass

__all__ = ['bar']  # Reassignment - should use this one
"#;
        let facts = inspect_source(&Python, content).unwrap();

        let names: Vec<&str> = facts.exports.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["bar"]);
    }

    #[test]
    fn python_without_all_uses_naming_convention() {
        let content = "def visible(): pass\n\ndef _hidden(): pass\n\nclass Widget: pass\n";
        let facts = inspect_source(&Python, content).unwrap();

        let names: Vec<&str> = facts.exports.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["visible", "Widget"]);
        assert!(facts.exports.iter().all(|e| !e.declared));
    }

    #[test]
    fn python_class_methods_are_children() {
        let content = r#"class Widget:
    def render(self):
        pass

    def _internal(self):
        pass
"#;
        let facts = inspect_source(&Python, content).unwrap();
        assert_eq!(facts.symbols.len(), 1);
        let class = &facts.symbols[0];
        assert_eq!(class.kind, SymbolKind::Class);
        assert_eq!(class.children.len(), 2);
        assert_eq!(class.children[0].name, "render");
        assert_eq!(class.children[0].kind, SymbolKind::Method);
        assert_eq!(class.children[1].visibility, Visibility::Protected);
    }

    #[test]
    fn go_exports_by_case() {
        let content = r#"package main

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
        let facts = inspect_source(&Go, content).unwrap();

        let names: Vec<&str> = facts.exports.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Hello", "MyType", "MyConst"]);
        assert!(!names.contains(&"privateFunc"));

        let symbols: Vec<&str> = facts.symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(symbols, vec!["Hello", "MyType", "MyConst", "privateFunc"]);
        assert_eq!(facts.imports.len(), 1);
        assert_eq!(facts.imports[0].module, "fmt");
    }

    #[test]
    fn c_static_symbols_are_private() {
        let content = r#"#include <stdio.h>

/* Documented function */
void test_function() {
    printf("hi\n");
}

int add(int a, int b) {
    return a + b;
}

int global_var = 10;

static void private_function() {
    printf("Private\n");
}

int main(int argc, char *argv[]) {
    return 0;
}
"#;
        let facts = inspect_source(&C, content).unwrap();

        let names: Vec<&str> = facts.exports.iter().map(|e| e.name.as_str()).collect();
        assert!(names.contains(&"add"));
        assert!(names.contains(&"test_function"));
        assert!(names.contains(&"main"));
        assert!(names.contains(&"global_var"));
        assert!(!names.contains(&"private_function"));

        let private = facts
            .symbols
            .iter()
            .find(|s| s.name == "private_function")
            .unwrap();
        assert_eq!(private.visibility, Visibility::Private);
    }

    #[test]
    fn python_decorated_definitions_are_unwrapped() {
        let content = r#"@decorator
def wrapped():
    pass

class Widget:
    @property
    def value(self):
        return 1
"#;
        let facts = inspect_source(&Python, content).unwrap();

        let names: Vec<&str> = facts.symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["wrapped", "Widget"]);
        assert_eq!(facts.symbols[1].children[0].name, "value");
    }

    #[test]
    fn duplicate_declared_names_are_reported_once() {
        let content = "__all__ = ['a', 'a', 'b']\n";
        let facts = inspect_source(&Python, content).unwrap();
        let names: Vec<&str> = facts.exports.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
