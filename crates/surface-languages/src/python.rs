//! Python language support.
//!
//! Python is the one supported language with an explicit export declaration:
//! a module-level `__all__` list names the public interface. Without it,
//! visibility falls back to the leading-underscore naming convention.

use crate::{
    Export, ExportList, Import, Language, Symbol, SymbolKind, Visibility, VisibilityMechanism,
};
use tree_sitter::Node;

/// Python language support.
pub struct Python;

impl Language for Python {
    fn name(&self) -> &'static str {
        "Python"
    }
    fn extensions(&self) -> &'static [&'static str] {
        &["py", "pyi", "pyw"]
    }
    fn grammar_name(&self) -> &'static str {
        "python"
    }

    fn container_kinds(&self) -> &'static [&'static str] {
        &["class_definition"]
    }

    fn function_kinds(&self) -> &'static [&'static str] {
        &["function_definition"]
    }

    fn type_kinds(&self) -> &'static [&'static str] {
        &["class_definition"]
    }

    fn variable_kinds(&self) -> &'static [&'static str] {
        &["expression_statement"]
    }

    fn import_kinds(&self) -> &'static [&'static str] {
        &["import_statement", "import_from_statement"]
    }

    fn public_symbol_kinds(&self) -> &'static [&'static str] {
        &["function_definition", "class_definition"]
    }

    fn wrapper_kinds(&self) -> &'static [&'static str] {
        // @decorator wraps the definition it decorates
        &["decorated_definition"]
    }

    fn visibility_mechanism(&self) -> VisibilityMechanism {
        VisibilityMechanism::ExportList
    }

    fn extract_function(&self, node: &Node, content: &str, in_container: bool) -> Option<Symbol> {
        let name = self.node_name(node, content)?;

        // Check for async keyword as first child token
        let is_async = node
            .child(0)
            .map(|c| &content[c.byte_range()] == "async")
            .unwrap_or(false);
        let prefix = if is_async { "async def" } else { "def" };

        let params = node
            .child_by_field_name("parameters")
            .map(|p| &content[p.byte_range()])
            .unwrap_or("()");

        let return_type = node
            .child_by_field_name("return_type")
            .map(|r| format!(" -> {}", &content[r.byte_range()]))
            .unwrap_or_default();

        let signature = format!("{} {}{}{}", prefix, name, params, return_type);

        Some(Symbol {
            name: name.to_string(),
            kind: if in_container {
                SymbolKind::Method
            } else {
                SymbolKind::Function
            },
            signature,
            docstring: self.extract_docstring(node, content),
            start_line: node.start_position().row + 1,
            end_line: node.end_position().row + 1,
            visibility: self.get_visibility(node, content),
            children: Vec::new(),
        })
    }

    fn extract_container(&self, node: &Node, content: &str) -> Option<Symbol> {
        let name = self.node_name(node, content)?;

        let bases = node
            .child_by_field_name("superclasses")
            .map(|b| &content[b.byte_range()])
            .unwrap_or("");

        let signature = if bases.is_empty() {
            format!("class {}", name)
        } else {
            format!("class {}{}", name, bases)
        };

        Some(Symbol {
            name: name.to_string(),
            kind: SymbolKind::Class,
            signature,
            docstring: self.extract_docstring(node, content),
            start_line: node.start_position().row + 1,
            end_line: node.end_position().row + 1,
            visibility: self.get_visibility(node, content),
            children: Vec::new(), // Caller fills this in
        })
    }

    fn extract_type(&self, node: &Node, content: &str) -> Option<Symbol> {
        // Python classes are both containers and types
        self.extract_container(node, content)
    }

    fn extract_variables(&self, node: &Node, content: &str) -> Vec<Symbol> {
        // Module-level `NAME = value` assignments
        let Some(expr) = node.named_child(0) else {
            return Vec::new();
        };
        if expr.kind() != "assignment" {
            return Vec::new();
        }
        let Some(left) = expr.child_by_field_name("left") else {
            return Vec::new();
        };
        if left.kind() != "identifier" {
            return Vec::new();
        }
        let name = &content[left.byte_range()];
        if name == "__all__" {
            // The export declaration itself is not a module symbol
            return Vec::new();
        }

        let kind = if name.chars().any(|c| c.is_alphabetic())
            && !name.chars().any(|c| c.is_lowercase())
        {
            SymbolKind::Constant
        } else {
            SymbolKind::Variable
        };

        let text = &content[expr.byte_range()];
        let first_line = text.lines().next().unwrap_or(text);

        vec![Symbol {
            name: name.to_string(),
            kind,
            signature: first_line.trim().to_string(),
            docstring: None,
            start_line: expr.start_position().row + 1,
            end_line: expr.end_position().row + 1,
            visibility: name_visibility(name),
            children: Vec::new(),
        }]
    }

    fn extract_docstring(&self, node: &Node, content: &str) -> Option<String> {
        let body = node.child_by_field_name("body")?;
        let first = body.child(0)?;

        let string_node = match first.kind() {
            "string" => Some(first),
            "expression_statement" => first.child(0).filter(|n| n.kind() == "string"),
            _ => None,
        }?;

        let doc = string_text(&string_node, content);
        if doc.is_empty() { None } else { Some(doc) }
    }

    fn extract_imports(&self, node: &Node, content: &str) -> Vec<Import> {
        let line = node.start_position().row + 1;

        match node.kind() {
            "import_statement" => {
                // import foo, import foo as bar
                let mut imports = Vec::new();
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "dotted_name" {
                        let module = content[child.byte_range()].to_string();
                        imports.push(Import {
                            module,
                            names: Vec::new(),
                            alias: None,
                            is_wildcard: false,
                            is_relative: false,
                            line,
                        });
                    } else if child.kind() == "aliased_import"
                        && let Some(name) = child.child_by_field_name("name")
                    {
                        let module = content[name.byte_range()].to_string();
                        let alias = child
                            .child_by_field_name("alias")
                            .map(|a| content[a.byte_range()].to_string());
                        imports.push(Import {
                            module,
                            names: Vec::new(),
                            alias,
                            is_wildcard: false,
                            is_relative: false,
                            line,
                        });
                    }
                }
                imports
            }
            "import_from_statement" => {
                // from foo import bar, baz
                let module = node
                    .child_by_field_name("module_name")
                    .map(|m| content[m.byte_range()].to_string())
                    .unwrap_or_default();

                let text = &content[node.byte_range()];
                let is_relative = text.starts_with("from .");

                let mut names = Vec::new();
                let mut is_wildcard = false;
                let module_end = node
                    .child_by_field_name("module_name")
                    .map(|m| m.end_byte())
                    .unwrap_or(0);

                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    match child.kind() {
                        "dotted_name" | "identifier" => {
                            // Skip the module name itself
                            if child.start_byte() > module_end {
                                names.push(content[child.byte_range()].to_string());
                            }
                        }
                        "aliased_import" => {
                            if let Some(name) = child.child_by_field_name("name") {
                                names.push(content[name.byte_range()].to_string());
                            }
                        }
                        "wildcard_import" => {
                            is_wildcard = true;
                        }
                        _ => {}
                    }
                }

                vec![Import {
                    module,
                    names,
                    alias: None,
                    is_wildcard,
                    is_relative,
                    line,
                }]
            }
            _ => Vec::new(),
        }
    }

    fn extract_public_symbols(&self, node: &Node, content: &str) -> Vec<Export> {
        let line = node.start_position().row + 1;

        let kind = match node.kind() {
            "function_definition" => SymbolKind::Function,
            "class_definition" => SymbolKind::Class,
            _ => return Vec::new(),
        };

        if let Some(name) = self.node_name(node, content)
            && !name.starts_with('_')
        {
            return vec![Export {
                name: name.to_string(),
                kind: Some(kind),
                line: Some(line),
                declared: false,
            }];
        }
        Vec::new()
    }

    fn export_list(&self, root: &Node, content: &str) -> Option<ExportList> {
        let mut names: Option<Vec<String>> = None;
        let mut line = 0usize;

        let mut cursor = root.walk();
        for stmt in root.named_children(&mut cursor) {
            if stmt.kind() != "expression_statement" {
                continue;
            }
            let Some(expr) = stmt.named_child(0) else {
                continue;
            };

            match expr.kind() {
                "assignment" => {
                    if !is_all_identifier(expr.child_by_field_name("left"), content) {
                        continue;
                    }
                    if let Some(right) = expr.child_by_field_name("right")
                        && let Some(items) = string_sequence(&right, content)
                    {
                        // Reassignment: the later declaration is authoritative
                        line = expr.start_position().row + 1;
                        names = Some(items);
                    }
                }
                "augmented_assignment" => {
                    // __all__ += [...]
                    if !is_all_identifier(expr.child_by_field_name("left"), content) {
                        continue;
                    }
                    let op_is_add = expr
                        .child_by_field_name("operator")
                        .map(|o| &content[o.byte_range()] == "+=")
                        .unwrap_or(false);
                    if !op_is_add {
                        continue;
                    }
                    if let Some(right) = expr.child_by_field_name("right")
                        && let Some(items) = string_sequence(&right, content)
                    {
                        if names.is_none() {
                            line = expr.start_position().row + 1;
                        }
                        names.get_or_insert_with(Vec::new).extend(items);
                    }
                }
                "call" => {
                    // __all__.extend([...]) / __all__.append('name')
                    let Some(method) = all_method_call(&expr, content) else {
                        continue;
                    };
                    let Some(args) = expr.child_by_field_name("arguments") else {
                        continue;
                    };
                    let Some(arg) = args.named_child(0) else {
                        continue;
                    };
                    let items = match method {
                        "extend" => string_sequence(&arg, content),
                        "append" if arg.kind() == "string" => {
                            Some(vec![string_text(&arg, content)])
                        }
                        _ => None,
                    };
                    if let Some(items) = items {
                        if names.is_none() {
                            line = expr.start_position().row + 1;
                        }
                        names.get_or_insert_with(Vec::new).extend(items);
                    }
                }
                _ => {}
            }
        }

        names.map(|names| ExportList { names, line })
    }

    fn is_public(&self, node: &Node, content: &str) -> bool {
        self.get_visibility(node, content) == Visibility::Public
    }

    fn get_visibility(&self, node: &Node, content: &str) -> Visibility {
        match self.node_name(node, content) {
            Some(name) => name_visibility(name),
            None => Visibility::Public,
        }
    }

    fn node_name<'a>(&self, node: &Node, content: &'a str) -> Option<&'a str> {
        let name_node = node.child_by_field_name("name")?;
        Some(&content[name_node.byte_range()])
    }
}

/// Visibility from the leading-underscore convention.
fn name_visibility(name: &str) -> Visibility {
    if name.starts_with("__") && name.ends_with("__") {
        Visibility::Public // dunder names
    } else if name.starts_with("__") {
        Visibility::Private // name mangled
    } else if name.starts_with('_') {
        Visibility::Protected // convention private
    } else {
        Visibility::Public
    }
}

fn is_all_identifier(node: Option<Node>, content: &str) -> bool {
    match node {
        Some(n) => n.kind() == "identifier" && &content[n.byte_range()] == "__all__",
        None => false,
    }
}

/// Match `__all__.extend(...)` / `__all__.append(...)`, returning the method name.
fn all_method_call<'a>(call: &Node, content: &'a str) -> Option<&'a str> {
    let function = call.child_by_field_name("function")?;
    if function.kind() != "attribute" {
        return None;
    }
    let object = function.child_by_field_name("object")?;
    if object.kind() != "identifier" || &content[object.byte_range()] != "__all__" {
        return None;
    }
    let attribute = function.child_by_field_name("attribute")?;
    Some(&content[attribute.byte_range()])
}

/// Collect string literals from a list or tuple node.
/// Non-string elements are skipped rather than treated as an error.
fn string_sequence(node: &Node, content: &str) -> Option<Vec<String>> {
    if node.kind() != "list" && node.kind() != "tuple" {
        return None;
    }
    let mut items = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "string" {
            items.push(string_text(&child, content));
        } else if child.kind() != "comment" {
            log::debug!(
                "skipping non-string export list item: {}",
                &content[child.byte_range()]
            );
        }
    }
    Some(items)
}

/// Text of a string literal without quotes.
fn string_text(node: &Node, content: &str) -> String {
    // Modern grammar exposes a string_content child
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "string_content" {
            return content[child.byte_range()].to_string();
        }
    }

    // Fallback: strip quote tokens from the full text
    content[node.byte_range()]
        .trim_start_matches("\"\"\"")
        .trim_start_matches("'''")
        .trim_start_matches('"')
        .trim_start_matches('\'')
        .trim_end_matches("\"\"\"")
        .trim_end_matches("'''")
        .trim_end_matches('"')
        .trim_end_matches('\'')
        .to_string()
}
