//! Output formatting for CLI commands.

use serde::Serialize;
use surface_facts_core::Symbol;

use crate::extract::ModuleFacts;

/// Print any serializable report as pretty JSON.
pub fn emit_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a module's symbol outline as indented text.
pub fn render_symbols(facts: &ModuleFacts) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", facts.path, facts.language));
    for sym in &facts.symbols {
        render_symbol(&mut out, sym, 1);
    }
    out
}

fn render_symbol(out: &mut String, sym: &Symbol, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!(
        "{}{} {} [{}] (line {})\n",
        indent,
        sym.kind.as_str(),
        sym.name,
        sym.visibility.as_str(),
        sym.start_line
    ));
    if let Some(doc) = &sym.docstring
        && let Some(first) = doc.lines().next()
    {
        out.push_str(&format!("{}  # {}\n", indent, first));
    }
    for child in &sym.children {
        render_symbol(out, child, depth + 1);
    }
}

/// Render a module's effective export set as text.
pub fn render_exports(facts: &ModuleFacts) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", facts.path, facts.language));
    if facts.exports.is_empty() {
        out.push_str("  (no exports)\n");
        return out;
    }
    for export in &facts.exports {
        let kind = export.kind.map(|k| k.as_str()).unwrap_or("?");
        match export.line {
            Some(line) => {
                out.push_str(&format!("  {} [{}] (line {})\n", export.name, kind, line));
            }
            None => {
                out.push_str(&format!("  {} [{}] (no definition)\n", export.name, kind));
            }
        }
    }
    out
}

/// Render a module's imports as text.
pub fn render_imports(facts: &ModuleFacts) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", facts.path, facts.language));
    if facts.imports.is_empty() {
        out.push_str("  (no imports)\n");
        return out;
    }
    for import in &facts.imports {
        out.push_str(&format!("  {}\n", import.format_summary()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_facts_core::{Export, Import, SymbolKind, Visibility};

    fn facts_with_symbol() -> ModuleFacts {
        ModuleFacts {
            path: "mod.py".to_string(),
            language: "Python",
            symbols: vec![Symbol {
                name: "run".to_string(),
                kind: SymbolKind::Function,
                signature: "def run()".to_string(),
                docstring: Some("Run the thing.".to_string()),
                start_line: 1,
                end_line: 2,
                visibility: Visibility::Public,
                children: Vec::new(),
            }],
            imports: Vec::new(),
            exports: vec![Export {
                name: "run".to_string(),
                kind: Some(SymbolKind::Function),
                line: Some(1),
                declared: false,
            }],
        }
    }

    #[test]
    fn symbols_text_includes_kind_and_line() {
        let text = render_symbols(&facts_with_symbol());
        assert!(text.contains("mod.py (Python)"));
        assert!(text.contains("function run [public] (line 1)"));
        assert!(text.contains("# Run the thing."));
    }

    #[test]
    fn exports_text_marks_missing_definitions() {
        let mut facts = facts_with_symbol();
        facts.exports.push(Export {
            name: "ghost".to_string(),
            kind: None,
            line: None,
            declared: true,
        });
        let text = render_exports(&facts);
        assert!(text.contains("run [function] (line 1)"));
        assert!(text.contains("ghost [?] (no definition)"));
    }

    #[test]
    fn empty_imports_render_placeholder() {
        let facts = ModuleFacts {
            path: "mod.py".to_string(),
            language: "Python",
            symbols: Vec::new(),
            imports: Vec::new(),
            exports: Vec::new(),
        };
        assert!(render_imports(&facts).contains("(no imports)"));
    }

    #[test]
    fn imports_use_format_summary() {
        let mut facts = facts_with_symbol();
        facts.imports.push(Import {
            module: "os.path".to_string(),
            names: vec!["join".to_string()],
            alias: None,
            is_wildcard: false,
            is_relative: false,
            line: 1,
        });
        assert!(render_imports(&facts).contains("os.path::join"));
    }
}
