//! Symbols command - outline the definitions in a module.

use std::path::Path;

use surface_facts_core::{Symbol, Visibility};

use crate::output::{emit_json, render_symbols};

use super::{EXIT_NO_FILES, inspect_path};

/// List the symbols defined in a file or directory.
pub fn cmd_symbols(path: &Path, public_only: bool, json: bool) -> anyhow::Result<i32> {
    let Some(mut modules) = inspect_path(path)? else {
        eprintln!("No supported source files under {}", path.display());
        return Ok(EXIT_NO_FILES);
    };

    if public_only {
        for facts in &mut modules {
            retain_public(&mut facts.symbols);
        }
    }

    if json {
        emit_json(&modules)?;
    } else {
        for facts in &modules {
            print!("{}", render_symbols(facts));
        }
    }
    Ok(0)
}

fn retain_public(symbols: &mut Vec<Symbol>) {
    symbols.retain(|s| s.visibility == Visibility::Public);
    for sym in symbols {
        retain_public(&mut sym.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_facts_core::SymbolKind;

    fn sym(name: &str, visibility: Visibility, children: Vec<Symbol>) -> Symbol {
        Symbol {
            name: name.to_string(),
            kind: SymbolKind::Function,
            signature: String::new(),
            docstring: None,
            start_line: 1,
            end_line: 1,
            visibility,
            children,
        }
    }

    #[test]
    fn retain_public_filters_recursively() {
        let mut symbols = vec![
            sym(
                "Widget",
                Visibility::Public,
                vec![
                    sym("render", Visibility::Public, Vec::new()),
                    sym("_internal", Visibility::Protected, Vec::new()),
                ],
            ),
            sym("_helper", Visibility::Protected, Vec::new()),
        ];
        retain_public(&mut symbols);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].children.len(), 1);
        assert_eq!(symbols[0].children[0].name, "render");
    }
}
