//! Tree-sitter parser construction and convenience functions.
//!
//! Grammars are statically linked from the official grammar crates and
//! looked up by grammar name. This is the canonical way to parse source
//! code with tree-sitter in the surface ecosystem.

use thiserror::Error;
use tree_sitter::{Parser, Tree};

/// Errors from grammar lookup and parsing.
#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("no grammar registered for '{0}'")]
    UnknownGrammar(String),

    #[error("grammar '{grammar}' is incompatible with the linked tree-sitter")]
    Grammar {
        grammar: String,
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("tree-sitter failed to parse input as '{0}'")]
    ParseFailed(String),
}

/// Get a statically linked grammar by name.
///
/// Returns `None` if the grammar is unknown or its feature is not enabled.
pub fn grammar(name: &str) -> Option<tree_sitter::Language> {
    match name {
        #[cfg(feature = "lang-python")]
        "python" => Some(tree_sitter_python::LANGUAGE.into()),
        #[cfg(feature = "lang-go")]
        "go" => Some(tree_sitter_go::LANGUAGE.into()),
        #[cfg(feature = "lang-c")]
        "c" => Some(tree_sitter_c::LANGUAGE.into()),
        _ => None,
    }
}

/// Create a parser for a specific grammar.
pub fn parser_for(name: &str) -> Result<Parser, LanguageError> {
    let language = grammar(name).ok_or_else(|| LanguageError::UnknownGrammar(name.to_string()))?;
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|source| LanguageError::Grammar {
            grammar: name.to_string(),
            source,
        })?;
    Ok(parser)
}

/// Parse source code with a specific grammar.
pub fn parse_source(name: &str, source: &str) -> Result<Tree, LanguageError> {
    let mut parser = parser_for(name)?;
    parser
        .parse(source, None)
        .ok_or_else(|| LanguageError::ParseFailed(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_grammars_resolve() {
        assert!(grammar("python").is_some());
        assert!(grammar("go").is_some());
        assert!(grammar("c").is_some());
        assert!(grammar("cobol").is_none());
    }

    #[test]
    fn unknown_grammar_errors() {
        let err = parser_for("cobol").err().unwrap();
        assert!(matches!(err, LanguageError::UnknownGrammar(_)));
    }

    #[test]
    fn parse_python_source() {
        let tree = parse_source("python", "def f():\n    pass\n").unwrap();
        assert_eq!(tree.root_node().kind(), "module");
    }
}
