//! Language registry
//!
//! Maps language names to compiled grammars. The built-in registry is compiled once per
//! process on first use and shared read-only afterwards.

use crate::grammar::Grammar;
use crate::languages;
use crate::token::Token;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

static BUILTIN: Lazy<Registry> = Lazy::new(Registry::with_defaults);

/// Registry of languages
///
/// Provides lookup by name (and by file extension) of every registered grammar.
///
/// # Examples
///
/// ```ignore
/// let mut registry = Registry::with_defaults();
/// registry.register(my_grammar);
///
/// let tokens = registry.tokenize("key = 1", "ini");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    languages: HashMap<String, Grammar>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Registry {
            languages: HashMap::new(),
        }
    }

    /// The process-wide registry holding the built-in languages.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Create a registry with the built-in languages
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for grammar in languages::builtin() {
            registry.register(grammar);
        }
        debug!(languages = registry.languages.len(), "compiled built-in languages");
        registry
    }

    /// Register a grammar
    ///
    /// If a language with the same name already exists, it will be replaced.
    pub fn register(&mut self, grammar: Grammar) {
        self.languages.insert(grammar.name().to_string(), grammar);
    }

    pub fn get(&self, name: &str) -> Option<&Grammar> {
        self.languages.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.languages.contains_key(name)
    }

    /// Language registered for a file extension (without the dot, case-insensitive).
    ///
    /// When several languages claim the extension, the alphabetically first name wins.
    pub fn for_extension(&self, extension: &str) -> Option<&Grammar> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        let mut candidates: Vec<&Grammar> = self
            .languages
            .values()
            .filter(|g| g.extensions().iter().any(|e| *e == extension))
            .collect();
        candidates.sort_by(|a, b| a.name().cmp(b.name()));
        candidates.into_iter().next()
    }

    /// List all available language names (sorted)
    pub fn list_languages(&self) -> Vec<String> {
        let mut names: Vec<_> = self.languages.keys().cloned().collect();
        names.sort();
        names
    }

    /// Tokenize `input` as `language`.
    ///
    /// Unknown languages are not an error: the input comes back as one `text` token.
    pub fn tokenize(&self, input: &str, language: &str) -> Vec<Token> {
        match self.get(language) {
            Some(grammar) => grammar.tokenize(input),
            None => {
                debug!(language, "unknown language, passing input through");
                vec![Token::text(input)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::kinds;

    fn ini() -> Grammar {
        Grammar::builder("ini")
            .extensions(["ini", "cfg"])
            .pattern(kinds::COMMENT, r"[;#][^\n]*")
            .build()
            .unwrap()
    }

    #[test]
    fn test_registry_creation() {
        let registry = Registry::new();
        assert!(registry.list_languages().is_empty());
    }

    #[test]
    fn test_registry_register() {
        let mut registry = Registry::new();
        registry.register(ini());

        assert!(registry.has("ini"));
        assert_eq!(registry.list_languages(), vec!["ini"]);
    }

    #[test]
    fn test_registry_replace_language() {
        let mut registry = Registry::new();
        registry.register(ini());
        registry.register(ini());

        assert_eq!(registry.list_languages().len(), 1);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = Registry::with_defaults();
        assert_eq!(
            registry.list_languages(),
            vec!["css", "html", "javascript", "json", "markdown", "python", "typescript"]
        );
    }

    #[test]
    fn test_registry_for_extension() {
        let mut registry = Registry::with_defaults();
        registry.register(ini());

        assert_eq!(registry.for_extension("cfg").map(|g| g.name()), Some("ini"));
        assert_eq!(registry.for_extension(".PY").map(|g| g.name()), Some("python"));
        assert_eq!(registry.for_extension("tsx").map(|g| g.name()), Some("typescript"));
        assert!(registry.for_extension("rs").is_none());
    }

    #[test]
    fn test_registry_tokenize_unknown() {
        let registry = Registry::new();
        assert_eq!(registry.tokenize("x = 1", "ini"), vec![Token::text("x = 1")]);
    }

    #[test]
    fn test_registry_tokenize_custom() {
        let mut registry = Registry::new();
        registry.register(ini());
        assert_eq!(
            registry.tokenize("; note", "ini"),
            vec![Token::new(kinds::COMMENT, "; note")]
        );
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Registry::builtin(), Registry::builtin()));
    }
}
