//! Tokenizer
//!
//!     Drives the [matcher](crate::matcher) from the start of the input to its end, one
//!     step at a time. Each step yields a `(type, length)` candidate; candidates of the same
//!     type as the token being accumulated extend it, anything else flushes it. The scan
//!     position only moves forward, and every step moves it by at least one character.

use crate::grammar::Grammar;
use crate::matcher::{fallback, match_at};
use crate::registry::Registry;
use crate::token::Token;

/// Tokenize `input` as `language` using the built-in registry.
///
/// An unknown language yields the input verbatim as a single `text` token, even when the
/// input is empty.
pub fn tokenize(input: &str, language: &str) -> Vec<Token> {
    Registry::builtin().tokenize(input, language)
}

/// Tokenize `input` with an explicit table. Empty input yields no tokens.
pub fn tokenize_with(grammar: &Grammar, input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    // (type, start) of the token being accumulated; it always ends at `pos`.
    let mut pending: Option<(&str, usize)> = None;
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        let step = match match_at(grammar, rest).or_else(|| fallback(rest)) {
            Some(step) => step,
            None => break,
        };

        match pending {
            Some((kind, _)) if kind == step.kind => {}
            Some((kind, start)) => {
                flush(&mut tokens, kind, &input[start..pos]);
                pending = Some((step.kind, pos));
            }
            None => pending = Some((step.kind, pos)),
        }
        pos += step.len;
    }

    if let Some((kind, start)) = pending {
        flush(&mut tokens, kind, &input[start..pos]);
    }
    tokens
}

fn flush(tokens: &mut Vec<Token>, kind: &str, content: &str) {
    if !content.is_empty() {
        tokens.push(Token::new(kind, content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{detokenize, kinds};

    fn pairs(tokens: &[Token]) -> Vec<(&str, &str)> {
        tokens
            .iter()
            .map(|t| (t.kind.as_str(), t.content.as_str()))
            .collect()
    }

    #[test]
    fn javascript_statement() {
        let tokens = tokenize("const x = 42; // comment", "javascript");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("keyword", "const"),
                ("text", " x "),
                ("operator", "="),
                ("text", " "),
                ("number", "42"),
                ("punctuation", ";"),
                ("text", " "),
                ("comment", "// comment"),
            ]
        );
    }

    #[test]
    fn unknown_language_passes_input_through() {
        assert_eq!(tokenize("some code", "unknown"), vec![Token::text("some code")]);
    }

    #[test]
    fn unknown_language_wraps_empty_input() {
        assert_eq!(tokenize("", "nonexistent"), vec![Token::text("")]);
    }

    #[test]
    fn known_language_empty_input_yields_nothing() {
        assert!(tokenize("", "javascript").is_empty());
    }

    #[test]
    fn adjacent_same_type_candidates_merge() {
        let grammar = Grammar::builder("demo")
            .pattern(kinds::PUNCTUATION, r"[()]")
            .build()
            .unwrap();
        assert_eq!(
            pairs(&tokenize_with(&grammar, "(()) x")),
            vec![("punctuation", "(())"), ("text", " x")]
        );
    }

    #[test]
    fn empty_table_falls_back_everywhere() {
        let grammar = Grammar::builder("plain").build().unwrap();
        assert_eq!(
            tokenize_with(&grammar, "a  b\n"),
            vec![Token::text("a  b\n")]
        );
    }

    #[test]
    fn multibyte_input_round_trips() {
        let input = "const π = \"ünïcödé\"; // ✓";
        assert_eq!(detokenize(&tokenize(input, "javascript")), input);
    }

    #[test]
    fn no_empty_tokens_are_emitted() {
        let tokens = tokenize("a\n\n  /* x */ 1", "javascript");
        assert!(tokens.iter().all(|t| !t.content.is_empty()));
    }
}
